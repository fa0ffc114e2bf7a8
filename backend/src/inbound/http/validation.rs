//! Extractor configuration turning actix request errors into domain errors.
//!
//! Malformed JSON bodies and undecodable path segments are reported through
//! the standard error envelope with status 400 instead of actix's plain-text
//! defaults.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidBody,
    InvalidPath,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidBody => "invalid_body",
            ErrorCode::InvalidPath => "invalid_path",
        }
    }
}

fn rejection(message: &str, code: ErrorCode, cause: impl ToString) -> Error {
    Error::invalid_request(message).with_details(json!({
        "error": cause.to_string(),
        "code": code.as_str(),
    }))
}

pub(crate) fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected request body");
    rejection("Invalid request body", ErrorCode::InvalidBody, err).into()
}

pub(crate) fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected path parameters");
    rejection("Invalid path parameters", ErrorCode::InvalidPath, err).into()
}

/// JSON extractor configuration emitting the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Path extractor configuration emitting the error envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}
