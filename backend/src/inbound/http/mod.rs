//! HTTP inbound adapter exposing REST endpoints.

pub mod device_entries;
pub mod device_logs;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Base path for the device list API.
pub const DEVICE_LIST_SCOPE: &str = "/device-list";

/// Scope serving device entries and their logs.
///
/// Registers extractor configuration so malformed JSON bodies and path
/// segments are reported with the standard error envelope. Callers provide
/// [`state::HttpState`] as app data.
pub fn device_list_scope() -> Scope {
    web::scope(DEVICE_LIST_SCOPE)
        .app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(device_entries::list_entries)
        .service(device_entries::create_entry)
        .service(device_entries::get_entry)
        .service(device_entries::update_entry)
        .service(device_entries::delete_entry)
        .service(device_logs::list_logs)
        .service(device_logs::create_log)
        .service(device_logs::get_log)
        .service(device_logs::update_log)
        .service(device_logs::delete_log)
}
