//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or a required field is missing.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested device entry or log does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Entry not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c1f3e-8f0a-4a52-9f55-0d3c4f1d2a10")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Department`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Department)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DepartmentSchema {
    #[schema(example = "Kardiológia")]
    name: String,
    #[schema(example = "kardio")]
    code: String,
}

/// OpenAPI schema for [`crate::domain::DeviceLog`].
///
/// Entry in a device's `logList`; `id` is unique within that list only.
#[derive(ToSchema)]
#[schema(as = crate::domain::DeviceLog, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeviceLogSchema {
    /// Log identifier; send `""` or `"@new"` to have one generated.
    #[schema(example = "1")]
    id: String,
    /// `deviceId` of the owning entry. Required when creating a log.
    #[schema(example = "1-crp")]
    device_id: String,
    #[schema(example = "zakupenie zariadenia")]
    text: String,
    #[schema(value_type = Option<String>, format = DateTime)]
    created_at: Option<String>,
}

/// OpenAPI schema for [`crate::domain::DeviceEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DeviceEntry, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeviceEntrySchema {
    /// Entry identifier; send `""` or `"@new"` to have one generated.
    #[schema(example = "x321ab3")]
    id: String,
    #[schema(example = "CRP")]
    name: String,
    #[schema(example = "1-crp")]
    device_id: String,
    #[schema(value_type = Option<String>, format = DateTime)]
    warranty_until: Option<String>,
    #[schema(example = 4.5)]
    price: f64,
    department: DepartmentSchema,
    /// Embedded logs in insertion order. `null` is read as empty.
    log_list: Vec<DeviceLogSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "conflict", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"), "schema should contain traceId");
    }

    #[test]
    fn device_entry_schema_uses_camel_case() {
        assert_eq!(DeviceEntrySchema::name(), "crate.domain.DeviceEntry");
        let schema_json = schema_to_json::<DeviceEntrySchema>();
        for field in ["deviceId", "warrantyUntil", "logList", "department"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
