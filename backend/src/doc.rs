//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every device list endpoint, the health checks and
//! the schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds.

use crate::inbound::http::schemas::{
    DepartmentSchema, DeviceEntrySchema, DeviceLogSchema, ErrorCodeSchema, ErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Device list API",
        description = "Device entries with embedded, ordered log lists."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::device_entries::list_entries,
        crate::inbound::http::device_entries::create_entry,
        crate::inbound::http::device_entries::get_entry,
        crate::inbound::http::device_entries::update_entry,
        crate::inbound::http::device_entries::delete_entry,
        crate::inbound::http::device_logs::list_logs,
        crate::inbound::http::device_logs::create_log,
        crate::inbound::http::device_logs::get_log,
        crate::inbound::http::device_logs::update_log,
        crate::inbound::http::device_logs::delete_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DeviceEntrySchema,
        DeviceLogSchema,
        DepartmentSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "device-entries", description = "Top-level device documents"),
        (name = "device-logs", description = "Logs embedded in a device entry"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/device-list/entries")]
    #[case("/device-list/entries/{entryId}")]
    #[case("/device-list/entries/{entryId}/logs")]
    #[case("/device-list/entries/{entryId}/logs/{logId}")]
    #[case("/health/ready")]
    fn registers_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn device_entry_schema_has_log_list() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let entry = schemas
            .get("crate.domain.DeviceEntry")
            .expect("DeviceEntry schema");

        assert_object_schema_has_field(entry, "logList");
        assert_object_schema_has_field(entry, "deviceId");
    }
}
