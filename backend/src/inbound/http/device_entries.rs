//! Top-level device entry handlers.
//!
//! ```text
//! GET    /device-list/entries
//! POST   /device-list/entries
//! GET    /device-list/entries/{entryId}
//! PUT    /device-list/entries/{entryId}
//! DELETE /device-list/entries/{entryId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::DeviceEntry;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DeviceEntrySchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List every device entry.
#[utoipa::path(
    get,
    path = "/device-list/entries",
    responses(
        (status = 200, description = "All device entries", body = [DeviceEntrySchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["device-entries"],
    operation_id = "getDeviceEntries"
)]
#[get("/entries")]
pub async fn list_entries(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<DeviceEntry>>> {
    let entries = state.entries_query.list().await?;
    Ok(web::Json(entries))
}

/// Create a device entry.
#[utoipa::path(
    post,
    path = "/device-list/entries",
    request_body = DeviceEntrySchema,
    responses(
        (status = 201, description = "Entry created", body = DeviceEntrySchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Entry id already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["device-entries"],
    operation_id = "createDeviceEntry"
)]
#[post("/entries")]
pub async fn create_entry(
    state: web::Data<HttpState>,
    payload: web::Json<DeviceEntry>,
) -> ApiResult<HttpResponse> {
    let created = state.entries.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch a device entry by id.
#[utoipa::path(
    get,
    path = "/device-list/entries/{entryId}",
    params(("entryId" = String, Path, description = "Device entry id")),
    responses(
        (status = 200, description = "Device entry", body = DeviceEntrySchema),
        (status = 404, description = "Entry not found", body = ErrorSchema)
    ),
    tags = ["device-entries"],
    operation_id = "getDeviceEntry"
)]
#[get("/entries/{entry_id}")]
pub async fn get_entry(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeviceEntry>> {
    let entry = state.entries_query.get(&path.into_inner()).await?;
    Ok(web::Json(entry))
}

/// Replace a device entry. The path id overrides any id in the body.
#[utoipa::path(
    put,
    path = "/device-list/entries/{entryId}",
    params(("entryId" = String, Path, description = "Device entry id")),
    request_body = DeviceEntrySchema,
    responses(
        (status = 200, description = "Entry updated", body = DeviceEntrySchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Entry not found", body = ErrorSchema)
    ),
    tags = ["device-entries"],
    operation_id = "updateDeviceEntry"
)]
#[put("/entries/{entry_id}")]
pub async fn update_entry(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DeviceEntry>,
) -> ApiResult<web::Json<DeviceEntry>> {
    let updated = state
        .entries
        .update(&path.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(updated))
}

/// Delete a device entry together with its logs.
#[utoipa::path(
    delete,
    path = "/device-list/entries/{entryId}",
    params(("entryId" = String, Path, description = "Device entry id")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found", body = ErrorSchema)
    ),
    tags = ["device-entries"],
    operation_id = "deleteDeviceEntry"
)]
#[delete("/entries/{entry_id}")]
pub async fn delete_entry(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.entries.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "device_entries_tests.rs"]
mod tests;
