//! Handlers for the log list embedded in a device entry.
//!
//! ```text
//! GET    /device-list/entries/{entryId}/logs
//! POST   /device-list/entries/{entryId}/logs
//! GET    /device-list/entries/{entryId}/logs/{logId}
//! PUT    /device-list/entries/{entryId}/logs/{logId}
//! DELETE /device-list/entries/{entryId}/logs/{logId}
//! ```
//!
//! Bodies are taken as raw bytes and decoded by the domain after the owning
//! entry has been loaded.

use actix_web::{delete, get, post, put, web};

use crate::domain::{DeviceLog, DeviceLogPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DeviceLogSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List the logs of a device entry.
#[utoipa::path(
    get,
    path = "/device-list/entries/{entryId}/logs",
    params(("entryId" = String, Path, description = "Device entry id")),
    responses(
        (status = 200, description = "Logs in insertion order", body = [DeviceLogSchema]),
        (status = 404, description = "Entry not found", body = ErrorSchema)
    ),
    tags = ["device-logs"],
    operation_id = "getDeviceLogs"
)]
#[get("/entries/{entry_id}/logs")]
pub async fn list_logs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<DeviceLog>>> {
    let logs = state.logs_query.list_logs(&path.into_inner()).await?;
    Ok(web::Json(logs))
}

/// Append a log to a device entry.
#[utoipa::path(
    post,
    path = "/device-list/entries/{entryId}/logs",
    params(("entryId" = String, Path, description = "Device entry id")),
    request_body = DeviceLogSchema,
    responses(
        (status = 200, description = "Stored log", body = DeviceLogSchema),
        (status = 400, description = "Invalid body or missing deviceId", body = ErrorSchema),
        (status = 404, description = "Entry not found", body = ErrorSchema),
        (status = 409, description = "Log id already used in this entry", body = ErrorSchema)
    ),
    tags = ["device-logs"],
    operation_id = "createDeviceLog"
)]
#[post("/entries/{entry_id}/logs")]
pub async fn create_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<DeviceLog>> {
    let log = state
        .logs
        .create_log(&path.into_inner(), DeviceLogPayload::new(body.to_vec()))
        .await?;
    Ok(web::Json(log))
}

/// Fetch a single log.
#[utoipa::path(
    get,
    path = "/device-list/entries/{entryId}/logs/{logId}",
    params(
        ("entryId" = String, Path, description = "Device entry id"),
        ("logId" = String, Path, description = "Log id")
    ),
    responses(
        (status = 200, description = "Log", body = DeviceLogSchema),
        (status = 400, description = "Blank log id", body = ErrorSchema),
        (status = 404, description = "Entry or log not found", body = ErrorSchema)
    ),
    tags = ["device-logs"],
    operation_id = "getDeviceLog"
)]
#[get("/entries/{entry_id}/logs/{log_id}")]
pub async fn get_log(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<DeviceLog>> {
    let (entry_id, log_id) = path.into_inner();
    let log = state.logs_query.get_log(&entry_id, &log_id).await?;
    Ok(web::Json(log))
}

/// Replace a log. The log is matched by the `id` carried in the body.
#[utoipa::path(
    put,
    path = "/device-list/entries/{entryId}/logs/{logId}",
    params(
        ("entryId" = String, Path, description = "Device entry id"),
        ("logId" = String, Path, description = "Log id")
    ),
    request_body = DeviceLogSchema,
    responses(
        (status = 200, description = "Updated log", body = DeviceLogSchema),
        (status = 400, description = "Invalid body or blank id", body = ErrorSchema),
        (status = 404, description = "Entry or log not found", body = ErrorSchema)
    ),
    tags = ["device-logs"],
    operation_id = "updateDeviceLog"
)]
#[put("/entries/{entry_id}/logs/{log_id}")]
pub async fn update_log(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> ApiResult<web::Json<DeviceLog>> {
    let (entry_id, _log_id) = path.into_inner();
    let log = state
        .logs
        .update_log(&entry_id, DeviceLogPayload::new(body.to_vec()))
        .await?;
    Ok(web::Json(log))
}

/// Remove a log and return it.
#[utoipa::path(
    delete,
    path = "/device-list/entries/{entryId}/logs/{logId}",
    params(
        ("entryId" = String, Path, description = "Device entry id"),
        ("logId" = String, Path, description = "Log id")
    ),
    responses(
        (status = 200, description = "Deleted log", body = DeviceLogSchema),
        (status = 404, description = "Entry or log not found", body = ErrorSchema)
    ),
    tags = ["device-logs"],
    operation_id = "deleteDeviceLog"
)]
#[delete("/entries/{entry_id}/logs/{log_id}")]
pub async fn delete_log(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<DeviceLog>> {
    let (entry_id, log_id) = path.into_inner();
    let log = state.logs.delete_log(&entry_id, &log_id).await?;
    Ok(web::Json(log))
}

#[cfg(test)]
#[path = "device_logs_tests.rs"]
mod tests;
