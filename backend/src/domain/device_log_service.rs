//! Operations on the log list embedded in a device entry.
//!
//! Every operation runs through [`EntryGate`]: the owning entry is loaded,
//! the log list is edited in memory and the entry is written back only when
//! the list changed. Request bodies are decoded inside the mutator, after the
//! entry lookup, so an unknown entry is reported before a malformed body.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::device::{generate_id, requests_generated_id};
use crate::domain::ports::{DeviceLogsCommand, DeviceLogsQuery, DocumentStore};
use crate::domain::{DeviceEntry, DeviceLog, DeviceLogPayload, EntryGate, Error, Mutation};

/// Log list service implementing the nested driving ports.
pub struct DeviceLogService<S: ?Sized> {
    gate: EntryGate<S, DeviceEntry>,
}

impl<S: ?Sized> Clone for DeviceLogService<S> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
        }
    }
}

impl<S> DeviceLogService<S>
where
    S: DocumentStore<DeviceEntry> + ?Sized,
{
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            gate: EntryGate::new(store),
        }
    }
}

fn missing_field(field: &str, message: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

fn log_not_found() -> Error {
    Error::not_found("Log entry not found")
}

fn append_log(
    entry: &mut DeviceEntry,
    payload: &DeviceLogPayload,
) -> Result<Mutation<DeviceLog>, Error> {
    let mut log = payload.parse()?;
    if log.device_id.is_empty() {
        return Err(missing_field("deviceId", "Device ID is required"));
    }
    if requests_generated_id(&log.id) {
        log.id = generate_id();
    }
    if entry.log_position(&log.id).is_some() {
        return Err(Error::conflict("Log entry already exists").with_details(json!({
            "id": log.id,
            "code": "duplicate_id",
        })));
    }

    let log_id = log.id.clone();
    entry.log_list.push(log);
    entry
        .find_log(&log_id)
        .cloned()
        .map(Mutation::Changed)
        .ok_or_else(|| Error::internal("Failed to save log entry"))
}

fn replace_log(
    entry: &mut DeviceEntry,
    payload: &DeviceLogPayload,
) -> Result<Mutation<DeviceLog>, Error> {
    let log = payload.parse()?;
    if log.id.is_empty() {
        return Err(missing_field("id", "Log entry ID is required"));
    }
    let slot = entry
        .log_list
        .iter_mut()
        .find(|existing| existing.id == log.id)
        .ok_or_else(log_not_found)?;
    *slot = log.clone();
    Ok(Mutation::Changed(log))
}

fn remove_log(entry: &mut DeviceEntry, log_id: &str) -> Result<Mutation<DeviceLog>, Error> {
    let position = entry.log_position(log_id).ok_or_else(log_not_found)?;
    Ok(Mutation::Changed(entry.log_list.remove(position)))
}

#[async_trait]
impl<S> DeviceLogsQuery for DeviceLogService<S>
where
    S: DocumentStore<DeviceEntry> + ?Sized,
{
    async fn list_logs(&self, entry_id: &str) -> Result<Vec<DeviceLog>, Error> {
        self.gate
            .apply(entry_id, |entry| Ok(Mutation::Unchanged(entry.log_list.clone())))
            .await
    }

    async fn get_log(&self, entry_id: &str, log_id: &str) -> Result<DeviceLog, Error> {
        self.gate
            .apply(entry_id, |entry| {
                if log_id.is_empty() {
                    return Err(missing_field("logId", "Log ID is required"));
                }
                entry
                    .find_log(log_id)
                    .cloned()
                    .map(Mutation::Unchanged)
                    .ok_or_else(log_not_found)
            })
            .await
    }
}

#[async_trait]
impl<S> DeviceLogsCommand for DeviceLogService<S>
where
    S: DocumentStore<DeviceEntry> + ?Sized,
{
    async fn create_log(
        &self,
        entry_id: &str,
        payload: DeviceLogPayload,
    ) -> Result<DeviceLog, Error> {
        let log = self
            .gate
            .apply(entry_id, |entry| append_log(entry, &payload))
            .await?;
        info!(entry_id, log_id = %log.id, "device log created");
        Ok(log)
    }

    async fn update_log(
        &self,
        entry_id: &str,
        payload: DeviceLogPayload,
    ) -> Result<DeviceLog, Error> {
        self.gate
            .apply(entry_id, |entry| replace_log(entry, &payload))
            .await
    }

    async fn delete_log(&self, entry_id: &str, log_id: &str) -> Result<DeviceLog, Error> {
        let log = self
            .gate
            .apply(entry_id, |entry| remove_log(entry, log_id))
            .await?;
        info!(entry_id, log_id, "device log deleted");
        Ok(log)
    }
}

#[cfg(test)]
#[path = "device_log_service_tests.rs"]
mod tests;
