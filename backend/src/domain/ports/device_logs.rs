//! Driving ports for the log list embedded in a device entry.
//!
//! Every operation reads the owning entry first. Write operations persist
//! the whole entry when, and only when, the log list actually changed.

use async_trait::async_trait;

use crate::domain::{DeviceLog, DeviceLogPayload, Error};

/// Read access to a device's log list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceLogsQuery: Send + Sync {
    /// Return the log list of `entry_id` in insertion order.
    async fn list_logs(&self, entry_id: &str) -> Result<Vec<DeviceLog>, Error>;

    /// Return a single log of `entry_id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] for a blank
    /// `log_id` and [`crate::domain::ErrorCode::NotFound`] when either the
    /// entry or the log is missing.
    async fn get_log(&self, entry_id: &str, log_id: &str) -> Result<DeviceLog, Error>;
}

/// Write access to a device's log list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceLogsCommand: Send + Sync {
    /// Append a log, allocating an id for blank or `@new` ids.
    async fn create_log(
        &self,
        entry_id: &str,
        payload: DeviceLogPayload,
    ) -> Result<DeviceLog, Error>;

    /// Replace the log whose id matches the one carried in `payload`.
    async fn update_log(
        &self,
        entry_id: &str,
        payload: DeviceLogPayload,
    ) -> Result<DeviceLog, Error>;

    /// Remove a log and return it. The order of remaining logs is kept.
    async fn delete_log(&self, entry_id: &str, log_id: &str) -> Result<DeviceLog, Error>;
}
