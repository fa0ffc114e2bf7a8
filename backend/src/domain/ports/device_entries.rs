//! Driving ports for top-level device entries.
//!
//! HTTP handlers call these ports for direct CRUD on device documents. Every
//! operation maps to exactly one store call.

use async_trait::async_trait;

use crate::domain::{DeviceEntry, Error};

/// Read access to device entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceEntriesQuery: Send + Sync {
    /// Return every device entry; an empty store yields an empty list.
    async fn list(&self) -> Result<Vec<DeviceEntry>, Error>;

    /// Return the entry stored under `entry_id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] for unknown ids.
    async fn get(&self, entry_id: &str) -> Result<DeviceEntry, Error>;
}

/// Write access to device entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceEntriesCommand: Send + Sync {
    /// Store a new entry, generating an id when none was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::Conflict`] when the id is taken.
    async fn create(&self, entry: DeviceEntry) -> Result<DeviceEntry, Error>;

    /// Replace the entry stored under `entry_id`. The path id wins over any
    /// id carried in the body.
    async fn update(&self, entry_id: &str, entry: DeviceEntry) -> Result<DeviceEntry, Error>;

    /// Remove the entry stored under `entry_id`.
    async fn delete(&self, entry_id: &str) -> Result<(), Error>;
}
