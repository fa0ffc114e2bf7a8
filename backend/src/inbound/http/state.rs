//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DeviceEntriesCommand, DeviceEntriesQuery, DeviceLogsCommand, DeviceLogsQuery, DocumentStore,
};
use crate::domain::{DeviceEntry, DeviceEntryService, DeviceLogService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub entries: Arc<dyn DeviceEntriesCommand>,
    pub entries_query: Arc<dyn DeviceEntriesQuery>,
    pub logs: Arc<dyn DeviceLogsCommand>,
    pub logs_query: Arc<dyn DeviceLogsQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        entries: Arc<dyn DeviceEntriesCommand>,
        entries_query: Arc<dyn DeviceEntriesQuery>,
        logs: Arc<dyn DeviceLogsCommand>,
        logs_query: Arc<dyn DeviceLogsQuery>,
    ) -> Self {
        Self {
            entries,
            entries_query,
            logs,
            logs_query,
        }
    }

    /// Wire the device services over a single document store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use device_list::domain::DeviceEntry;
    /// use device_list::inbound::http::state::HttpState;
    /// use device_list::outbound::persistence::InMemoryDocumentStore;
    ///
    /// let store = InMemoryDocumentStore::<DeviceEntry>::default();
    /// let state = HttpState::from_store(Arc::new(store));
    /// # let _ = state;
    /// ```
    pub fn from_store(store: Arc<dyn DocumentStore<DeviceEntry>>) -> Self {
        let entries = Arc::new(DeviceEntryService::new(Arc::clone(&store)));
        let logs = Arc::new(DeviceLogService::new(store));
        Self::new(entries.clone(), entries, logs.clone(), logs)
    }
}
