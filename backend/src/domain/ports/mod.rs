//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod device_entries;
mod device_logs;
mod document_store;

#[cfg(test)]
pub use device_entries::{MockDeviceEntriesCommand, MockDeviceEntriesQuery};
pub use device_entries::{DeviceEntriesCommand, DeviceEntriesQuery};
#[cfg(test)]
pub use device_logs::{MockDeviceLogsCommand, MockDeviceLogsQuery};
pub use device_logs::{DeviceLogsCommand, DeviceLogsQuery};
#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{DocumentStore, DocumentStoreError};
