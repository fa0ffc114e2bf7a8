//! Domain primitives, services and ports.
//!
//! Purpose: define the device documents served by the API, the driving and
//! driven ports around them, and the read-modify-write pipeline used for the
//! embedded log list. Nothing in this module depends on HTTP types.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - DeviceEntry / DeviceLog / Department: stored document shape.
//! - EntryGate / Mutation: load, mutate and conditionally persist a document.
//! - DeviceEntryService / DeviceLogService: implementations of the ports.

pub mod device;
mod device_entry_service;
mod device_log_service;
mod entry_gate;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::device::{Department, DeviceEntry, DeviceLog, DeviceLogPayload};
pub use self::device_entry_service::DeviceEntryService;
pub use self::device_log_service::DeviceLogService;
pub use self::entry_gate::{EntryGate, Mutation};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use device_list::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Entry not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
