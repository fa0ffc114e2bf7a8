//! Document store adapters.
//!
//! - `InMemoryDocumentStore`: process-local store used when no database is
//!   configured and by tests.
//! - `DieselDocumentStore`: PostgreSQL via Diesel with async support through
//!   `diesel-async` and `bb8` connection pooling.
//!
//! Adapters only translate between stored bodies and domain documents. Diesel
//! row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! internal to this module.
//!
//! # Example
//!
//! ```ignore
//! use device_list::outbound::persistence::{DbPool, DieselDocumentStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/devices")).await?;
//! let store = DieselDocumentStore::<DeviceEntry>::new(pool, "device_list");
//! ```

mod diesel_document_store;
mod in_memory_document_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_document_store::DieselDocumentStore;
pub use in_memory_document_store::InMemoryDocumentStore;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
