//! Driven port for keyed document storage.
//!
//! A [`DocumentStore`] holds whole documents addressed by a string key. It
//! knows nothing about the shape of the documents; nested collections such as
//! a device's `logList` are persisted by writing back the owning document.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum DocumentStoreError {
        /// No document exists under the requested key.
        NotFound { id: String } => "document not found: {id}",
        /// A document already exists under the key being created.
        Conflict { id: String } => "document already exists: {id}",
        /// The backing store could not be reached.
        Connection { message: String } => "document store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "document store query failed: {message}",
        /// A document could not be encoded or decoded.
        Serialization { message: String } => "document serialization failed: {message}",
    }
}

/// Keyed storage for whole documents of type `D`.
///
/// `find_by_id`, `update` and `delete` report an absent key as
/// [`DocumentStoreError::NotFound`]; `create` reports an existing key as
/// [`DocumentStoreError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore<D>: Send + Sync
where
    D: Send + Sync + 'static,
{
    /// Return every stored document in insertion order.
    async fn find_all(&self) -> Result<Vec<D>, DocumentStoreError>;

    /// Load the document stored under `id`.
    async fn find_by_id(&self, id: &str) -> Result<D, DocumentStoreError>;

    /// Store `document` under a new key.
    async fn create(&self, id: &str, document: &D) -> Result<(), DocumentStoreError>;

    /// Replace the document stored under an existing key.
    async fn update(&self, id: &str, document: &D) -> Result<(), DocumentStoreError>;

    /// Remove the document stored under `id`.
    async fn delete(&self, id: &str) -> Result<(), DocumentStoreError>;

    /// Release adapter resources. Called once during shutdown.
    async fn disconnect(&self) -> Result<(), DocumentStoreError>;
}
