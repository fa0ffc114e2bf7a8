//! Read-modify-write pipeline over a single stored document.
//!
//! [`EntryGate::apply`] loads a document, hands a private copy to a mutator
//! and writes the copy back only when the mutator reports a change. Nothing
//! is locked between the load and the write: two concurrent mutations of the
//! same document race and the last write wins.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::Error;
use crate::domain::ports::{DocumentStore, DocumentStoreError};

/// Outcome of a successful mutator run.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    /// The snapshot was modified and must be persisted.
    Changed(T),
    /// The snapshot is untouched; persistence is skipped.
    Unchanged(T),
}

impl<T> Mutation<T> {
    /// Whether the gate must write the snapshot back.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Discard the persistence flag and keep the payload.
    pub fn into_payload(self) -> T {
        match self {
            Self::Changed(payload) | Self::Unchanged(payload) => payload,
        }
    }
}

/// Load, mutate and conditionally persist documents of type `D`.
pub struct EntryGate<S: ?Sized, D> {
    store: Arc<S>,
    _document: PhantomData<fn() -> D>,
}

impl<S: ?Sized, D> Clone for EntryGate<S, D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _document: PhantomData,
        }
    }
}

impl<S, D> EntryGate<S, D>
where
    S: DocumentStore<D> + ?Sized,
    D: Send + Sync + 'static,
{
    /// Create a gate over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _document: PhantomData,
        }
    }

    /// Run `mutator` against the document stored under `entry_id`.
    ///
    /// A missing document yields [`crate::domain::ErrorCode::NotFound`] and
    /// the mutator is never invoked. A mutator error is returned as-is and
    /// nothing is written. When the write of a changed document finds the
    /// key gone, the result is `NotFound` regardless of what the mutator
    /// returned.
    pub async fn apply<T, F>(&self, entry_id: &str, mutator: F) -> Result<T, Error>
    where
        F: FnOnce(&mut D) -> Result<Mutation<T>, Error> + Send,
        T: Send,
    {
        let mut document = self
            .store
            .find_by_id(entry_id)
            .await
            .map_err(|err| Self::map_store_error(entry_id, "load", err))?;

        let outcome = mutator(&mut document)?;
        if !outcome.is_changed() {
            return Ok(outcome.into_payload());
        }

        self.store
            .update(entry_id, &document)
            .await
            .map_err(|err| Self::map_store_error(entry_id, "persist", err))?;
        debug!(entry_id, "persisted mutated entry");
        Ok(outcome.into_payload())
    }

    fn map_store_error(entry_id: &str, stage: &'static str, err: DocumentStoreError) -> Error {
        if err.is_not_found() {
            return Error::not_found("Entry not found");
        }
        error!(entry_id, stage, error = %err, "document store failure");
        Error::internal(format!("failed to {stage} entry: {err}"))
    }
}
