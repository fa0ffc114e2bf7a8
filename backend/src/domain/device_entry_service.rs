//! Direct CRUD over top-level device entries.
//!
//! Each operation issues a single store call; failures are translated into
//! domain errors by matching on the store error variant.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::device::{generate_id, requests_generated_id};
use crate::domain::ports::{
    DeviceEntriesCommand, DeviceEntriesQuery, DocumentStore, DocumentStoreError,
};
use crate::domain::{DeviceEntry, Error};

/// Device entry service implementing the top-level driving ports.
pub struct DeviceEntryService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for DeviceEntryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ?Sized> DeviceEntryService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

fn map_store_error(error: DocumentStoreError) -> Error {
    match error {
        DocumentStoreError::NotFound { .. } => Error::not_found("Entry not found"),
        DocumentStoreError::Conflict { id } => Error::conflict("Entry already exists")
            .with_details(serde_json::json!({ "id": id, "code": "duplicate_id" })),
        other => {
            error!(error = %other, "document store failure");
            Error::internal(format!("device store error: {other}"))
        }
    }
}

#[async_trait]
impl<S> DeviceEntriesQuery for DeviceEntryService<S>
where
    S: DocumentStore<DeviceEntry> + ?Sized,
{
    async fn list(&self) -> Result<Vec<DeviceEntry>, Error> {
        self.store.find_all().await.map_err(map_store_error)
    }

    async fn get(&self, entry_id: &str) -> Result<DeviceEntry, Error> {
        self.store.find_by_id(entry_id).await.map_err(map_store_error)
    }
}

#[async_trait]
impl<S> DeviceEntriesCommand for DeviceEntryService<S>
where
    S: DocumentStore<DeviceEntry> + ?Sized,
{
    async fn create(&self, mut entry: DeviceEntry) -> Result<DeviceEntry, Error> {
        if requests_generated_id(&entry.id) {
            entry.id = generate_id();
        }
        self.store
            .create(&entry.id, &entry)
            .await
            .map_err(map_store_error)?;
        info!(entry_id = %entry.id, "device entry created");
        Ok(entry)
    }

    async fn update(&self, entry_id: &str, mut entry: DeviceEntry) -> Result<DeviceEntry, Error> {
        entry.id = entry_id.to_owned();
        self.store
            .update(entry_id, &entry)
            .await
            .map_err(map_store_error)?;
        Ok(entry)
    }

    async fn delete(&self, entry_id: &str) -> Result<(), Error> {
        self.store.delete(entry_id).await.map_err(map_store_error)?;
        info!(entry_id, "device entry deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Store error translation and id handling.

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockDocumentStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn entry() -> DeviceEntry {
        DeviceEntry {
            id: "test-device".to_owned(),
            name: "test-device-name".to_owned(),
            device_id: "test-device-id".to_owned(),
            ..DeviceEntry::default()
        }
    }

    type Store = MockDocumentStore<DeviceEntry>;

    fn service(store: Store) -> DeviceEntryService<Store> {
        DeviceEntryService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn list_of_empty_store_is_empty() {
        let mut store = MockDocumentStore::new();
        store.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

        let entries = service(store).list().await.expect("list succeeds");
        assert!(entries.is_empty());
    }

    #[rstest]
    #[case(DocumentStoreError::not_found("x"), ErrorCode::NotFound)]
    #[case(DocumentStoreError::connection("down"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn get_maps_store_errors(#[case] failure: DocumentStoreError, #[case] code: ErrorCode) {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Err(failure));

        let error = service(store).get("x").await.expect_err("get fails");
        assert_eq!(error.code(), code);
    }

    #[rstest]
    #[case("")]
    #[case("@new")]
    #[tokio::test]
    async fn create_generates_missing_id(entry: DeviceEntry, #[case] id: &str) {
        let mut store = MockDocumentStore::new();
        store
            .expect_create()
            .withf(|id, doc: &DeviceEntry| !id.is_empty() && id != "@new" && doc.id == id)
            .times(1)
            .return_once(|_, _| Ok(()));

        let created = service(store)
            .create(DeviceEntry {
                id: id.to_owned(),
                ..entry
            })
            .await
            .expect("create succeeds");
        assert!(!requests_generated_id(&created.id));
    }

    #[rstest]
    #[tokio::test]
    async fn create_duplicate_is_conflict(entry: DeviceEntry) {
        let mut store = MockDocumentStore::new();
        store
            .expect_create()
            .times(1)
            .return_once(|id, _| Err(DocumentStoreError::conflict(id)));

        let error = service(store).create(entry).await.expect_err("duplicate");
        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[tokio::test]
    async fn update_uses_path_id(entry: DeviceEntry) {
        let mut store = MockDocumentStore::new();
        store
            .expect_update()
            .withf(|id, doc: &DeviceEntry| id == "path-id" && doc.id == "path-id")
            .times(1)
            .return_once(|_, _| Ok(()));

        let updated = service(store)
            .update("path-id", entry)
            .await
            .expect("update succeeds");
        assert_eq!(updated.id, "path-id");
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_entry_does_not_create(entry: DeviceEntry) {
        let mut store = MockDocumentStore::new();
        store
            .expect_update()
            .times(1)
            .return_once(|id, _| Err(DocumentStoreError::not_found(id)));
        store.expect_create().times(0);

        let error = service(store)
            .update("unknown-device", entry)
            .await
            .expect_err("unknown entry");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_of_unknown_entry_is_not_found() {
        let mut store = MockDocumentStore::new();
        store
            .expect_delete()
            .times(1)
            .return_once(|id| Err(DocumentStoreError::not_found(id)));

        let error = service(store).delete("gone").await.expect_err("unknown entry");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
