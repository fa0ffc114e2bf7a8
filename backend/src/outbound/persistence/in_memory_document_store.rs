//! Process-local `DocumentStore` keeping documents in insertion order.
//!
//! Used when no database URL is configured and as a lightweight store in
//! tests. Contents are lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{DocumentStore, DocumentStoreError};

/// In-memory implementation of the `DocumentStore` port.
///
/// # Examples
/// ```
/// use device_list::domain::ports::DocumentStore;
/// use device_list::outbound::persistence::InMemoryDocumentStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryDocumentStore::<String>::default();
/// store.create("a", &"first".to_owned()).await.expect("create");
/// assert_eq!(store.find_by_id("a").await.expect("find"), "first");
/// assert!(store.create("a", &"again".to_owned()).await.is_err());
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryDocumentStore<D> {
    documents: RwLock<Vec<(String, D)>>,
}

impl<D> Default for InMemoryDocumentStore<D> {
    fn default() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

impl<D> InMemoryDocumentStore<D> {
    /// Create a store pre-populated with `(id, document)` pairs.
    pub fn with_documents(documents: impl IntoIterator<Item = (String, D)>) -> Self {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
        }
    }
}

#[async_trait]
impl<D> DocumentStore<D> for InMemoryDocumentStore<D>
where
    D: Clone + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<D>, DocumentStoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().map(|(_, doc)| doc.clone()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<D, DocumentStoreError> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, doc)| doc.clone())
            .ok_or_else(|| DocumentStoreError::not_found(id))
    }

    async fn create(&self, id: &str, document: &D) -> Result<(), DocumentStoreError> {
        let mut documents = self.documents.write().await;
        if documents.iter().any(|(key, _)| key == id) {
            return Err(DocumentStoreError::conflict(id));
        }
        documents.push((id.to_owned(), document.clone()));
        Ok(())
    }

    async fn update(&self, id: &str, document: &D) -> Result<(), DocumentStoreError> {
        let mut documents = self.documents.write().await;
        let slot = documents
            .iter_mut()
            .find(|(key, _)| key == id)
            .ok_or_else(|| DocumentStoreError::not_found(id))?;
        slot.1 = document.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DocumentStoreError> {
        let mut documents = self.documents.write().await;
        let position = documents
            .iter()
            .position(|(key, _)| key == id)
            .ok_or_else(|| DocumentStoreError::not_found(id))?;
        documents.remove(position);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DocumentStoreError> {
        let documents = self.documents.read().await;
        debug!(count = documents.len(), "in-memory store discarded");
        Ok(())
    }
}
