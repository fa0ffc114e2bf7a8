//! PostgreSQL-backed `DocumentStore` implementation using Diesel ORM.
//!
//! Documents are stored whole in a JSONB column, keyed by collection and id.
//! `find_all` returns documents in insertion order.

use std::marker::PhantomData;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::ports::{DocumentStore, DocumentStoreError};

use super::models::NewDocumentRow;
use super::pool::{DbPool, PoolError};
use super::schema::documents;

/// Diesel-backed implementation of the `DocumentStore` port.
pub struct DieselDocumentStore<D> {
    pool: DbPool,
    collection: String,
    _document: PhantomData<fn() -> D>,
}

impl<D> Clone for DieselDocumentStore<D> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            collection: self.collection.clone(),
            _document: PhantomData,
        }
    }
}

impl<D> DieselDocumentStore<D> {
    /// Create a store over `collection` using the given pool.
    pub fn new(pool: DbPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
            _document: PhantomData,
        }
    }
}

fn map_pool_error(error: PoolError) -> DocumentStoreError {
    DocumentStoreError::connection(error.message())
}

/// Map Diesel errors to document store errors. `id` names the key involved.
fn map_diesel_error(error: diesel::result::Error, id: &str) -> DocumentStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DocumentStoreError::not_found(id),
        DieselError::QueryBuilderError(_) => DocumentStoreError::query("database query error"),
        DieselError::DatabaseError(kind, _) => match kind {
            DatabaseErrorKind::UniqueViolation => DocumentStoreError::conflict(id),
            DatabaseErrorKind::ClosedConnection => {
                DocumentStoreError::connection("database connection error")
            }
            _ => DocumentStoreError::query("database error"),
        },
        DieselError::DeserializationError(err) | DieselError::SerializationError(err) => {
            DocumentStoreError::serialization(err.to_string())
        }
        _ => DocumentStoreError::query("database error"),
    }
}

fn encode<D: Serialize>(document: &D) -> Result<serde_json::Value, DocumentStoreError> {
    serde_json::to_value(document).map_err(|err| DocumentStoreError::serialization(err.to_string()))
}

fn decode<D: DeserializeOwned>(body: serde_json::Value) -> Result<D, DocumentStoreError> {
    serde_json::from_value(body).map_err(|err| DocumentStoreError::serialization(err.to_string()))
}

#[async_trait]
impl<D> DocumentStore<D> for DieselDocumentStore<D>
where
    D: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<D>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let bodies: Vec<serde_json::Value> = documents::table
            .filter(documents::collection.eq(&self.collection))
            .order(documents::seq.asc())
            .select(documents::body)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, ""))?;

        bodies.into_iter().map(decode).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<D, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let body: Option<serde_json::Value> = documents::table
            .filter(documents::collection.eq(&self.collection))
            .filter(documents::id.eq(id))
            .select(documents::body)
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, id))?;

        body.map_or_else(|| Err(DocumentStoreError::not_found(id)), decode)
    }

    async fn create(&self, id: &str, document: &D) -> Result<(), DocumentStoreError> {
        let row = NewDocumentRow {
            collection: &self.collection,
            id,
            body: encode(document)?,
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(documents::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, id))
    }

    async fn update(&self, id: &str, document: &D) -> Result<(), DocumentStoreError> {
        let body = encode(document)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            documents::table
                .filter(documents::collection.eq(&self.collection))
                .filter(documents::id.eq(id)),
        )
        .set((
            documents::body.eq(body),
            documents::updated_at.eq(diesel::dsl::now),
        ))
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, id))?;

        if updated == 0 {
            return Err(DocumentStoreError::not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            documents::table
                .filter(documents::collection.eq(&self.collection))
                .filter(documents::id.eq(id)),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, id))?;

        if deleted == 0 {
            return Err(DocumentStoreError::not_found(id));
        }
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DocumentStoreError> {
        // bb8 closes pooled connections when the last pool handle drops.
        info!(
            collection = %self.collection,
            open_connections = self.pool.open_connections(),
            "releasing document store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let store_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(store_err.is_connection());
        assert!(store_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_keeps_key() {
        let store_err = map_diesel_error(diesel::result::Error::NotFound, "x321ab3");
        assert_eq!(store_err, DocumentStoreError::not_found("x321ab3"));
    }

    #[rstest]
    fn unique_violation_maps_to_conflict() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_string()),
        );
        let store_err = map_diesel_error(diesel_err, "x321ab3");

        assert!(
            store_err.is_conflict(),
            "expected Conflict error, got {store_err:?}"
        );
    }

    #[rstest]
    fn malformed_body_is_serialization_error() {
        let result: Result<Vec<u32>, _> = decode(serde_json::json!({ "not": "a list" }));
        assert!(result.expect_err("decode fails").is_serialization());
    }
}
