//! Internal Diesel row structs for the documents table.
//!
//! These types never leave the persistence layer; adapters convert bodies to
//! domain documents with `serde_json`.

use diesel::prelude::*;

use super::schema::documents;

/// Insertable struct for creating a document row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = documents)]
pub(crate) struct NewDocumentRow<'a> {
    pub collection: &'a str,
    pub id: &'a str,
    pub body: serde_json::Value,
}
