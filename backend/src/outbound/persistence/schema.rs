//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Whole JSON documents grouped by collection.
    ///
    /// `(collection, id)` is the primary key. `seq` records insertion order
    /// and is never rewritten by updates.
    documents (collection, id) {
        /// Monotonic insertion sequence.
        seq -> Int8,
        /// Logical collection the document belongs to.
        collection -> Text,
        /// Document key, unique within the collection.
        id -> Text,
        /// Serialised document.
        body -> Jsonb,
        /// Insertion timestamp.
        created_at -> Timestamptz,
        /// Last write timestamp.
        updated_at -> Timestamptz,
    }
}
