//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: document stores, in memory or PostgreSQL-backed
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod persistence;
