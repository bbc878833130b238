//! Persistent cart snapshot storage.
//!
//! A snapshot store holds the serialized cart under a fixed slot key so
//! cart state survives process restarts. Every save overwrites the slot
//! wholesale; the last writer wins. Two backends are provided: an
//! in-memory store for tests and a PostgreSQL store for durable storage.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod snapshot;
pub mod store;

pub use error::{Result, SnapshotStoreError};
pub use memory::InMemorySnapshotStore;
pub use postgres::PostgresSnapshotStore;
pub use snapshot::{CartSnapshot, SlotKey};
pub use store::SnapshotStore;
