//! Record store interface and backends for the veneer desk plugin.
//!
//! The host framework owns the real record store; this crate models the
//! slice of it the plugin needs as a trait, with a filesystem backend for
//! standalone use and an in-memory backend for tests. Existence is always a
//! query returning a boolean, never a caught "not found" error.

pub mod backends;
pub mod error;
pub mod traits;
pub mod types;

pub use backends::{FilesystemStore, MemoryStore};
pub use error::{Result, StoreError};
pub use traits::RecordStore;
pub use types::RecordId;
