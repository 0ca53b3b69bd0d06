//! Persistence of the most recent fortune result.
//!
//! A [`StoredRecord`] wraps a chart profile, user context and report with
//! a UUID token, a SHA-256 integrity hash over the snapshot, a UTC
//! timestamp and the format version. [`ResultRepository`] implementations
//! keep exactly one record and refuse to return one whose hash no longer
//! matches.

pub mod error;
pub mod record;
pub mod repository;

pub use error::StoreError;
pub use record::{RECORD_VERSION, Snapshot, StoredRecord, snapshot_hash};
pub use repository::{JsonFileRepository, MemoryRepository, ResultRepository};
