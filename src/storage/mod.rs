//! The persistence boundary.
//!
//! Durable state is five string-keyed UTF-8 JSON values behind a small
//! key-value [`StorageBackend`] abstraction. The core stays side-effect-free
//! and persistence-agnostic; the presentation layer calls the
//! [`Repository`]'s explicit `load_*`/`save_*` methods after each confirmed
//! mutation.
//!
//! Loading is tolerant: a missing key, malformed JSON or an unknown schema
//! version falls back to the built-in default for that key alone. Saving can
//! fail (storage full, directory unwritable) and is reported but never
//! retried; in-memory state stays authoritative for the session.

mod backend;
mod repository;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};
pub use repository::{Repository, keys};
