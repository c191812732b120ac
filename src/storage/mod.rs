//! Saved board state
//!
//! A single named slot in a local key-value store holds the current board
//! as JSON. Reads validate the shape and treat anything malformed as "no
//! saved board".

mod kv;
mod persistence;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use persistence::{PersistedState, PersistenceStore, STORAGE_KEY};
