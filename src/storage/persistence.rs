//! Board persistence in the `bingo_state_v1` slot

use super::kv::{KeyValueStore, StoreError};
use crate::core::{Board, CELL_COUNT};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Key of the single saved-state slot
pub const STORAGE_KEY: &str = "bingo_state_v1";

/// On-store shape of a saved board
///
/// `createdAt` is informational (milliseconds since the Unix epoch): it may
/// be missing, and any value that is not an unsigned integer reads as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub contents: Vec<String>,
    pub marks: Vec<bool>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<u64>,
}

/// Accept any JSON value for `createdAt`, keeping it only if it is a `u64`
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_u64))
}

impl PersistedState {
    /// Snapshot `board`, stamped with `created_at`
    #[must_use]
    pub fn from_board(board: &Board, created_at: u64) -> Self {
        Self {
            contents: board.contents().to_vec(),
            marks: board.marks().to_vec(),
            created_at: Some(created_at),
        }
    }

    /// Convert back into a board if both arrays hold exactly 25 entries
    #[must_use]
    pub fn into_board(self) -> Option<Board> {
        let contents: [String; CELL_COUNT] = self.contents.try_into().ok()?;
        let marks: [bool; CELL_COUNT] = self.marks.try_into().ok()?;
        Some(Board::from_parts(contents, marks))
    }
}

/// Reads and writes the current board through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct PersistenceStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceStore<S> {
    /// Persist into the default [`STORAGE_KEY`] slot of `store`
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store
    pub const fn inner(&self) -> &S {
        &self.store
    }

    /// Restore the saved board
    ///
    /// Returns `None` when nothing is saved or when the saved value is not
    /// JSON, lacks `contents`/`marks`, or has arrays of the wrong length.
    /// Never fails.
    pub fn load(&self) -> Option<Board> {
        let raw = self.store.get(&self.key)?;

        let state: PersistedState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to parse saved bingo state");
                return None;
            }
        };

        let (contents, marks) = (state.contents.len(), state.marks.len());
        let board = state.into_board();
        if board.is_none() {
            warn!(
                key = %self.key,
                contents,
                marks,
                "saved bingo state has the wrong shape, discarding"
            );
        } else {
            debug!(key = %self.key, "restored saved board");
        }
        board
    }

    /// Save `board`, overwriting any previous value
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if encoding or writing fails. The caller
    /// decides whether that matters; the controller logs and ignores it.
    pub fn save(&mut self, board: &Board) -> Result<(), StoreError> {
        let state = PersistedState::from_board(board, now_millis());
        let json = serde_json::to_string(&state)?;
        self.store.set(&self.key, &json)
    }

    /// Remove the saved board; `load` returns `None` until the next save
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the slot exists but cannot be removed.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}
