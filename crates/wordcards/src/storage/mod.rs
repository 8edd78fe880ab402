//! Storage layer for wordcards.
//!
//! The word list lives in one JSON document holding an array of records.
//! Every read parses the whole document and every write replaces it; nothing
//! is cached between calls.

mod json_file;
mod memory;

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::word::WordRecord;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Contents of a freshly initialized store.
pub const EMPTY_DOCUMENT: &[u8] = b"[]";

/// Whole-document persistence for the word list.
///
/// Implementations hold no list state of their own: `load` always reflects
/// the last successful `save`, whoever made it.
#[async_trait]
pub trait WordRepository: Send + Sync + Debug {
    /// Read and parse the full word list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageCorrupt`] if the document is missing or is not
    /// a JSON array.
    async fn load(&self) -> Result<Vec<WordRecord>>;

    /// Replace the full word list.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    async fn save(&self, words: &[WordRecord]) -> Result<()>;

    /// The stored document, byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageCorrupt`] if the document is missing.
    async fn read_raw(&self) -> Result<Vec<u8>>;

    /// Overwrite the store with an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    async fn reset(&self) -> Result<()> {
        self.save(&[]).await
    }
}

/// Statistics about the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of records in the list.
    pub words: usize,
    /// Size of the stored document in bytes.
    pub size_bytes: u64,
}

/// Parse a stored document into records.
///
/// `path` only labels the error.
///
/// # Errors
///
/// Returns [`Error::StorageCorrupt`] for invalid JSON or for valid JSON that
/// is not an array. The store is rejected rather than reinitialized.
pub fn parse_document(path: &Path, bytes: &[u8]) -> Result<Vec<WordRecord>> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::storage_corrupt(path, format!("not valid JSON: {e}")))?;

    match value {
        Value::Array(items) => Ok(items.into_iter().map(WordRecord::from).collect()),
        other => Err(Error::storage_corrupt(
            path,
            format!("expected a JSON array, found {}", json_kind(&other)),
        )),
    }
}

/// Serialize the word list into the stored document format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_document(words: &[WordRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(words)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
