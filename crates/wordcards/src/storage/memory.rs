//! In-memory word store for tests and throwaway sessions.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{parse_document, render_document, WordRepository, EMPTY_DOCUMENT};
use crate::error::{Error, Result};
use crate::word::WordRecord;

/// Label used in errors raised by the in-memory store.
const MEMORY_PATH: &str = ":memory:";

/// Word store holding the serialized document in memory.
///
/// Keeps the document as bytes rather than records so loads go through the
/// same parsing (and the same corruption errors) as the file store.
#[derive(Debug)]
pub struct MemoryStore {
    document: Mutex<Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_document(EMPTY_DOCUMENT.to_vec())
    }

    /// Create a store holding an arbitrary document, valid or not.
    #[must_use]
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Mutex::new(document.into()),
        }
    }

    fn snapshot(&self) -> Result<Vec<u8>> {
        self.document
            .lock()
            .map(|doc| doc.clone())
            .map_err(|_| Error::internal("memory store lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordRepository for MemoryStore {
    async fn load(&self) -> Result<Vec<WordRecord>> {
        let bytes = self.snapshot()?;
        parse_document(Path::new(MEMORY_PATH), &bytes)
    }

    async fn save(&self, words: &[WordRecord]) -> Result<()> {
        let rendered = render_document(words)?;
        let mut doc = self
            .document
            .lock()
            .map_err(|_| Error::internal("memory store lock poisoned"))?;
        *doc = rendered;
        Ok(())
    }

    async fn read_raw(&self) -> Result<Vec<u8>> {
        self.snapshot()
    }
}
