//! Word list operations.
//!
//! Each operation reads the whole list from the repository, changes it in
//! memory and writes the whole list back. Records are addressed by their
//! position, so removing one shifts every later index down by one.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::storage::{parse_document, JsonFileStore, StoreStats, WordRepository};
use crate::word::WordRecord;

/// Stateless facade over a [`WordRepository`].
///
/// Cloning is cheap and every clone talks to the same store. Nothing is
/// cached, so concurrent callers never see stale data, but concurrent
/// mutations are not isolated from each other either.
#[derive(Debug, Clone)]
pub struct WordService {
    repo: Arc<dyn WordRepository>,
}

impl WordService {
    /// Create a service over the given repository.
    pub fn new(repo: impl WordRepository + 'static) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Open (and initialize if absent) the JSON file store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(JsonFileStore::open(path)?))
    }

    /// The full list in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable or corrupt.
    pub async fn list(&self) -> Result<Vec<WordRecord>> {
        self.repo.load().await
    }

    /// Append `record` at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable, corrupt or unwritable.
    pub async fn append(&self, record: WordRecord) -> Result<()> {
        let mut words = self.repo.load().await?;
        words.push(record);
        self.repo.save(&words).await?;
        info!("Added word at index {}", words.len() - 1);
        Ok(())
    }

    /// Remove the record at `index`.
    ///
    /// Returns `false` without writing anything if `index` is out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable, corrupt or unwritable.
    pub async fn remove_at(&self, index: usize) -> Result<bool> {
        let mut words = self.repo.load().await?;
        if index >= words.len() {
            debug!("Remove rejected: index {} of {}", index, words.len());
            return Ok(false);
        }
        words.remove(index);
        self.repo.save(&words).await?;
        info!("Removed word at index {}", index);
        Ok(true)
    }

    /// Replace the record at `index` with `record`.
    ///
    /// Returns `false` without writing anything if `index` is out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable, corrupt or unwritable.
    pub async fn replace_at(&self, index: usize, record: WordRecord) -> Result<bool> {
        let mut words = self.repo.load().await?;
        let Some(slot) = words.get_mut(index) else {
            debug!("Replace rejected: index {} of {}", index, words.len());
            return Ok(false);
        };
        *slot = record;
        self.repo.save(&words).await?;
        info!("Replaced word at index {}", index);
        Ok(true)
    }

    /// The stored document, byte for byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn export_raw(&self) -> Result<Vec<u8>> {
        self.repo.read_raw().await
    }

    /// Records whose word or sentence contains `term`, with their indices.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable or corrupt.
    pub async fn search(&self, term: &str) -> Result<Vec<(usize, WordRecord)>> {
        let words = self.repo.load().await?;
        Ok(words
            .into_iter()
            .enumerate()
            .filter(|(_, record)| record.matches(term))
            .collect())
    }

    /// Overwrite the store with an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn reset(&self) -> Result<()> {
        self.repo.reset().await?;
        info!("Word store reset to an empty list");
        Ok(())
    }

    /// Count records and measure the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable or corrupt.
    pub async fn stats(&self) -> Result<StoreStats> {
        let raw = self.repo.read_raw().await?;
        let words = parse_document(Path::new("store"), &raw)?.len();
        Ok(StoreStats {
            words,
            size_bytes: raw.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn service_with(words: &[WordRecord]) -> WordService {
        let doc = serde_json::to_vec(words).unwrap();
        WordService::new(MemoryStore::with_document(doc))
    }

    fn sample() -> Vec<WordRecord> {
        vec![
            WordRecord::new("cat", "A cat sat."),
            WordRecord::new("dog", "The dog barked."),
            WordRecord::new("owl", "An owl hooted."),
        ]
    }

    #[tokio::test]
    async fn test_append_to_empty_store() {
        let service = WordService::new(MemoryStore::new());
        service
            .append(WordRecord::from(json!({"word": "cat", "sentence": "A cat sat."})))
            .await
            .unwrap();

        let words = service.list().await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(
            words[0].as_value(),
            &json!({"word": "cat", "sentence": "A cat sat."})
        );
    }

    #[tokio::test]
    async fn test_append_goes_last() {
        let service = service_with(&sample());
        let extra = WordRecord::new("fox", "The fox ran.");

        service.append(extra.clone()).await.unwrap();

        let mut expected = sample();
        expected.push(extra);
        assert_eq!(service.list().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_remove_first_shifts_rest() {
        let service = service_with(&sample()[..2]);

        assert!(service.remove_at(0).await.unwrap());

        let words = service.list().await.unwrap();
        assert_eq!(words, vec![sample()[1].clone()]);
    }

    #[tokio::test]
    async fn test_remove_each_valid_index() {
        for index in 0..sample().len() {
            let service = service_with(&sample());
            assert!(service.remove_at(index).await.unwrap());

            let mut expected = sample();
            expected.remove(index);
            assert_eq!(service.list().await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_remove_out_of_range_leaves_store_untouched() {
        let service = service_with(&sample()[..1]);
        let before = service.export_raw().await.unwrap();

        assert!(!service.remove_at(5).await.unwrap());
        assert!(!service.remove_at(1).await.unwrap());

        assert_eq!(service.export_raw().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_replace_each_valid_index() {
        for index in 0..sample().len() {
            let service = service_with(&sample());
            let replacement = WordRecord::from(json!({"word": "new", "n": index}));

            assert!(service.replace_at(index, replacement.clone()).await.unwrap());

            let mut expected = sample();
            expected[index] = replacement;
            assert_eq!(service.list().await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_replace_out_of_range() {
        let service = service_with(&sample());
        let before = service.list().await.unwrap();

        assert!(!service
            .replace_at(3, WordRecord::new("x", "y"))
            .await
            .unwrap());
        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_export_matches_persisted_document() {
        let service = service_with(&sample());
        service.remove_at(1).await.unwrap();

        let raw = service.export_raw().await.unwrap();
        let expected = serde_json::to_vec(&service.list().await.unwrap()).unwrap();
        assert_eq!(raw, expected);
    }

    #[tokio::test]
    async fn test_corrupt_store_fails_every_operation() {
        let service = WordService::new(MemoryStore::with_document(r#"{"word":"cat"}"#));

        assert!(service.list().await.unwrap_err().is_storage_corrupt());
        assert!(service
            .append(WordRecord::new("a", "b"))
            .await
            .unwrap_err()
            .is_storage_corrupt());
        assert!(service.remove_at(0).await.unwrap_err().is_storage_corrupt());
        assert!(service
            .replace_at(0, WordRecord::new("a", "b"))
            .await
            .unwrap_err()
            .is_storage_corrupt());

        // Export still hands back whatever is on disk
        assert_eq!(service.export_raw().await.unwrap(), br#"{"word":"cat"}"#);
    }

    #[tokio::test]
    async fn test_search_returns_stored_indices() {
        let service = service_with(&sample());

        let hits = service.search("OWL").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 2);
        assert_eq!(hits[0].1.word(), Some("owl"));

        let hits = service.search("the").await.unwrap();
        let indices: Vec<_> = hits.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1]);
    }

    #[tokio::test]
    async fn test_reset_and_stats() {
        let service = service_with(&sample());
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.words, 3);
        assert!(stats.size_bytes > 2);

        service.reset().await.unwrap();
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.words, 0);
        assert_eq!(stats.size_bytes, 2);
    }

    #[tokio::test]
    async fn test_open_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let service = WordService::open(dir.path().join("words.json")).unwrap();

        service.append(WordRecord::new("cat", "A cat sat.")).await.unwrap();
        let reopened = WordService::open(dir.path().join("words.json")).unwrap();
        assert_eq!(reopened.list().await.unwrap().len(), 1);
    }
}
