//! JSON file backed word store.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{parse_document, render_document, WordRepository, EMPTY_DOCUMENT};
use crate::error::{Error, Result};
use crate::word::WordRecord;

/// Word store kept in a single JSON file.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the store, so a reader sees either the old or the new document.
/// There is no lock around read-modify-write: two concurrent writers race and
/// the last rename wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, creating it as `[]` if absent.
    ///
    /// Missing parent directories are created. An existing file is left as
    /// is, even if it is corrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the initial file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        if path.exists() {
            debug!("Using word store at {}", path.display());
        } else {
            write_atomic(&path, EMPTY_DOCUMENT)?;
            info!("Created empty word store at {}", path.display());
        }

        Ok(Self { path })
    }

    /// Get the path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_blocking(path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::storage_corrupt(path, "store file is missing")
            } else {
                Error::Io(err)
            }
        })
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(PathBuf) -> Result<T> + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || task(path))
            .await
            .map_err(|e| Error::internal(format!("store task failed: {e}")))?
    }
}

#[async_trait]
impl WordRepository for JsonFileStore {
    async fn load(&self) -> Result<Vec<WordRecord>> {
        self.run_blocking(|path| {
            let bytes = Self::read_blocking(&path)?;
            parse_document(&path, &bytes)
        })
        .await
    }

    async fn save(&self, words: &[WordRecord]) -> Result<()> {
        let document = render_document(words)?;
        let count = words.len();
        self.run_blocking(move |path| {
            write_atomic(&path, &document)?;
            debug!("Wrote {} words to {}", count, path.display());
            Ok(())
        })
        .await
    }

    async fn read_raw(&self) -> Result<Vec<u8>> {
        self.run_blocking(|path| Self::read_blocking(&path)).await
    }
}

/// Replace `path` with `contents` through a temporary sibling file.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let to_write_error = |source: std::io::Error| Error::StorageWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(to_write_error)?;
    temp.write_all(contents).map_err(to_write_error)?;
    temp.as_file().sync_all().map_err(to_write_error)?;
    temp.persist(path).map_err(|e| to_write_error(e.error))?;
    Ok(())
}
