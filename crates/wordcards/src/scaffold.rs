//! Project scaffolding for `wordcards init`.
//!
//! Lays out a self-contained project directory: a config file pointing at a
//! local data directory and an empty word store inside it.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{Config, CONFIG_FILE_NAME, WORDS_FILE_NAME};
use crate::error::{Error, Result};
use crate::storage::EMPTY_DOCUMENT;

/// Name of the data directory created inside the project.
pub const DATA_DIR_NAME: &str = "data";

const GITIGNORE: &str = "data/*.json\n";

/// What `init_project` did to each file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Files written.
    pub created: Vec<PathBuf>,
    /// Files that already existed and were left alone.
    pub kept: Vec<PathBuf>,
}

/// Create the project layout under `root`.
///
/// Existing files are kept unless `force` is set, in which case they are
/// overwritten (including the word store).
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created.
pub fn init_project(root: &Path, force: bool) -> Result<ScaffoldReport> {
    let data_dir = root.join(DATA_DIR_NAME);
    create_dir(&data_dir)?;

    // The config is read from anywhere, so record an absolute data dir
    let data_dir = data_dir.canonicalize()?;

    let mut report = ScaffoldReport::default();
    write_file(
        &root.join(CONFIG_FILE_NAME),
        Config::template(&data_dir).as_bytes(),
        force,
        &mut report,
    )?;
    write_file(
        &data_dir.join(WORDS_FILE_NAME),
        EMPTY_DOCUMENT,
        force,
        &mut report,
    )?;
    write_file(&root.join(".gitignore"), GITIGNORE.as_bytes(), force, &mut report)?;

    info!(
        "Scaffolded {} ({} created, {} kept)",
        root.display(),
        report.created.len(),
        report.kept.len()
    );
    Ok(report)
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &[u8], force: bool, report: &mut ScaffoldReport) -> Result<()> {
    if path.exists() && !force {
        debug!("Keeping existing {}", path.display());
        report.kept.push(path.to_path_buf());
        return Ok(());
    }
    std::fs::write(path, contents)?;
    report.created.push(path.to_path_buf());
    Ok(())
}
