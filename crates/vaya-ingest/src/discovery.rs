//! Catalog file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::format::CatalogFormat;

/// Prefix of office lock files left next to open workbooks.
const LOCK_FILE_PREFIX: &str = "~$";

/// A supported catalog file found in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub format: CatalogFormat,
}

impl DiscoveredFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// True for office lock files such as `~$rates.xlsx`.
pub fn is_lock_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOCK_FILE_PREFIX))
}

/// Lists supported catalog files in a directory.
///
/// Returns files sorted by filename. Subdirectories, lock files and
/// unsupported extensions are skipped.
pub fn discover_catalog_files(dir: &Path) -> Result<Vec<DiscoveredFile>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }
        if is_lock_file(&path) {
            debug!(path = %path.display(), "skipping lock file");
            continue;
        }
        if let Some(format) = CatalogFormat::from_path(&path) {
            files.push(DiscoveredFile { path, format });
        }
    }

    // Sort by filename
    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    Ok(files)
}
