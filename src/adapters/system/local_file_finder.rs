//! Local File Finder - recursive name search under a few home folders.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::ports::{FileFinder, FileMatch, FileSearchError};

/// Searches a fixed list of root folders.
#[derive(Debug, Clone)]
pub struct LocalFileFinder {
    roots: Vec<PathBuf>,
}

impl LocalFileFinder {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// `~/Documents`, `~/Downloads` and `~/Desktop`.
    pub fn default_roots() -> Vec<PathBuf> {
        dirs::home_dir()
            .map(|home| {
                ["Documents", "Downloads", "Desktop"]
                    .iter()
                    .map(|name| home.join(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

/// Roots themselves are never treated as hidden.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Depth-first walk in name order; unreadable entries are skipped.
fn walk(root: &Path, fragment: &str, found: &mut Vec<FileMatch>) {
    let entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(Result::ok);

    for entry in entries {
        let name = entry.file_name().to_string_lossy();
        if !name.contains(fragment) {
            continue;
        }
        if let Some(directory) = entry.path().parent() {
            found.push(FileMatch {
                name: name.into_owned(),
                directory: directory.to_path_buf(),
            });
        }
    }
}

#[async_trait]
impl FileFinder for LocalFileFinder {
    async fn find(&self, fragment: &str) -> Result<Vec<FileMatch>, FileSearchError> {
        let roots = self.roots.clone();
        let fragment = fragment.to_string();

        tokio::task::spawn_blocking(move || {
            let mut found = Vec::new();
            for root in roots.iter().filter(|r| r.is_dir()) {
                walk(root, &fragment, &mut found);
            }
            found
        })
        .await
        .map_err(|e| FileSearchError::Task(e.to_string()))
    }
}
