use crate::core::{CoverageError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Collects the files under a source root that make up the search corpus.
///
/// Every regular file is included unless its own name starts with `.`;
/// directories are descended into whatever their name. Symbolic links are
/// resolved, so a dangling link or a link cycle fails the walk.
pub struct CorpusWalker {
    root: PathBuf,
}

impl CorpusWalker {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            warn!(
                root = %self.root.display(),
                "Source root does not exist; scanning an empty corpus"
            );
            return Ok(Vec::new());
        }
        if !self.root.is_dir() {
            return Err(CoverageError::SourceRoot {
                path: self.root.clone(),
                message: "not a directory".to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                CoverageError::CorpusReadError {
                    path,
                    source: e.into(),
                }
            })?;

            if entry.file_type().is_file() && should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }

        debug!(root = %self.root.display(), files = files.len(), "Collected corpus files");
        Ok(files)
    }
}

fn should_include(path: &Path) -> bool {
    path.file_name()
        .map(|name| !name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
