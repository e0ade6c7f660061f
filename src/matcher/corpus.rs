use crate::core::{CoverageError, Result};
use crate::io::walker::CorpusWalker;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    pub path: PathBuf,
    pub text: String,
}

/// Full text of every file under a source root, held for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCorpus {
    files: Vec<CorpusFile>,
}

impl SourceCorpus {
    /// Read every corpus file under `root`.
    ///
    /// Content is decoded lossily so binary fixtures still take part in the
    /// search; any I/O failure aborts the load.
    pub fn load(root: &Path) -> Result<Self> {
        let paths = CorpusWalker::new(root.to_path_buf()).walk()?;
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = std::fs::read(&path).map_err(|source| CoverageError::CorpusReadError {
                path: path.clone(),
                source,
            })?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            files.push(CorpusFile { path, text });
        }

        let corpus = Self { files };
        debug!(
            files = corpus.len(),
            bytes = corpus.total_bytes(),
            "Loaded source corpus"
        );
        Ok(corpus)
    }

    /// Build a corpus from in-memory text, mostly for tests.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| CorpusFile {
                path: PathBuf::from(format!("<memory-{i}>")),
                text: text.into(),
            })
            .collect();
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.text.len()).sum()
    }

    /// Whether `needle` occurs verbatim in any file
    pub fn contains(&self, needle: &str) -> bool {
        self.files.iter().any(|f| f.text.contains(needle))
    }
}
