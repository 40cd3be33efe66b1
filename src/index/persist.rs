use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::RecordStore;
use crate::state::{Column, RawDocument};
use crate::util::text_of;

/// Failure to obtain a document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read data file '{path}': {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid document.
    #[error("failed to parse data file '{path}': {source}")]
    Json {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// What: Read and deserialize the institution document at `path`.
///
/// Inputs:
/// - `path`: JSON file with `institutions_data` and `cluster_descriptions`.
///
/// Output:
/// - The raw document, or a [`LoadError`] describing what went wrong.
///
/// # Errors
/// - [`LoadError::Io`] when the file cannot be read.
/// - [`LoadError::Json`] when the content is not a valid document.
pub fn load_document(path: &Path) -> Result<RawDocument, LoadError> {
    let s = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: RawDocument = serde_json::from_str(&s).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        institutions = doc.institutions_data.len(),
        clusters = doc.cluster_descriptions.len(),
        "data file parsed"
    );
    Ok(doc)
}

/// What: Load a document and build the record store from it.
///
/// Inputs:
/// - `path`: JSON data file.
/// - `dedupe`: Run [`dedupe_repositories`] before flattening.
/// - `top_n`: Size of the language ranking.
///
/// Output:
/// - The built store.
///
/// # Errors
/// - Propagates [`load_document`] failures.
pub fn load_store(path: &Path, dedupe: bool, top_n: usize) -> Result<RecordStore, LoadError> {
    let mut doc = load_document(path)?;
    if dedupe {
        let removed = dedupe_repositories(&mut doc);
        tracing::info!(removed, "duplicate repositories removed");
    }
    Ok(RecordStore::build_with_top(doc, top_n))
}

/// What: Drop repeated repositories within each institution.
///
/// Inputs:
/// - `doc`: Document to clean in place.
///
/// Output:
/// - Number of repository entries removed.
///
/// Details:
/// - A repository is identified by its `(name, link)` pair; the first occurrence wins.
/// - Each institution is checked on its own, so a repository listed under two
///   institutions keeps both entries. Institutions are never removed.
pub fn dedupe_repositories(doc: &mut RawDocument) -> usize {
    let mut removed = 0usize;
    for inst in &mut doc.institutions_data {
        let mut seen: HashSet<(Option<String>, Option<String>)> = HashSet::new();
        let before = inst.repositories.len();
        inst.repositories.retain(|repo| {
            let key = (
                text_of(repo, Column::Name.key()),
                text_of(repo, Column::Link.key()),
            );
            seen.insert(key)
        });
        removed += before - inst.repositories.len();
    }
    removed
}
