//! Reading noise words, document lists and documents from disk.
//!
//! Files are read whole and closed before anything is handed to the index, so
//! a failing read never leaves a document half-merged.

use crate::normalize::{split_tokens, NoiseWords};
use crate::DocumentId;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The file is missing or could not be read.
    #[error("source unavailable: {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Unavailable { path, .. } => path,
        }
    }
}

fn read(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Unavailable { path: path.to_path_buf(), source })
}

/// Whitespace-separated noise words.
pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords, SourceError> {
    let text = read(path.as_ref())?;
    Ok(NoiseWords::new(split_tokens(&text)))
}

/// A listed document: the id is the entry as written in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub id: DocumentId,
    pub path: PathBuf,
}

/// Whitespace-separated document entries, in listing order.
///
/// Relative entries are resolved against the list file's directory.
pub fn load_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentEntry>, SourceError> {
    let path = path.as_ref();
    let text = read(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(split_tokens(&text)
        .map(|entry| DocumentEntry { id: entry.to_string(), path: base.join(entry) })
        .collect())
}

/// Documents under `root`: every `*.txt` file of a directory, sorted by path,
/// or the entries of a document list file.
pub fn collect_documents<P: AsRef<Path>>(root: P) -> Result<Vec<DocumentEntry>, SourceError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return load_document_list(root);
    }
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| SourceError::Unavailable {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let id = path.strip_prefix(root).unwrap_or(path).to_string_lossy().into_owned();
        entries.push(DocumentEntry { id, path: path.to_path_buf() });
    }
    Ok(entries)
}

/// Raw tokens of one document.
///
/// Invalid UTF-8 is replaced rather than rejected; the tokens it lands in are
/// dropped later by keyword normalization.
pub fn read_document_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SourceError::Unavailable { path: path.to_path_buf(), source })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(split_tokens(&text).map(str::to_owned).collect())
}
