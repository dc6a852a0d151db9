use crate::document::index_document;
use crate::index::{GlobalIndex, Occurrence};
use crate::normalize::NoiseWords;
use crate::query::{search, search_limited};
use crate::source::{collect_documents, load_document_list, load_noise_words, read_document_tokens, DocumentEntry, SourceError};
use crate::DocumentId;
use anyhow::{Context, Result};
use std::path::Path;

/// One indexing session: fixed noise words plus the index built from them.
///
/// Indexing needs `&mut self`; once it is done the engine can be shared for
/// read-only queries.
#[derive(Debug, Default)]
pub struct SearchEngine {
    noise_words: NoiseWords,
    index: GlobalIndex,
}

impl SearchEngine {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self { noise_words, index: GlobalIndex::new() }
    }

    /// Build from a noise word file (or the built-in list) and either a
    /// document list file or a directory of documents.
    ///
    /// All or nothing: an unavailable document fails the whole build. Callers
    /// that want to keep the documents merged before it use
    /// [`SearchEngine::index_documents`] directly.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(noise_file: Option<P>, documents: Q) -> Result<Self> {
        let noise_words = match noise_file {
            Some(path) => load_noise_words(path.as_ref())
                .with_context(|| format!("loading noise words from {}", path.as_ref().display()))?,
            None => NoiseWords::english(),
        };
        tracing::info!(noise_words = noise_words.len(), "loaded noise words");

        let documents = documents.as_ref();
        let entries = collect_documents(documents)
            .with_context(|| format!("listing documents in {}", documents.display()))?;
        let mut engine = Self::new(noise_words);
        engine
            .index_documents(&entries)
            .with_context(|| format!("indexing documents from {}", documents.display()))?;
        Ok(engine)
    }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise_words }

    pub fn index(&self) -> &GlobalIndex { &self.index }

    /// Index an in-memory document. Returns the number of distinct keywords it had.
    pub fn add_document<I, S>(&mut self, document: &str, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = index_document(document, tokens, &self.noise_words);
        let num_keywords = keywords.len();
        self.index.merge_document(keywords);
        num_keywords
    }

    /// Read and index one document file. The index is untouched on error.
    pub fn index_document_file(&mut self, entry: &DocumentEntry) -> Result<usize, SourceError> {
        let tokens = read_document_tokens(&entry.path)?;
        Ok(self.add_document(&entry.id, tokens))
    }

    /// Index entries in order, stopping at the first unreadable one.
    ///
    /// Documents before the failing entry stay indexed. Returns how many were indexed.
    pub fn index_documents(&mut self, entries: &[DocumentEntry]) -> Result<usize, SourceError> {
        for (done, entry) in entries.iter().enumerate() {
            if let Err(err) = self.index_document_file(entry) {
                tracing::warn!(document = %entry.id, indexed = done, error = %err, "aborting indexing");
                return Err(err);
            }
        }
        tracing::info!(
            num_docs = self.index.document_count(),
            num_keywords = self.index.keyword_count(),
            "indexed documents"
        );
        Ok(entries.len())
    }

    pub fn index_document_list<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, SourceError> {
        let entries = load_document_list(path)?;
        self.index_documents(&entries)
    }

    /// See [`crate::query::search`].
    pub fn search(&self, keyword1: &str, keyword2: &str) -> Vec<DocumentId> {
        search(&self.index, keyword1, keyword2)
    }

    pub fn search_limited(&self, keyword1: &str, keyword2: &str, limit: usize) -> Vec<DocumentId> {
        search_limited(&self.index, keyword1, keyword2, limit)
    }

    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.index.occurrences(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::split_tokens;

    #[test]
    fn in_memory_session() {
        let mut engine = SearchEngine::new(NoiseWords::new(["the", "is"]));
        assert_eq!(engine.add_document("A", split_tokens("The cat sat. The cat ran!")), 3);
        assert_eq!(engine.add_document("B", split_tokens("A cat is fast.")), 3);
        assert_eq!(engine.search("cat", "fast"), vec!["A", "B"]);
        assert_eq!(engine.search_limited("cat", "fast", 1), vec!["A"]);
        assert_eq!(engine.occurrences("fast"), &[Occurrence::new("B", 1)][..]);
        assert_eq!(engine.index().document_count(), 2);
    }

    #[test]
    fn default_engine_has_no_noise_words() {
        let mut engine = SearchEngine::default();
        engine.add_document("A", ["the", "The."]);
        assert_eq!(engine.occurrences("the"), &[Occurrence::new("A", 2)][..]);
    }
}
