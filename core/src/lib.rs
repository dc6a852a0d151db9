pub mod document;
pub mod engine;
pub mod index;
pub mod normalize;
pub mod query;
pub mod source;

pub use document::{index_document, DocumentKeywordMap};
pub use engine::SearchEngine;
pub use index::{GlobalIndex, Occurrence};
pub use normalize::{normalize, NoiseWords};
pub use query::{search, MAX_RESULTS};
pub use source::SourceError;

/// Identifies a document; for file-backed sources this is the path as listed.
pub type DocumentId = String;
