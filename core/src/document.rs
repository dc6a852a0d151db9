use crate::index::Occurrence;
use crate::normalize::{normalize, NoiseWords};
use std::collections::HashMap;

/// Keyword -> occurrence for a single document, before it is merged.
pub type DocumentKeywordMap = HashMap<String, Occurrence>;

/// Count keyword occurrences in one document's token stream.
pub fn index_document<I, S>(document: &str, tokens: I, noise_words: &NoiseWords) -> DocumentKeywordMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords = DocumentKeywordMap::new();
    for token in tokens {
        let Some(keyword) = normalize(token.as_ref(), noise_words) else { continue };
        keywords
            .entry(keyword)
            .or_insert_with(|| Occurrence::new(document, 0))
            .frequency += 1;
    }
    keywords
}
