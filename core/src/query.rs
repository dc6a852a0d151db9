use crate::index::{GlobalIndex, Occurrence};
use crate::DocumentId;
use std::collections::HashSet;

/// Upper bound on the documents a query returns.
pub const MAX_RESULTS: usize = 5;

/// Documents containing `keyword1` or `keyword2`, highest frequency first, at most [`MAX_RESULTS`].
///
/// Keywords are looked up as given; the index holds lower-cased keywords only.
pub fn search(index: &GlobalIndex, keyword1: &str, keyword2: &str) -> Vec<DocumentId> {
    search_limited(index, keyword1, keyword2, MAX_RESULTS)
}

pub fn search_limited(index: &GlobalIndex, keyword1: &str, keyword2: &str, limit: usize) -> Vec<DocumentId> {
    merge_ranked(index.occurrences(keyword1), index.occurrences(keyword2), limit)
}

/// Merge two descending-frequency lists into one ranking without repeats.
///
/// On equal frequencies `first` wins. A document emitted from one list is
/// skipped when it later reaches the front of the other.
pub fn merge_ranked(first: &[Occurrence], second: &[Occurrence], limit: usize) -> Vec<DocumentId> {
    let mut results: Vec<DocumentId> = Vec::with_capacity(limit.min(first.len() + second.len()));
    let mut emitted: HashSet<&str> = HashSet::new();
    let (mut i, mut j) = (0usize, 0usize);

    while results.len() < limit {
        while i < first.len() && emitted.contains(first[i].document.as_str()) { i += 1; }
        while j < second.len() && emitted.contains(second[j].document.as_str()) { j += 1; }

        let next = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) if a.frequency >= b.frequency => { i += 1; a }
            (Some(_), Some(b)) => { j += 1; b }
            (Some(a), None) => { i += 1; a }
            (None, Some(b)) => { j += 1; b }
            (None, None) => break,
        };
        emitted.insert(next.document.as_str());
        results.push(next.document.clone());
    }
    results
}
