use crate::document::DocumentKeywordMap;
use crate::DocumentId;
use serde::Serialize;
use std::collections::HashMap;

/// `document` contains a keyword `frequency` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub document: DocumentId,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<DocumentId>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Keyword -> occurrences, each list ordered by descending frequency.
#[derive(Debug, Default)]
pub struct GlobalIndex {
    keywords: HashMap<String, Vec<Occurrence>>, // sorted by frequency, highest first
    num_docs: usize,
}

impl GlobalIndex {
    pub fn new() -> Self { Self::default() }

    /// Merge one document's keyword counts, keeping every list sorted.
    pub fn merge_document(&mut self, document: DocumentKeywordMap) {
        let mut relocated = 0usize;
        let num_keywords = document.len();
        for (keyword, occurrence) in document {
            let occurrences = self.keywords.entry(keyword).or_default();
            occurrences.push(occurrence);
            if insert_last_occurrence(occurrences).is_some() {
                relocated += 1;
            }
        }
        self.num_docs += 1;
        tracing::debug!(num_keywords, relocated, num_docs = self.num_docs, "merged document");
    }

    /// Occurrences of `keyword`, empty when it was never indexed.
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    pub fn keyword_count(&self) -> usize { self.keywords.len() }

    /// Documents merged so far, including ones that produced no keywords.
    pub fn document_count(&self) -> usize { self.num_docs }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> + '_ {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Move the last element of a descending-frequency list into place.
///
/// The search runs over every element but the last. A probe with an equal
/// frequency ends the search at the probe, so among ties the new occurrence
/// lands wherever the probe sequence first hits the run. Returns the new
/// position when the element moved.
pub fn insert_last_occurrence(occurrences: &mut Vec<Occurrence>) -> Option<usize> {
    let last = occurrences.len().checked_sub(1)?;
    if last == 0 {
        return None;
    }
    let frequency = occurrences[last].frequency;

    // Half-open [lo, hi); midpoint matches the inclusive (lo + (hi - 1)) / 2.
    let mut lo = 0usize;
    let mut hi = last;
    let mut index = last;
    while lo < hi {
        let middle = (lo + hi - 1) / 2;
        let probe = occurrences[middle].frequency;
        if probe == frequency {
            index = middle;
            break;
        }
        if probe < frequency {
            hi = middle;
            if lo >= hi {
                index = middle;
            }
        } else {
            lo = middle + 1;
            if lo >= hi {
                index = middle + 1;
            }
        }
    }

    if index == last {
        return None;
    }
    let occurrence = occurrences.remove(last);
    occurrences.insert(index, occurrence);
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::index_document;
    use crate::normalize::{split_tokens, NoiseWords};

    fn list(freqs: &[(&str, u32)]) -> Vec<Occurrence> {
        freqs.iter().map(|(d, f)| Occurrence::new(*d, *f)).collect()
    }

    fn docs(occs: &[Occurrence]) -> Vec<&str> {
        occs.iter().map(|o| o.document.as_str()).collect()
    }

    fn assert_sorted(occs: &[Occurrence]) {
        assert!(occs.windows(2).all(|w| w[0].frequency >= w[1].frequency), "{occs:?}");
    }

    #[test]
    fn single_element_stays_put() {
        let mut occs = list(&[("a", 3)]);
        assert_eq!(insert_last_occurrence(&mut occs), None);
        assert_eq!(docs(&occs), vec!["a"]);
        let mut empty: Vec<Occurrence> = Vec::new();
        assert_eq!(insert_last_occurrence(&mut empty), None);
    }

    #[test]
    fn smallest_stays_at_end() {
        let mut occs = list(&[("a", 5), ("b", 3), ("c", 1)]);
        assert_eq!(insert_last_occurrence(&mut occs), None);
        assert_eq!(docs(&occs), vec!["a", "b", "c"]);
    }

    #[test]
    fn largest_moves_to_front() {
        let mut occs = list(&[("a", 5), ("b", 3), ("c", 9)]);
        assert_eq!(insert_last_occurrence(&mut occs), Some(0));
        assert_eq!(docs(&occs), vec!["c", "a", "b"]);
    }

    #[test]
    fn lands_between() {
        let mut occs = list(&[("a", 9), ("b", 7), ("c", 4), ("d", 2), ("e", 5)]);
        assert_eq!(insert_last_occurrence(&mut occs), Some(2));
        assert_eq!(docs(&occs), vec!["a", "b", "e", "c", "d"]);
    }

    #[test]
    fn tie_lands_at_first_probe_hit() {
        // first probe is index 1, already equal
        let mut occs = list(&[("a", 3), ("b", 2), ("c", 2), ("d", 2)]);
        assert_eq!(insert_last_occurrence(&mut occs), Some(1));
        assert_eq!(docs(&occs), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn tie_can_land_inside_a_run() {
        let mut occs = list(&[("a", 2), ("b", 2), ("c", 2), ("d", 1), ("e", 1), ("f", 2)]);
        assert_eq!(insert_last_occurrence(&mut occs), Some(2));
        assert_eq!(docs(&occs), vec!["a", "b", "f", "c", "d", "e"]);
    }

    #[test]
    fn tie_can_land_ahead_of_earlier_documents() {
        let mut occs = list(&[("a", 2), ("b", 2)]);
        assert_eq!(insert_last_occurrence(&mut occs), Some(0));
        assert_eq!(docs(&occs), vec!["b", "a"]);
    }

    #[test]
    fn merge_keeps_lists_sorted_and_complete() {
        let noise = NoiseWords::new(["the", "is"]);
        let texts = [
            ("d1", "cat cat dog"),
            ("d2", "cat dog dog dog"),
            ("d3", "cat cat cat cat bird"),
            ("d4", "dog cat"),
            ("d5", "bird bird cat cat cat"),
            ("d6", "the is"),
        ];
        let mut index = GlobalIndex::new();
        for (id, text) in texts {
            index.merge_document(index_document(id, split_tokens(text), &noise));
        }

        assert_eq!(index.document_count(), 6);
        assert_eq!(index.keyword_count(), 3);
        for (_, occs) in index.iter() {
            assert_sorted(occs);
        }
        assert_eq!(index.occurrences("cat").len(), 5);
        assert_eq!(index.occurrences("dog").len(), 3);
        assert_eq!(index.occurrences("bird").len(), 2);
        assert_eq!(index.occurrences("cat")[0], Occurrence::new("d3", 4));
        assert_eq!(index.occurrences("dog")[0], Occurrence::new("d2", 3));
        assert_eq!(docs(index.occurrences("bird")), vec!["d5", "d3"]);
    }

    #[test]
    fn unknown_keyword_is_empty() {
        let index = GlobalIndex::new();
        assert!(index.occurrences("cat").is_empty());
        assert!(!index.contains("cat"));
    }

    #[test]
    fn sorted_under_many_merges() {
        let mut index = GlobalIndex::new();
        // deterministic pseudo-random frequencies
        let mut seed = 7u32;
        for d in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let freq = (seed >> 16) % 11 + 1;
            let mut map = DocumentKeywordMap::new();
            map.insert("word".to_string(), Occurrence::new(format!("doc{d}"), freq));
            index.merge_document(map);
        }
        let occs = index.occurrences("word");
        assert_eq!(occs.len(), 200);
        assert_sorted(occs);
    }
}
