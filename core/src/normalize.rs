use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref DEFAULT_NOISE_WORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","will","with","would",
            "you","your","yours","yourself","yourselves",
        ];
        words.iter().copied().collect()
    };
}

const TRAILING_PUNCTUATION: [char; 6] = ['.', '!', '?', ',', ';', ':'];

/// Words excluded from indexing. Stored lower-cased; fixed once built.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().map(|w| w.as_ref().to_ascii_lowercase()).collect();
        Self { words }
    }

    /// Built-in English stop list, used when no noise word file is supplied.
    pub fn english() -> Self {
        Self::new(DEFAULT_NOISE_WORDS.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

/// Map a raw token to its keyword, or `None` when it is not one.
///
/// Trailing `.!?,;:` are stripped; anything else that is not an ASCII letter
/// rejects the token. The result is lower-cased and checked against the noise words.
pub fn normalize(token: &str, noise_words: &NoiseWords) -> Option<String> {
    let stripped = token.trim_end_matches(TRAILING_PUNCTUATION);
    if stripped.is_empty() {
        return None;
    }
    if !stripped.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let keyword = stripped.to_ascii_lowercase();
    if noise_words.contains(&keyword) {
        return None;
    }
    Some(keyword)
}

/// Split text into raw whitespace-delimited tokens.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
}
