//! Static stopword membership.
//!
//! The set is built once at startup and only ever queried. Entries are
//! stored lowercase and queries are lowercased before the test, so
//! membership is case-insensitive.

use fxhash::FxHashSet;

/// Basic English stopwords. Single letters are included because a lone
/// letter almost never carries meaning in a query.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "an", "of", "in", "and", "to", "was", "is", "for", "on", "as", "a", "b", "c", "d", "e",
    "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x",
    "y", "z",
];

/// Immutable, case-insensitive stopword set.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Entries are lowercased on insert.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The default English set ([`ENGLISH_STOPWORDS`]).
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS.iter().copied())
    }

    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if `token`, lowercased, is in the set.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
