//! Vectorizer text layer.
//!
//! Turns raw query text into the tokens the lookup stage understands and
//! decides which of them are worth a lookup at all.
//!
//! ## What we do
//!
//! - Tokenization on Unicode letter/digit boundaries, with byte offsets
//! - Case-insensitive stopword filtering against a fixed set
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Tokens keep the original
//! casing of the input; lowercasing is left to the stages that need it
//! (stopword test, store fallback lookup).

mod stopwords;
mod token;

pub use crate::stopwords::{StopwordSet, ENGLISH_STOPWORDS};
pub use crate::token::{tokenize, tokenize_words, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_survive_stopword_filtering_in_order() {
        let stopwords = StopwordSet::english();
        let kept: Vec<&str> = tokenize_words("The cat and the Dog")
            .into_iter()
            .filter(|word| !stopwords.is_stopword(word))
            .collect();
        assert_eq!(kept, vec!["cat", "Dog"]);
    }

    #[test]
    fn single_letters_are_dropped() {
        let stopwords = StopwordSet::english();
        let kept: Vec<&str> = tokenize_words("x marks a spot")
            .into_iter()
            .filter(|word| !stopwords.is_stopword(word))
            .collect();
        assert_eq!(kept, vec!["marks", "spot"]);
    }
}
