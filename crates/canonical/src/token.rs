use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// A token with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content, casing preserved.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// General category Letter (L*) or Number (N*). Marks and symbols split.
#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_letter() || ch.is_number()
}

/// Splits text into maximal runs of Unicode letters and digits.
///
/// Every other character (whitespace, punctuation, symbols) is a splitter.
/// Adjacent splitters collapse, so no empty tokens are produced. Text with
/// no letters or digits yields an empty vector.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if !is_word_char(ch) {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: text[token_start..idx].to_string(),
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(Token {
            text: text[token_start..].to_string(),
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}

/// Borrowing form of [`tokenize`] for callers that only need the words.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split(|ch: char| !is_word_char(ch))
        .filter(|word| !word.is_empty())
        .collect()
}
