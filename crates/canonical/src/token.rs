use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A word with its comparison key and its verbatim source span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Normalized form used for equality during alignment.
    pub key: String,
    /// The word exactly as it appears in the source, punctuation and case kept.
    pub text: String,
    /// Byte offset (inclusive) of `text` in the source string.
    pub start: usize,
    /// Byte offset (exclusive) of `text` in the source string.
    pub end: usize,
    /// Verbatim source text between the previous token and this one.
    ///
    /// Holds whitespace and any whitespace-delimited run whose key came out
    /// empty (a lone dash, an ellipsis, ...).
    pub separator: String,
}

impl Token {
    /// Byte range of the separator in the source string.
    pub fn separator_span(&self) -> Range<usize> {
        (self.start - self.separator.len())..self.start
    }

    /// Byte range of the separator and the word together.
    pub fn full_span(&self) -> Range<usize> {
        (self.start - self.separator.len())..self.end
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.key.as_str()
    }
}

/// Ordered tokens of one source string.
///
/// Invariant: the tokens are in increasing offset order, never overlap, and
/// `separator + text` of every token followed by `trailing` reproduces the
/// source byte for byte.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSequence {
    pub tokens: Vec<Token>,
    /// Verbatim text after the last token.
    pub trailing: String,
    /// Byte length of the source string.
    pub source_len: usize,
}

impl TokenSequence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Comparison keys in order.
    pub fn keys(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.key.as_str()).collect()
    }

    /// Byte offset where `trailing` begins.
    pub fn trailing_start(&self) -> usize {
        self.source_len - self.trailing.len()
    }

    /// Rebuild the source string from separators, words and the trailing text.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.source_len);
        for token in &self.tokens {
            out.push_str(&token.separator);
            out.push_str(&token.text);
        }
        out.push_str(&self.trailing);
        out
    }
}

impl std::ops::Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
