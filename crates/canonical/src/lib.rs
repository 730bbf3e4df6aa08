//! Transcript tokenization and normalization layer.
//!
//! This crate turns a raw transcript into words the aligner can compare,
//! while remembering exactly where each word came from so the diff can later
//! be rendered with the original formatting.
//!
//! ## What we do
//!
//! - Split on runs of Unicode whitespace, with UTF-8 byte offsets per word
//! - Keep each word's verbatim text and the separator text before it
//! - Derive a comparison key per word: NFKC, lowercase, punctuation removal,
//!   optional accent folding and abbreviation expansion
//! - Compile caller-declared equivalence pairs (`"one"` = `"1"`) into a
//!   symmetric lookup
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Tokenizing is a function of
//! the text and the config only, and never fails; only malformed config is
//! rejected, by [`Normalizer::new`].
//!
//! ## Invariants worth knowing
//!
//! - Keys never affect `text`: `separator + text` over all tokens, then
//!   `trailing`, rebuilds the input byte for byte
//! - Runs that normalize to an empty key (`"-"`, `"..."`) are separators,
//!   not tokens
//! - Empty input gives an empty sequence
//!
//! ```rust
//! use canonical::{Normalizer, NormalizeConfig};
//!
//! let normalizer = Normalizer::new(&NormalizeConfig::default()).unwrap();
//! let seq = normalizer.tokenize("You're a perfect sphere.");
//!
//! assert_eq!(seq.keys(), vec!["youre", "a", "perfect", "sphere"]);
//! assert_eq!(seq.tokens[3].text, "sphere.");
//! assert_eq!(seq.reconstruct(), "You're a perfect sphere.");
//! ```

mod abbreviations;
mod config;
mod equivalence;
mod error;
mod key;
mod numbers;
mod pipeline;
mod token;

pub use crate::abbreviations::{expand_abbreviation, ABBREVIATIONS};
pub use crate::config::NormalizeConfig;
pub use crate::equivalence::EquivalenceSet;
pub use crate::error::CanonicalError;
pub use crate::numbers::number_word_pairs;
pub use crate::pipeline::{tokenize, Normalizer};
pub use crate::token::{Token, TokenSequence};
