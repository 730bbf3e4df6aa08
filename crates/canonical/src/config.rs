//! Configuration types for transcript normalization.
//!
//! This module defines [`NormalizeConfig`], which controls how each word's
//! comparison key is derived and which textual forms count as equivalent
//! during alignment.
//!
//! # Keys vs. text
//!
//! Normalization only ever affects a token's key. The verbatim word is kept
//! untouched in [`Token::text`](crate::Token::text) so that diffs can be
//! rendered with the reference's original casing and punctuation.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change that can alter a
//! key (even a bug fix) must come with a version bump so that stored diffs
//! remain explainable.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.case_sensitive);
//! assert!(config.strip_punctuation);
//! assert!(config.equivalence_pairs.is_empty());
//! ```
//!
//! ## Declaring Equivalences
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default()
//!     .with_equivalence("one", "1")
//!     .with_equivalence("okay", "ok");
//! assert_eq!(config.equivalence_pairs.len(), 2);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the normalization stage.
///
/// `NormalizeConfig` is cheap to clone and serializable so it can live in a
/// YAML configuration file next to the other pipeline settings.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "case_sensitive": false,
///   "strip_punctuation": true,
///   "normalize_unicode": true,
///   "fold_diacritics": false,
///   "expand_abbreviations": false,
///   "number_words": false,
///   "language": "en",
///   "equivalence_pairs": [["one", "1"]]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Behavior version of the key normalization.
    ///
    /// Must be >= 1. Version 0 is reserved and rejected with
    /// [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// If true, keys keep their original case.
    ///
    /// With the default (`false`), `"Sphere"` and `"sphere"` align as a
    /// match. With `true` they align as a substitution.
    pub case_sensitive: bool,

    /// If true, every character that is not a letter, a digit or a combining
    /// mark is removed from keys.
    ///
    /// ```text
    /// "you're" -> "youre"
    /// "Hello," -> "hello"
    /// "e-mail" -> "email"
    /// ```
    ///
    /// Combining marks are kept so that scripts which spell vowels with marks
    /// (Devanagari, Thai, ...) do not collapse into unrelated keys. Use
    /// [`fold_diacritics`](Self::fold_diacritics) to drop accents on purpose.
    pub strip_punctuation: bool,

    /// If true, keys are NFKC-normalized before any other transform.
    ///
    /// This merges composed and decomposed forms (`"é"` vs `"e\u{301}"`)
    /// and compatibility characters (`"①"` -> `"1"`, `"ℍ"` -> `"H"`).
    pub normalize_unicode: bool,

    /// If true, accents are removed from keys (`"café"` -> `"cafe"`).
    ///
    /// Implemented as canonical decomposition followed by dropping every
    /// combining mark.
    pub fold_diacritics: bool,

    /// If true, common English abbreviations written with a trailing period
    /// are spelled out in keys, so `"Dr."` matches a recognized `"doctor"`.
    ///
    /// The table is fixed and enumerable, see
    /// [`ABBREVIATIONS`](crate::ABBREVIATIONS).
    pub expand_abbreviations: bool,

    /// If true, the built-in English numeral equivalences
    /// ([`number_word_pairs`](crate::number_word_pairs)) are added to the
    /// equivalence set: `"1"`/`"one"`, `"20"`/`"twenty"`, `"3rd"`/`"third"`.
    pub number_words: bool,

    /// Language tag of the texts being compared (`"en"`, `"en-US"`,
    /// `"fr"`, ...).
    ///
    /// The abbreviation table and the numeral preset are English. They only
    /// apply when the primary subtag is `en`, or when no language is set.
    pub language: Option<String>,

    /// Caller-declared textual forms treated as equal during alignment.
    ///
    /// Each side is normalized with the same key function as the tokens, so
    /// entries may be written in any case. The relation is symmetric but not
    /// transitive. Empty components and components containing whitespace are
    /// rejected, since a token never spans more than one word.
    pub equivalence_pairs: BTreeSet<(String, String)>,
}

impl NormalizeConfig {
    /// Create a new configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `left` and `right` equivalent.
    pub fn with_equivalence(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.equivalence_pairs.insert((left.into(), right.into()));
        self
    }

    /// Toggle case-sensitive keys.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Toggle punctuation stripping in keys.
    pub fn with_strip_punctuation(mut self, strip_punctuation: bool) -> Self {
        self.strip_punctuation = strip_punctuation;
        self
    }

    /// Toggle accent folding in keys.
    pub fn with_fold_diacritics(mut self, fold_diacritics: bool) -> Self {
        self.fold_diacritics = fold_diacritics;
        self
    }

    /// Toggle English abbreviation expansion in keys.
    pub fn with_abbreviations(mut self, expand_abbreviations: bool) -> Self {
        self.expand_abbreviations = expand_abbreviations;
        self
    }

    /// Toggle the built-in English numeral equivalences.
    pub fn with_number_words(mut self, number_words: bool) -> Self {
        self.number_words = number_words;
        self
    }

    /// Set the language tag of the compared texts.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// True unless `language` names a language other than English.
    ///
    /// ```rust
    /// use canonical::NormalizeConfig;
    ///
    /// assert!(NormalizeConfig::default().english_rules_apply());
    /// assert!(NormalizeConfig::default().with_language("en-GB").english_rules_apply());
    /// assert!(!NormalizeConfig::default().with_language("fr").english_rules_apply());
    /// ```
    pub fn english_rules_apply(&self) -> bool {
        self.language.as_deref().is_none_or(|tag| {
            tag.split(['-', '_'])
                .next()
                .is_some_and(|primary| primary.eq_ignore_ascii_case("en"))
        })
    }

    /// Validate the fields that do not need key normalization.
    ///
    /// Equivalence pairs are checked again by
    /// [`Normalizer::new`](crate::Normalizer::new) once their keys are known.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if let Some(tag) = &self.language {
            if tag.is_empty() || tag.contains(char::is_whitespace) {
                return Err(CanonicalError::InvalidConfig(format!(
                    "invalid language tag {tag:?}"
                )));
            }
        }
        for (left, right) in &self.equivalence_pairs {
            if left.trim().is_empty() || right.trim().is_empty() {
                return Err(CanonicalError::InvalidEquivalence {
                    left: left.clone(),
                    right: right.clone(),
                    reason: "components must be non-empty".into(),
                });
            }
            if left.contains(char::is_whitespace) || right.contains(char::is_whitespace) {
                return Err(CanonicalError::InvalidEquivalence {
                    left: left.clone(),
                    right: right.clone(),
                    reason: "components must be single words".into(),
                });
            }
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    /// # Defaults
    ///
    /// - `version`: 1
    /// - `case_sensitive`: false
    /// - `strip_punctuation`: true
    /// - `normalize_unicode`: true
    /// - `fold_diacritics`, `expand_abbreviations`, `number_words`: false
    /// - `language`: unset
    /// - `equivalence_pairs`: empty
    fn default() -> Self {
        Self {
            version: 1,
            case_sensitive: false,
            strip_punctuation: true,
            normalize_unicode: true,
            fold_diacritics: false,
            expand_abbreviations: false,
            number_words: false,
            language: None,
            equivalence_pairs: BTreeSet::new(),
        }
    }
}
