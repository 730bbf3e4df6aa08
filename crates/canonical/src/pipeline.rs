use crate::config::NormalizeConfig;
use crate::equivalence::EquivalenceSet;
use crate::error::CanonicalError;
use crate::key::normalize_key;
use crate::numbers::number_word_pairs;
use crate::token::{Token, TokenSequence};

/// A validated, compiled [`NormalizeConfig`].
///
/// Building a `Normalizer` is the only fallible step of the stage. Once
/// built it is immutable and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizeConfig,
    equivalences: EquivalenceSet,
}

impl Normalizer {
    /// Validate `cfg` and compile its equivalence pairs into keys.
    pub fn new(cfg: &NormalizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;

        let mut equivalences = EquivalenceSet::new();
        for (left, right) in &cfg.equivalence_pairs {
            let left_key = normalize_key(left, cfg);
            let right_key = normalize_key(right, cfg);
            if left_key.is_empty() || right_key.is_empty() {
                return Err(CanonicalError::InvalidEquivalence {
                    left: left.clone(),
                    right: right.clone(),
                    reason: "component normalizes to an empty key".into(),
                });
            }
            equivalences.insert(left_key, right_key);
        }

        if cfg.number_words && cfg.english_rules_apply() {
            for (digits, word) in number_word_pairs() {
                equivalences.insert(normalize_key(&digits, cfg), normalize_key(&word, cfg));
            }
        }

        Ok(Self {
            config: cfg.clone(),
            equivalences,
        })
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    pub fn equivalences(&self) -> &EquivalenceSet {
        &self.equivalences
    }

    /// Comparison key of a single whitespace-free word.
    pub fn normalize_key(&self, word: &str) -> String {
        normalize_key(word, &self.config)
    }

    /// True if two keys are equal or declared equivalent.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        a == b || self.equivalences.contains(a, b)
    }

    pub fn tokens_equivalent(&self, a: &Token, b: &Token) -> bool {
        self.equivalent(&a.key, &b.key)
    }

    /// Split `text` into tokens on runs of Unicode whitespace.
    ///
    /// A whitespace-free run whose key is empty is not a token; it is kept
    /// verbatim in the separator of the next token (or in `trailing`).
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        let mut tokens: Vec<Token> = Vec::with_capacity((text.len() / 5).saturating_add(1));
        let mut separator_start = 0;
        let mut word_start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = word_start.take() {
                    self.finalize_word(text, start, idx, &mut separator_start, &mut tokens);
                }
            } else if word_start.is_none() {
                word_start = Some(idx);
            }
        }

        // The last word needs to be finalized after the loop.
        if let Some(start) = word_start {
            self.finalize_word(text, start, text.len(), &mut separator_start, &mut tokens);
        }

        TokenSequence {
            tokens,
            trailing: text[separator_start..].to_string(),
            source_len: text.len(),
        }
    }

    fn finalize_word(
        &self,
        text: &str,
        start: usize,
        end: usize,
        separator_start: &mut usize,
        tokens: &mut Vec<Token>,
    ) {
        let word = &text[start..end];
        let key = self.normalize_key(word);
        if key.is_empty() {
            return;
        }
        tokens.push(Token {
            key,
            text: word.to_string(),
            start,
            end,
            separator: text[*separator_start..start].to_string(),
        });
        *separator_start = end;
    }
}

/// Tokenize `text` with a one-off [`Normalizer`] built from `cfg`.
///
/// Prefer building a `Normalizer` once when tokenizing many strings.
pub fn tokenize(text: &str, cfg: &NormalizeConfig) -> Result<TokenSequence, CanonicalError> {
    Ok(Normalizer::new(cfg)?.tokenize(text))
}
