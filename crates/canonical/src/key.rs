use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::abbreviations::expand_abbreviation;
use crate::config::NormalizeConfig;

/// Derives the comparison key of a single whitespace-free word.
///
/// Order matters: NFKC first since it can change character boundaries, then
/// abbreviations (which need the period that stripping would remove), then
/// casing, accents and punctuation.
pub(crate) fn normalize_key(word: &str, cfg: &NormalizeConfig) -> String {
    let standardized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(word.nfkc().collect())
    } else {
        Cow::Borrowed(word)
    };

    let expanded = if cfg.expand_abbreviations && cfg.english_rules_apply() {
        expand_abbreviation(&standardized)
    } else {
        None
    };

    let cased: Cow<str> = match expanded {
        Some(spoken) if cfg.case_sensitive && starts_uppercase(&standardized) => {
            Cow::Owned(capitalize(spoken))
        }
        Some(spoken) => Cow::Borrowed(spoken),
        None if cfg.case_sensitive => standardized,
        None => Cow::Owned(standardized.to_lowercase()),
    };

    let folded: Cow<str> = if cfg.fold_diacritics {
        Cow::Owned(
            cased
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .nfc()
                .collect(),
        )
    } else {
        cased
    };

    if cfg.strip_punctuation {
        folded
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_mark())
            .collect()
    } else {
        folded.into_owned()
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars()
        .find(|c| c.is_alphanumeric())
        .is_some_and(char::is_uppercase)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
