//! Built-in English numeral equivalences.
//!
//! Recognizers usually write small numbers as digits while references spell
//! them out (or the other way around). An equivalence relates one token to
//! one token, so only numbers spoken as a single whitespace-free word are
//! covered: 0 to 99 and the matching ordinals. Compounds use the hyphenated
//! spelling (`"twenty-one"`, `"twenty-first"`), whose key is one word.

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const ORDINAL_SUFFIXES: [(&str, &str); 8] = [
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
    ("ty", "tieth"),
];

/// Spoken ordinal for a single-word cardinal (`"twenty"` -> `"twentieth"`).
fn ordinal_word(cardinal: &str) -> String {
    for (suffix, replacement) in ORDINAL_SUFFIXES {
        if let Some(stem) = cardinal.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    format!("{cardinal}th")
}

/// Written ordinal suffix for `n` (`1` -> `"st"`, `12` -> `"th"`).
fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

/// Cardinal and ordinal spellings of `n` for `n < 100`.
fn spell(n: u32) -> (String, String) {
    let (tens, unit) = (n / 10, n % 10);
    if n < 20 {
        let word = UNITS[n as usize];
        (word.to_string(), ordinal_word(word))
    } else if unit == 0 {
        let word = TENS[tens as usize];
        (word.to_string(), ordinal_word(word))
    } else {
        let tens = TENS[tens as usize];
        let unit = UNITS[unit as usize];
        (format!("{tens}-{unit}"), format!("{tens}-{}", ordinal_word(unit)))
    }
}

/// Every number from 0 to 99 as `(digits, word)` pairs, ordinals included.
///
/// ```rust
/// let pairs = canonical::number_word_pairs();
/// assert!(pairs.contains(&("1".to_string(), "one".to_string())));
/// assert!(pairs.contains(&("3rd".to_string(), "third".to_string())));
/// assert!(pairs.contains(&("40th".to_string(), "fortieth".to_string())));
/// assert!(pairs.contains(&("21st".to_string(), "twenty-first".to_string())));
/// ```
pub fn number_word_pairs() -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(199);
    for n in 0..100u32 {
        let (cardinal, ordinal) = spell(n);
        pairs.push((n.to_string(), cardinal));
        if n > 0 {
            pairs.push((format!("{n}{}", ordinal_suffix(n)), ordinal));
        }
    }
    pairs
}
