//! English abbreviations spelled out in comparison keys.
//!
//! An entry only applies when the abbreviation is written with its trailing
//! period (`"Dr."`, `"oct.,"`); a bare `"dr"` is left alone. Matching is
//! case-insensitive and the replacement is always lowercase.

/// `(abbreviation, spoken form)` pairs, abbreviation without its period.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("mrs", "misess"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "saint"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "feet"),
    ("abbrev", "abbreviation"),
    ("ave", "avenue"),
    ("abstr", "abstract"),
    ("addr", "address"),
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("sept", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("wed", "wednesday"),
    ("thur", "thursday"),
    ("fri", "friday"),
    ("sec", "second"),
    ("min", "minute"),
    ("mo", "month"),
    ("yr", "year"),
    ("cal", "calorie"),
    ("dept", "department"),
    ("gal", "gallon"),
    ("kg", "kilogram"),
    ("km", "kilometer"),
    ("mt", "mount"),
    ("oz", "ounce"),
    ("vol", "volume"),
    ("vs", "versus"),
    ("yd", "yard"),
    ("e.g", "eg"),
    ("i.e", "ie"),
    ("etc", "etc"),
];

/// Spoken form of `word` if it is a listed abbreviation followed by a period.
///
/// Leading punctuation (`"(dr."`) and trailing punctuation after the period
/// (`"jr.!"`) are allowed; any letter or digit after the period is not.
pub fn expand_abbreviation(word: &str) -> Option<&'static str> {
    let body = word
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ABBREVIATIONS.iter().find_map(|&(abbrev, spoken)| {
        let rest = body.strip_prefix(abbrev)?.strip_prefix('.')?;
        if rest.chars().any(char::is_alphanumeric) {
            None
        } else {
            Some(spoken)
        }
    })
}
