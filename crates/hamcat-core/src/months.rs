//! French month and weekday names.
//!
//! Month tokens are matched after lower-casing, so `"Août"`, `"AOÛT"` and
//! `"août"` all resolve to the same entry. Both the abbreviated forms used on
//! the listing (`"juil"`, `"sept"`, `"déc"`) and the full names are accepted.

use chrono::Weekday;

/// Lower-case month tokens and their zero-based month index.
const MONTH_TOKENS: &[(&str, u32)] = &[
    ("janv", 0),
    ("janvier", 0),
    ("févr", 1),
    ("février", 1),
    ("mars", 2),
    ("avr", 3),
    ("avril", 3),
    ("mai", 4),
    ("juin", 5),
    ("juil", 6),
    ("juillet", 6),
    ("août", 7),
    ("sept", 8),
    ("septembre", 8),
    ("oct", 9),
    ("octobre", 9),
    ("nov", 10),
    ("novembre", 10),
    ("déc", 11),
    ("décembre", 11),
];

/// Short month names as printed by the `fr-FR` locale, indexed by zero-based month.
const MONTH_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Abbreviated month token as written on the listing, indexed by zero-based month.
const MONTH_ABBREV: [&str; 12] = [
    "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov", "déc",
];

/// Looks up a month token and returns its zero-based index (0 = janvier).
///
/// The token is lower-cased before lookup; surrounding whitespace is not
/// trimmed.
pub fn month_index(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    MONTH_TOKENS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, index)| index)
}

/// Same as [`month_index`] but 1-based, as `chrono` numbers months.
pub fn month_number(token: &str) -> Option<u32> {
    month_index(token).map(|index| index + 1)
}

/// Listing token for a 1-based month, e.g. `7` -> `"juil"`.
pub fn month_token(month: u32) -> Option<&'static str> {
    MONTH_ABBREV.get(month.checked_sub(1)? as usize).copied()
}

/// Short French month name for a 1-based month, e.g. `8` -> `"août"`.
pub fn short_month_name(month: u32) -> Option<&'static str> {
    MONTH_SHORT.get(month.checked_sub(1)? as usize).copied()
}

/// Short French weekday name, e.g. `Sun` -> `"dim."`.
pub fn short_weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lun.",
        Weekday::Tue => "mar.",
        Weekday::Wed => "mer.",
        Weekday::Thu => "jeu.",
        Weekday::Fri => "ven.",
        Weekday::Sat => "sam.",
        Weekday::Sun => "dim.",
    }
}
