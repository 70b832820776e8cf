//! Helpers for turning raw terminal input into catalog values.
//!
//! Input arrives as whatever the user typed. Genre labels are matched
//! case-insensitively by title-casing them first, and numeric answers are
//! parsed leniently so that garbage reads as "no number" instead of an error.

/// Title-case a string the way menu input is normalised.
///
/// The first cased character following any non-cased character (or the start
/// of the string) is upper-cased and every other cased character is
/// lower-cased. Whitespace is left untouched, so `" action"` stays padded.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased && !previous_cased {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }

    out
}

/// Parse a whole-number answer, ignoring surrounding whitespace.
///
/// Returns `None` for anything that is not an integer.
pub fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
