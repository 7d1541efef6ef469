//! Transformations over sequences of strings
//!
//! Inputs are taken as `&[S] where S: AsRef<str>` so both `&[&str]` and
//! `&[String]` can be passed without copying.

use crate::parse::parse_or_zero;

/// Words strictly shorter than this many characters are short
pub const SHORT_WORD_LIMIT: usize = 4;

/// The only colors accepted by [`all_rgb`]
pub const RGB_COLORS: [&str; 3] = ["red", "green", "blue"];

/// Prefix stripped by [`remove_dollars`]
pub const DOLLAR_PREFIX: char = '$';

/// Parse every string as a number, using `0` for anything unparseable
pub fn strings_to_integers<S: AsRef<str>>(strings: &[S]) -> Vec<f64> {
    strings.iter().map(|s| parse_or_zero(s.as_ref())).collect()
}

/// Parse dollar amounts as numbers
///
/// A single leading `$` is removed before parsing. Anything that still does
/// not parse becomes `0`.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<f64> {
    amounts
        .iter()
        .map(|amount| {
            let amount = amount.as_ref();
            parse_or_zero(amount.strip_prefix(DOLLAR_PREFIX).unwrap_or(amount))
        })
        .collect()
}

/// Drop questions and uppercase exclamations
///
/// Strings ending in `?` are removed; strings ending in `!` are uppercased.
/// Empty strings end in neither and pass through unchanged.
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .map(|message| message.as_ref())
        .filter(|message| !message.ends_with('?'))
        .map(|message| {
            if message.ends_with('!') {
                message.to_uppercase()
            } else {
                message.to_string()
            }
        })
        .collect()
}

/// Count the words shorter than [`SHORT_WORD_LIMIT`] characters
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|word| word.as_ref().chars().count() < SHORT_WORD_LIMIT)
        .count()
}

/// Check that every color is exactly `red`, `green` or `blue`
///
/// Vacuously true for an empty slice.
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    colors
        .iter()
        .all(|color| RGB_COLORS.contains(&color.as_ref()))
}
