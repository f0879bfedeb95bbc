//! Identifier extraction from free text.
//!
//! An identifier is a run of ASCII digits of bounded length: case/request
//! numbers in the resolution response, account/bill numbers in the
//! description. Runs outside the bounds are skipped whole, never truncated.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest digit run accepted as an identifier.
pub const MIN_DIGITS: usize = 7;
/// Longest digit run accepted as an identifier.
pub const MAX_DIGITS: usize = 15;

static RE_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));

/// Identifiers pulled from one input row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifiers {
    /// From the resolution response.
    pub request_number: Option<String>,
    /// From the description.
    pub reference_number: Option<String>,
}

/// First maximal digit run in `text` with length in `MIN_DIGITS..=MAX_DIGITS`.
pub fn first_identifier(text: &str) -> Option<String> {
    RE_DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|run| (MIN_DIGITS..=MAX_DIGITS).contains(&run.len()))
        .map(str::to_string)
}

/// Scan both texts independently. Pure and total.
pub fn extract_identifiers(description: &str, resolution: &str) -> Identifiers {
    Identifiers {
        request_number: first_identifier(resolution),
        reference_number: first_identifier(description),
    }
}
