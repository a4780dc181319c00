//! Text-shape rules
//!
//! Regex statics for the rules that are plain patterns, plus predicates for
//! the ones that need lookahead (`username`, `pass`, `strongpass`), which
//! the `regex` crate does not support.
//!
//! Character classes are ASCII throughout: `[0-9]` rather than `\d`,
//! `[A-Za-z0-9_]` rather than `\w`.

use std::sync::LazyLock;

use regex::Regex;

use super::RuleInput;
use crate::foundation::{ConfigError, Evaluation};

// ============================================================================
// PATTERNS
// ============================================================================

/// Contains at least one digit.
pub static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

/// Digits only, at least one.
pub static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Three or more letters, nothing else.
pub static NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{3,}$").unwrap());

/// Something, an `@`, then at least one more non-`@` character. Not RFC 5322
/// and not meant to be.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^@]+@[^@]").unwrap());

/// US number as `NXX-XXX-XXXX`; only the area code may not start with 0 or 1.
pub static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[2-9][0-9]{2}-[0-9]{3}-[0-9]{4}$").unwrap());

/// Five-digit zip or zip+4.
pub static ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$|^[0-9]{5}-[0-9]{4}$").unwrap());

/// Optional scheme, dotted labels, 3 to 6 letter TLD. No path or port.
pub static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:ftp|http|https)://)?(?:[A-Za-z0-9_-]+\.)+[a-z]{3,6}$").unwrap()
});

// ============================================================================
// PREDICATES
// ============================================================================

/// `required`: the value must not be absent or blank.
pub fn required(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    input.fixed(!input.value().is_blank())
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Starts with a letter, 4 to 32 characters from `[A-Za-z0-9_.]`, at most
/// one dot.
pub fn is_username(value: &str) -> bool {
    let Some(first) = value.chars().next() else {
        return false;
    };
    let len = value.chars().count();

    first.is_ascii_alphabetic()
        && (4..=32).contains(&len)
        && value.chars().all(|c| is_word(c) || c == '.')
        && value.matches('.').count() <= 1
}

/// At least 6 characters with a digit, a lowercase and an uppercase letter.
/// Line breaks are allowed anywhere.
pub fn is_password(value: &str) -> bool {
    value.chars().count() >= 6
        && value.contains(|c: char| c.is_ascii_digit())
        && value.contains(|c: char| c.is_ascii_lowercase())
        && value.contains(|c: char| c.is_ascii_uppercase())
}

/// At least 8 characters on one line, not starting with `.`, with an
/// uppercase and a lowercase letter and a digit or symbol.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= 8
        && !value.contains(is_line_break)
        && !value.starts_with('.')
        && value.contains(|c: char| c.is_ascii_uppercase())
        && value.contains(|c: char| c.is_ascii_lowercase())
        && value.contains(|c: char| c.is_ascii_digit() || !is_word(c))
}
