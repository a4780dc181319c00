//! `date` and `dob`
//!
//! Formats are written with `m`, `d` and `y` runs separated by a single
//! delimiter character, e.g. `mm/dd/yyyy` or `yyyy-mm-dd`. The delimiter is
//! the first character that is not one of `m`, `d`, `y`.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use super::RuleInput;
use crate::catalog::keys;
use crate::foundation::{ConfigError, Evaluation};
use crate::options::names;

/// Format used when the field sets no `date` option.
pub const DEFAULT_FORMAT: &str = "mm/dd/yyyy";

/// Earliest year `dob` accepts.
pub const MIN_BIRTH_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatePart {
    Month,
    Day,
    Year,
}

impl DatePart {
    fn from_letter(c: char) -> Option<Self> {
        match c {
            'm' => Some(Self::Month),
            'd' => Some(Self::Day),
            'y' => Some(Self::Year),
            _ => None,
        }
    }
}

// ============================================================================
// DATE FORMAT
// ============================================================================

/// A parsed date format.
///
/// # Examples
///
/// ```rust,ignore
/// use formrule_validator::rules::DateFormat;
///
/// let iso = DateFormat::parse("yyyy-mm-dd").unwrap();
/// assert!(iso.read("2020-02-29").is_some());
/// assert!(iso.read("2019-02-29").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    delimiter: char,
    parts: Vec<DatePart>,
}

impl DateFormat {
    /// Parses a format string.
    ///
    /// Fails when the format has no delimiter, when a segment mixes letters
    /// or is empty, or when month, day or year is missing or repeated.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let delimiter = pattern
            .chars()
            .find(|c| DatePart::from_letter(*c).is_none())
            .ok_or_else(|| format!("`{pattern}` has no delimiter"))?;

        let mut parts = Vec::with_capacity(3);
        for segment in pattern.split(delimiter) {
            let part = segment
                .chars()
                .next()
                .filter(|&first| segment.chars().all(|c| c == first))
                .and_then(DatePart::from_letter)
                .ok_or_else(|| format!("`{segment}` is not a run of m, d or y"))?;
            if parts.contains(&part) {
                return Err(format!("`{pattern}` repeats a segment"));
            }
            parts.push(part);
        }

        if parts.len() != 3 {
            return Err(format!("`{pattern}` needs month, day and year"));
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            delimiter,
            parts,
        })
    }

    /// The format as written.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Reads a calendar date, or `None` if `value` is not one.
    ///
    /// The value must have as many segments as the format. Years are
    /// exactly four digits; month and day are any run of digits.
    pub fn read(&self, value: &str) -> Option<NaiveDate> {
        let segments: Vec<&str> = value.split(self.delimiter).collect();
        if segments.len() != self.parts.len() {
            return None;
        }

        let (mut year, mut month, mut day) = (None, None, None);
        for (part, segment) in self.parts.iter().zip(segments) {
            match part {
                DatePart::Year if segment.len() == 4 => year = digits(segment),
                DatePart::Year => return None,
                DatePart::Month => month = digits(segment),
                DatePart::Day => day = digits(segment),
            }
        }

        let year = i32::try_from(year?).ok()?;
        NaiveDate::from_ymd_opt(year, month?, day?)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_FORMAT.to_owned(),
            delimiter: '/',
            parts: vec![DatePart::Month, DatePart::Day, DatePart::Year],
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn digits(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// The field's `date` option, or the default format.
fn format_for(input: &RuleInput<'_>) -> Result<DateFormat, ConfigError> {
    match input.options().text(input.rule(), names::DATE)? {
        None => Ok(DateFormat::default()),
        Some(pattern) => {
            DateFormat::parse(pattern).map_err(|reason| ConfigError::MalformedOption {
                rule: input.rule().to_string(),
                option: names::DATE,
                reason,
            })
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

/// `date`: the value is a real calendar date in the field's format.
pub fn date(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    let format = format_for(input)?;
    let valid = format.read(&input.value().as_text()).is_some();
    input.verdict(valid, keys::DATE, vec![format.to_string()])
}

/// `dob`: a valid date whose year lies between 1900 and the current year.
pub fn dob(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    let format = format_for(input)?;
    let current_year = Local::now().year();
    let valid = format
        .read(&input.value().as_text())
        .is_some_and(|date| is_birth_year(date.year(), current_year));
    input.verdict(valid, keys::DOB, Vec::new())
}

fn is_birth_year(year: i32, current_year: i32) -> bool {
    (MIN_BIRTH_YEAR..=current_year).contains(&year)
}
