//! `min` and `max`
//!
//! Text controls count characters; checkbox groups and selects count
//! chosen options and switch to the `*Option` message. A file input is
//! measured by the name of its first file.

use super::RuleInput;
use crate::catalog::keys;
use crate::context::ControlKind;
use crate::foundation::{ConfigError, Evaluation};
use crate::options::names;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

impl Bound {
    fn option(self) -> &'static str {
        match self {
            Self::Min => names::MIN,
            Self::Max => names::MAX,
        }
    }

    fn message_key(self, option_control: bool) -> &'static str {
        match (self, option_control) {
            (Self::Min, false) => keys::MIN,
            (Self::Min, true) => keys::MIN_OPTION,
            (Self::Max, false) => keys::MAX,
            (Self::Max, true) => keys::MAX_OPTION,
        }
    }

    fn holds(self, actual: usize, limit: usize) -> bool {
        match self {
            Self::Min => actual >= limit,
            Self::Max => actual <= limit,
        }
    }
}

fn check(input: &RuleInput<'_>, bound: Bound) -> Result<Evaluation, ConfigError> {
    let limit = input.options().count(input.rule(), bound.option())?;
    let option_control = input.control().is_option_control();

    let value = input.value();
    let actual = match input.control() {
        _ if option_control => value.selected_count(),
        ControlKind::File => value.entries().first().map_or(0, |name| name.chars().count()),
        _ => value.char_count(),
    };

    input.verdict(
        bound.holds(actual, limit),
        bound.message_key(option_control),
        vec![limit.to_string()],
    )
}

/// `min`: at least `min` characters, or `min` options chosen.
pub fn min(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    check(input, Bound::Min)
}

/// `max`: at most `max` characters, or `max` options chosen.
pub fn max(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    check(input, Bound::Max)
}
