//! `exclude`

use super::RuleInput;
use crate::catalog::keys;
use crate::foundation::{ConfigError, Evaluation};
use crate::options::names;

/// `exclude`: the value, or every chosen option, must be outside the
/// `exclude` list.
///
/// Comparison is exact. The message echoes the first rejected entry; when
/// nothing is rejected it echoes the whole value.
pub fn exclude(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    let excluded = input.options().string_list(input.rule(), names::EXCLUDE)?;
    let value = input.value();

    let rejected = value
        .entries()
        .into_iter()
        .find(|entry| excluded.iter().any(|x| x == *entry));

    let key = if input.control().is_option_control() {
        keys::EXCLUDE_OPTION
    } else {
        keys::EXCLUDE
    };
    let echoed = rejected.map_or_else(|| value.as_text().into_owned(), str::to_owned);

    input.verdict(rejected.is_none(), key, vec![echoed])
}
