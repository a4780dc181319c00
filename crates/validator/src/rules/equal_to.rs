//! `equalto`
//!
//! The only rule that reads another field. The peer's last known validity
//! gates the comparison: confirming a password that is itself invalid never
//! passes.

use super::RuleInput;
use crate::catalog::keys;
use crate::foundation::{ConfigError, Evaluation};
use crate::options::names;

/// `equalto`: the referenced peer is valid and holds the same value.
pub fn equal_to(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    let reference = input.options().require_text(input.rule(), names::EQUAL_TO)?;
    let peer = input
        .field()
        .peer(reference)
        .ok_or_else(|| ConfigError::UnresolvedField {
            rule: input.rule().to_string(),
            reference: reference.to_owned(),
        })?;

    let valid = peer.validity.is_valid() && peer.value == input.value().as_text();
    input.verdict(valid, keys::EQUAL_TO, vec![peer.name.clone()])
}
