//! `extension`

use super::RuleInput;
use crate::catalog::keys;
use crate::foundation::{ConfigError, Evaluation};
use crate::options::names;

/// `extension`: at least one attached file ends in an allowed extension.
///
/// Extensions are matched case-insensitively and may be configured with or
/// without the leading dot. A plain text value is treated as one file name.
pub fn extension(input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
    let configured: Vec<String> = input
        .options()
        .string_list(input.rule(), names::EXTENSION)?
        .into_iter()
        .map(|ext| ext.trim().to_owned())
        .filter(|ext| !ext.is_empty())
        .collect();

    if configured.is_empty() {
        return Err(ConfigError::MalformedOption {
            rule: input.rule().to_string(),
            option: names::EXTENSION,
            reason: "no extensions configured".to_owned(),
        });
    }

    let suffixes: Vec<String> = configured
        .iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.').to_ascii_lowercase()))
        .collect();

    let valid = input.value().entries().into_iter().any(|file| {
        let file = file.to_ascii_lowercase();
        suffixes.iter().any(|suffix| file.ends_with(suffix.as_str()))
    });

    input.verdict(valid, keys::EXTENSION, vec![configured.join("\", \"")])
}
