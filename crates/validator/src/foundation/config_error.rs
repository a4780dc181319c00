//! Integration errors.
//!
//! A [`ConfigError`] means the form was wired up wrong: an unknown rule, a
//! missing option, a catalog without the messages a rule needs. These never
//! describe the user's input and must not be shown as a field message.

/// Error type for rule registry and catalog misuse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No rule with this identifier is registered.
    #[error("unknown rule `{rule}`")]
    UnknownRule { rule: String },

    /// A rule with this identifier is already registered.
    #[error("rule `{rule}` is already registered")]
    DuplicateRule { rule: String },

    /// A rule needs an option the field did not provide.
    #[error("rule `{rule}` requires option `{option}`")]
    MissingOption { rule: String, option: &'static str },

    /// An option is present but unusable.
    #[error("invalid option `{option}` for rule `{rule}`: {reason}")]
    MalformedOption {
        rule: String,
        option: &'static str,
        reason: String,
    },

    /// An options document could not be parsed.
    #[error("invalid options: {reason}")]
    OptionsFormat { reason: String },

    /// A cross-field reference does not name a known field.
    #[error("rule `{rule}` references unknown field `{reference}`")]
    UnresolvedField { rule: String, reference: String },

    /// The catalog has no template for a message key.
    #[error("no message template for `{key}`")]
    MissingMessage { key: String },

    /// A replacement catalog lacks templates the registry needs.
    #[error("message catalog `{locale}` is missing {} template(s): {}", .missing.len(), .missing.join(", "))]
    IncompleteCatalog {
        locale: String,
        missing: Vec<String>,
    },

    /// A template uses a placeholder its rule never fills in.
    #[error("message `{key}` in catalog `{locale}` uses {{{index}}} but only {supplied} argument(s) are supplied")]
    PlaceholderOutOfRange {
        locale: String,
        key: String,
        index: usize,
        supplied: usize,
    },

    /// A catalog document could not be parsed.
    #[error("invalid message catalog: {reason}")]
    CatalogFormat { reason: String },

    /// A custom pattern rule did not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ConfigError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::UnknownRule { .. } => "lookup",
            Self::DuplicateRule { .. } => "lookup",
            Self::MissingOption { .. } => "options",
            Self::MalformedOption { .. } => "options",
            Self::OptionsFormat { .. } => "options",
            Self::UnresolvedField { .. } => "options",
            Self::MissingMessage { .. } => "catalog",
            Self::IncompleteCatalog { .. } => "catalog",
            Self::PlaceholderOutOfRange { .. } => "catalog",
            Self::CatalogFormat { .. } => "catalog",
            Self::InvalidPattern { .. } => "definition",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownRule { .. } => "RULE_UNKNOWN",
            Self::DuplicateRule { .. } => "RULE_DUPLICATE",
            Self::MissingOption { .. } => "OPTION_MISSING",
            Self::MalformedOption { .. } => "OPTION_MALFORMED",
            Self::OptionsFormat { .. } => "OPTIONS_FORMAT",
            Self::UnresolvedField { .. } => "FIELD_UNRESOLVED",
            Self::MissingMessage { .. } => "MESSAGE_MISSING",
            Self::IncompleteCatalog { .. } => "CATALOG_INCOMPLETE",
            Self::PlaceholderOutOfRange { .. } => "CATALOG_PLACEHOLDER",
            Self::CatalogFormat { .. } => "CATALOG_FORMAT",
            Self::InvalidPattern { .. } => "PATTERN_INVALID",
        }
    }
}
