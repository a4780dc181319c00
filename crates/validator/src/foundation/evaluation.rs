//! The result of running one rule against one field.

use std::fmt;

use crate::foundation::ValidationError;
use crate::rules::RuleId;

/// Outcome of a single rule evaluation.
///
/// Every evaluation owns its message. Nothing is written back into the rule
/// or the registry, so two evaluations never observe each other.
///
/// `message` is filled in for valid results too: it is the text the rule
/// would show had it failed, which lets a UI pre-render hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Rule that produced this result.
    pub rule: RuleId,
    /// Whether the value satisfied the rule.
    pub valid: bool,
    /// Rendered message for this evaluation.
    pub message: String,
    /// Positional arguments substituted into the template.
    pub args: Vec<String>,
}

impl Evaluation {
    /// Creates an evaluation without template arguments.
    pub fn new(rule: RuleId, valid: bool, message: impl Into<String>) -> Self {
        Self {
            rule,
            valid,
            message: message.into(),
            args: Vec::new(),
        }
    }

    /// Attaches the template arguments the message was rendered with.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Returns `true` if the value satisfied the rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The message, but only when the rule failed.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        (!self.valid).then_some(self.message.as_str())
    }

    /// Converts to `Result`, turning a failure into a [`ValidationError`].
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.valid {
            return Ok(());
        }
        Err(ValidationError::new(self.rule.to_string(), self.message).with_params(self.args))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}: ok", self.rule)
        } else {
            write!(f, "{}: {}", self.rule, self.message)
        }
    }
}
