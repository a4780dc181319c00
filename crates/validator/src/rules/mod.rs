//! Rule definitions and the built-in rule set
//!
//! A rule is either a compiled [`Regex`] tested against the raw value, or a
//! predicate that sees the whole [`FieldContext`] and returns its own
//! [`Evaluation`]. The registry dispatches with one `match` on
//! [`RuleDefinition`].
//!
//! # Built-in rules
//!
//! - **Patterns**: `number`, `digits`, `name`, `email`, `phone`, `zip`, `url`
//! - **Text checks**: `required`, `username`, `pass`, `strongpass`
//! - **Counting**: `min`, `max`
//! - **Calendar**: `date`, `dob`
//! - **Membership**: `exclude`
//! - **Cross-field**: `equalto`
//! - **Files**: `extension`

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::catalog::MessageCatalog;
use crate::context::{ControlKind, FieldContext, FieldValue};
use crate::foundation::{ConfigError, Evaluation};
use crate::options::RuleOptions;

pub mod date;
pub mod equal_to;
pub mod extension;
pub mod id;
pub mod length;
pub mod membership;
pub mod pattern;

pub use date::DateFormat;
pub use id::RuleId;

/// Signature of a predicate rule.
pub type PredicateFn = dyn Fn(&RuleInput<'_>) -> Result<Evaluation, ConfigError> + Send + Sync;

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// How a rule decides validity.
#[derive(Clone)]
pub enum RuleDefinition {
    /// Tested against the raw value; the message is the catalog entry for
    /// the rule id, verbatim.
    Pattern(Regex),
    /// Sees the full context and renders its own message.
    Predicate(Arc<PredicateFn>),
}

impl RuleDefinition {
    /// Compiles a pattern rule.
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Wraps a predicate rule.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&RuleInput<'_>) -> Result<Evaluation, ConfigError> + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// A predicate over each entry of the value with the rule's fixed message.
    ///
    /// Behaves like [`RuleDefinition::Pattern`] for checks a regular
    /// expression cannot express.
    pub fn check(test: fn(&str) -> bool) -> Self {
        Self::predicate(move |input| input.fixed(all_entries(input.value(), test)))
    }

    /// Runs the rule.
    pub fn evaluate(&self, input: &RuleInput<'_>) -> Result<Evaluation, ConfigError> {
        match self {
            Self::Pattern(regex) => input.fixed(all_entries(input.value(), |s| regex.is_match(s))),
            Self::Predicate(predicate) => predicate(input),
        }
    }

    /// `"pattern"` or `"predicate"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pattern(_) => "pattern",
            Self::Predicate(_) => "predicate",
        }
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Applies `test` to every entry; an absent value or empty list is tested
/// as the empty string.
fn all_entries(value: &FieldValue, test: impl Fn(&str) -> bool) -> bool {
    let entries = value.entries();
    if entries.is_empty() {
        test("")
    } else {
        entries.into_iter().all(test)
    }
}

// ============================================================================
// RULE INPUT
// ============================================================================

/// What a rule sees during one evaluation.
///
/// The catalog is the snapshot the registry loaded for this call; a locale
/// swap mid-evaluation is not observed.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    rule: &'a RuleId,
    field: &'a FieldContext,
    catalog: &'a MessageCatalog,
}

impl<'a> RuleInput<'a> {
    pub fn new(rule: &'a RuleId, field: &'a FieldContext, catalog: &'a MessageCatalog) -> Self {
        Self {
            rule,
            field,
            catalog,
        }
    }

    pub fn rule(&self) -> &'a RuleId {
        self.rule
    }

    pub fn field(&self) -> &'a FieldContext {
        self.field
    }

    pub fn catalog(&self) -> &'a MessageCatalog {
        self.catalog
    }

    pub fn value(&self) -> &'a FieldValue {
        &self.field.value
    }

    pub fn control(&self) -> ControlKind {
        self.field.control
    }

    pub fn options(&self) -> &'a RuleOptions {
        &self.field.options
    }

    /// Builds an evaluation from a catalog template and arguments.
    pub fn verdict(
        &self,
        valid: bool,
        key: &str,
        args: Vec<String>,
    ) -> Result<Evaluation, ConfigError> {
        let message = self.catalog.render(key, args.as_slice())?;
        Ok(Evaluation::new(self.rule.clone(), valid, message).with_args(args))
    }

    /// Builds an evaluation carrying the rule's own template, unrendered.
    pub fn fixed(&self, valid: bool) -> Result<Evaluation, ConfigError> {
        let message = self
            .catalog
            .template_for(self.rule)
            .ok_or_else(|| ConfigError::MissingMessage {
                key: self.rule.to_string(),
            })?;
        Ok(Evaluation::new(self.rule.clone(), valid, message))
    }
}

// ============================================================================
// BUILT-IN TABLE
// ============================================================================

/// The built-in rules, one entry per [`RuleId::BUILTIN`].
pub fn builtin() -> Vec<(RuleId, RuleDefinition)> {
    vec![
        (RuleId::Required, RuleDefinition::predicate(pattern::required)),
        (RuleId::Number, RuleDefinition::Pattern(pattern::NUMBER.clone())),
        (RuleId::Digits, RuleDefinition::Pattern(pattern::DIGITS.clone())),
        (RuleId::Name, RuleDefinition::Pattern(pattern::NAME.clone())),
        (RuleId::Username, RuleDefinition::check(pattern::is_username)),
        (RuleId::Pass, RuleDefinition::check(pattern::is_password)),
        (RuleId::StrongPass, RuleDefinition::check(pattern::is_strong_password)),
        (RuleId::Email, RuleDefinition::Pattern(pattern::EMAIL.clone())),
        (RuleId::Phone, RuleDefinition::Pattern(pattern::PHONE.clone())),
        (RuleId::Zip, RuleDefinition::Pattern(pattern::ZIP.clone())),
        (RuleId::Url, RuleDefinition::Pattern(pattern::URL.clone())),
        (RuleId::Min, RuleDefinition::predicate(length::min)),
        (RuleId::Max, RuleDefinition::predicate(length::max)),
        (RuleId::Date, RuleDefinition::predicate(date::date)),
        (RuleId::Dob, RuleDefinition::predicate(date::dob)),
        (RuleId::Exclude, RuleDefinition::predicate(membership::exclude)),
        (RuleId::EqualTo, RuleDefinition::predicate(equal_to::equal_to)),
        (RuleId::Extension, RuleDefinition::predicate(extension::extension)),
    ]
}
