//! Per-field rule options.
//!
//! The options bag is whatever the form author attached to a field: `min`,
//! `max`, `date`, `exclude`, `equalto`, `extension`. It keeps JSON semantics
//! so it can come straight out of markup attributes or a config file. Typed
//! accessors turn absent or ill-typed entries into [`ConfigError`]s naming
//! the rule that asked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::ConfigError;
use crate::rules::RuleId;

/// Option names read by the built-in rules.
pub mod names {
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const DATE: &str = "date";
    pub const EXCLUDE: &str = "exclude";
    pub const EQUAL_TO: &str = "equalto";
    pub const EXTENSION: &str = "extension";
}

/// Options supplied with a field.
///
/// # Examples
///
/// ```rust,ignore
/// use formrule_validator::options::RuleOptions;
///
/// let opts = RuleOptions::from_json(r#"{"min": 3, "exclude": ["admin", "root"]}"#)?;
/// let opts = RuleOptions::new().with("date", "yyyy-mm-dd");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOptions {
    values: Map<String, Value>,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::OptionsFormat {
            reason: e.to_string(),
        })
    }

    /// Sets an option while building.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw option value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // ------------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------------

    /// A non-negative integer option, e.g. `min` or `max`.
    ///
    /// Accepts a JSON integer or a string holding one, since values lifted
    /// from markup attributes arrive as text.
    pub fn count(&self, rule: &RuleId, key: &'static str) -> Result<usize, ConfigError> {
        let value = self.require(rule, key)?;
        let parsed = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| malformed(rule, key, format!("expected a non-negative integer, got {value}")))
    }

    /// An optional string option, e.g. the `date` format.
    pub fn text(&self, rule: &RuleId, key: &'static str) -> Result<Option<&str>, ConfigError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(malformed(rule, key, format!("expected a string, got {other}"))),
        }
    }

    /// A required string option, e.g. the `equalto` reference.
    pub fn require_text(&self, rule: &RuleId, key: &'static str) -> Result<&str, ConfigError> {
        self.text(rule, key)?.ok_or_else(|| missing(rule, key))
    }

    /// A list of strings, e.g. `exclude` or `extension`.
    ///
    /// A bare string counts as a one-element list. Numbers and booleans are
    /// taken in their JSON spelling; nested structures are rejected.
    pub fn string_list(&self, rule: &RuleId, key: &'static str) -> Result<Vec<String>, ConfigError> {
        match self.require(rule, key)? {
            Value::String(s) => Ok(vec![s.clone()]),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    Value::Bool(b) => Ok(b.to_string()),
                    other => Err(malformed(rule, key, format!("unsupported list entry {other}"))),
                })
                .collect(),
            other => Err(malformed(rule, key, format!("expected a list, got {other}"))),
        }
    }

    fn require(&self, rule: &RuleId, key: &'static str) -> Result<&Value, ConfigError> {
        match self.get(key) {
            None | Some(Value::Null) => Err(missing(rule, key)),
            Some(value) => Ok(value),
        }
    }
}

impl From<Map<String, Value>> for RuleOptions {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

fn missing(rule: &RuleId, option: &'static str) -> ConfigError {
    ConfigError::MissingOption {
        rule: rule.to_string(),
        option,
    }
}

fn malformed(rule: &RuleId, option: &'static str, reason: String) -> ConfigError {
    ConfigError::MalformedOption {
        rule: rule.to_string(),
        option,
        reason,
    }
}
