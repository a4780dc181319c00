//! Error types for validation failures
//!
//! A [`ValidationError`] is what an end user gets to see: the rule that
//! failed, the rendered message and the positional arguments that went into
//! it. Integration mistakes are a different type entirely, see
//! [`ConfigError`](super::ConfigError).
//!
//! All string fields use `Cow<'static, str>` so rule codes never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rule rejected a field value.
///
/// # Examples
///
/// ```rust,ignore
/// use formrule_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "Must be at least <strong>3</strong> characters long.")
///     .with_field("username")
///     .with_param("3");
/// assert_eq!(error.param(0), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Identifier of the rule that failed.
    ///
    /// Examples: "required", "min", "equalto"
    pub code: Cow<'static, str>,

    /// Rendered message, placeholders already substituted.
    pub message: Cow<'static, str>,

    /// Name of the field, when the caller supplied one.
    pub field: Option<Cow<'static, str>>,

    /// Positional arguments the message template was rendered with.
    ///
    /// `params[0]` is what replaced `{0}`, and so on.
    pub params: Vec<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a positional parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Replaces all positional parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.params = values.into_iter().map(Into::into).collect();
        self
    }

    /// Looks up a positional parameter.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(AsRef::as_ref)
    }

    /// Converts the error to a JSON structure for transport to a UI layer.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": self.params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
