//! Field context handed to rules.
//!
//! The toolkit binding extracts everything a rule may look at (the value,
//! what kind of control it came from, the field's options, and the state of
//! any field it is compared against) into a [`FieldContext`]. Rules never
//! reach back into the UI.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::RuleOptions;

// ============================================================================
// VALUE
// ============================================================================

/// The current value of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value at all (control missing or never filled).
    #[default]
    Absent,
    /// Free text, or the single value of a select.
    Text(String),
    /// Checked boxes, selected options or attached file names.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns `true` when nothing meaningful was entered.
    ///
    /// Whitespace-only text and lists of blank entries count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }

    /// The individual entries: one for text, each item for lists.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Self::Absent => Vec::new(),
            Self::Text(s) => vec![s.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// The value as one string; list entries are joined with `,`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::List(items) => Cow::Owned(items.join(",")),
        }
    }

    /// Number of chosen entries, for option controls.
    pub fn selected_count(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Text(s) => usize::from(!s.is_empty()),
            Self::List(items) => items.len(),
        }
    }

    /// Length of the value in characters, for text controls.
    pub fn char_count(&self) -> usize {
        self.as_text().chars().count()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<String>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, |s| Self::Text(s.into()))
    }
}

// ============================================================================
// CONTROL KIND
// ============================================================================

/// The kind of control a value was read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// Text input, textarea, or anything else typed by hand.
    #[default]
    Text,
    /// Checkbox or radio group.
    Checkable,
    /// Select list.
    Select,
    /// File input.
    File,
}

impl ControlKind {
    /// Checkable groups and selects count choices rather than characters.
    pub fn is_option_control(self) -> bool {
        matches!(self, Self::Checkable | Self::Select)
    }
}

// ============================================================================
// PEER FIELDS
// ============================================================================

/// Last known validity of another field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    Invalid,
    /// Not validated yet.
    #[default]
    Unknown,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl From<Option<bool>> for Validity {
    fn from(state: Option<bool>) -> Self {
        match state {
            Some(true) => Self::Valid,
            Some(false) => Self::Invalid,
            None => Self::Unknown,
        }
    }
}

/// Snapshot of a field another field is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerField {
    /// Display name, used in messages.
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub validity: Validity,
}

impl PeerField {
    /// A peer whose validity is not known yet.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            validity: Validity::Unknown,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_validity(mut self, validity: Validity) -> Self {
        self.validity = validity;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn valid(self) -> Self {
        self.with_validity(Validity::Valid)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn invalid(self) -> Self {
        self.with_validity(Validity::Invalid)
    }
}

// ============================================================================
// FIELD CONTEXT
// ============================================================================

/// Everything a rule may read about one field.
///
/// # Examples
///
/// ```rust,ignore
/// use formrule_validator::context::{FieldContext, PeerField};
///
/// let confirm = FieldContext::text("hunter2")
///     .with_name("confirm")
///     .with_option("equalto", "#password")
///     .with_peer("#password", PeerField::new("password", "hunter2").valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldContext {
    pub name: Option<String>,
    pub value: FieldValue,
    pub control: ControlKind,
    pub options: RuleOptions,
    peers: HashMap<String, PeerField>,
}

impl FieldContext {
    /// A field with the given value and control kind.
    pub fn new(value: impl Into<FieldValue>, control: ControlKind) -> Self {
        Self {
            value: value.into(),
            control,
            ..Self::default()
        }
    }

    /// A text input.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()), ControlKind::Text)
    }

    /// A field with no value.
    pub fn absent() -> Self {
        Self::default()
    }

    /// A checkbox or radio group with the given items checked.
    pub fn checked<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(collect(items), ControlKind::Checkable)
    }

    /// A select with the given options selected.
    pub fn selected<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(collect(items), ControlKind::Select)
    }

    /// A file input with the given file names attached.
    pub fn files<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(collect(names), ControlKind::File)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_control(mut self, control: ControlKind) -> Self {
        self.control = control;
        self
    }

    /// Replaces the options bag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets a single option.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Makes a peer field resolvable under `reference`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_peer(mut self, reference: impl Into<String>, peer: PeerField) -> Self {
        self.peers.insert(reference.into(), peer);
        self
    }

    /// Resolves a peer reference.
    ///
    /// Tries the reference verbatim, then without a leading `#`, so both
    /// `"#password"` and `"password"` find a peer registered as `"password"`.
    pub fn peer(&self, reference: &str) -> Option<&PeerField> {
        self.peers
            .get(reference)
            .or_else(|| self.peers.get(reference.strip_prefix('#')?))
    }
}

fn collect<I, S>(items: I) -> FieldValue
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FieldValue::List(items.into_iter().map(Into::into).collect())
}
