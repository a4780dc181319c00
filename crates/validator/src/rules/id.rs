//! Rule identifiers.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::keys;

/// Identifies a rule in the registry.
///
/// Parsing never fails: names that are not built in become
/// [`RuleId::Custom`]. Whether an id can actually be evaluated is the
/// registry's call.
///
/// # Examples
///
/// ```rust,ignore
/// use formrule_validator::rules::RuleId;
///
/// assert_eq!("equalto".parse::<RuleId>().unwrap(), RuleId::EqualTo);
/// assert_eq!(RuleId::from("isbn"), RuleId::custom("isbn"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleId {
    Required,
    Number,
    Digits,
    Name,
    Username,
    Pass,
    StrongPass,
    Email,
    Phone,
    Zip,
    Url,
    Min,
    Max,
    Date,
    Dob,
    Exclude,
    EqualTo,
    Extension,
    /// A rule registered at runtime.
    Custom(Cow<'static, str>),
}

impl RuleId {
    /// Every built-in rule, in catalog order.
    pub const BUILTIN: [Self; 18] = [
        Self::Required,
        Self::Number,
        Self::Digits,
        Self::Name,
        Self::Username,
        Self::Pass,
        Self::StrongPass,
        Self::Email,
        Self::Phone,
        Self::Zip,
        Self::Url,
        Self::Min,
        Self::Max,
        Self::Date,
        Self::Dob,
        Self::Exclude,
        Self::EqualTo,
        Self::Extension,
    ];

    /// Creates an id from a name, resolving built-in names.
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self::builtin(&name).unwrap_or(Self::Custom(name))
    }

    /// Looks up a built-in rule by name.
    pub fn builtin(name: &str) -> Option<Self> {
        Self::BUILTIN.into_iter().find(|id| id.as_str() == name)
    }

    /// The rule's name, as used in filter lists and catalogs.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => keys::REQUIRED,
            Self::Number => keys::NUMBER,
            Self::Digits => keys::DIGITS,
            Self::Name => keys::NAME,
            Self::Username => keys::USERNAME,
            Self::Pass => keys::PASS,
            Self::StrongPass => keys::STRONG_PASS,
            Self::Email => keys::EMAIL,
            Self::Phone => keys::PHONE,
            Self::Zip => keys::ZIP,
            Self::Url => keys::URL,
            Self::Min => keys::MIN,
            Self::Max => keys::MAX,
            Self::Date => keys::DATE,
            Self::Dob => keys::DOB,
            Self::Exclude => keys::EXCLUDE,
            Self::EqualTo => keys::EQUAL_TO,
            Self::Extension => keys::EXTENSION,
            Self::Custom(name) => name,
        }
    }

    /// Returns `true` for rules shipped with the crate.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Message keys the rule renders besides its own id.
    ///
    /// Option controls get their own wording for `min`, `max` and `exclude`.
    pub fn variant_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Min => &[keys::MIN_OPTION],
            Self::Max => &[keys::MAX_OPTION],
            Self::Exclude => &[keys::EXCLUDE_OPTION],
            _ => &[],
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for RuleId {
    fn from(name: &str) -> Self {
        Self::builtin(name).unwrap_or_else(|| Self::Custom(Cow::Owned(name.to_owned())))
    }
}

impl From<String> for RuleId {
    fn from(name: String) -> Self {
        Self::custom(name)
    }
}

impl From<RuleId> for String {
    fn from(id: RuleId) -> Self {
        match id {
            RuleId::Custom(name) => name.into_owned(),
            other => other.as_str().to_owned(),
        }
    }
}
