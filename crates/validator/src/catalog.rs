//! Message catalog
//!
//! Maps message keys to templates with positional `{n}` placeholders. A
//! catalog is one locale; swapping locales means replacing the whole catalog
//! (see [`RuleRegistry::set_locale`](crate::registry::RuleRegistry::set_locale)),
//! never editing entries in place.
//!
//! Templates may carry inline markup such as `<strong>`. It is passed through
//! untouched.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formrule_validator::catalog::{MessageCatalog, keys};
//!
//! let en = MessageCatalog::english();
//! assert_eq!(
//!     en.render(keys::MIN, &["3"]).unwrap(),
//!     "Must be at least <strong>3</strong> characters long.",
//! );
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;
use crate::rules::RuleId;

/// Message keys used by the built-in rules.
pub mod keys {
    pub const REQUIRED: &str = "required";
    pub const NUMBER: &str = "number";
    pub const DIGITS: &str = "digits";
    pub const NAME: &str = "name";
    pub const USERNAME: &str = "username";
    pub const PASS: &str = "pass";
    pub const STRONG_PASS: &str = "strongpass";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ZIP: &str = "zip";
    pub const URL: &str = "url";
    pub const MIN: &str = "min";
    pub const MIN_OPTION: &str = "minOption";
    pub const MAX: &str = "max";
    pub const MAX_OPTION: &str = "maxOption";
    pub const DATE: &str = "date";
    pub const DOB: &str = "dob";
    pub const EXCLUDE: &str = "exclude";
    pub const EXCLUDE_OPTION: &str = "excludeOption";
    pub const EQUAL_TO: &str = "equalto";
    pub const EXTENSION: &str = "extension";

    /// Number of positional arguments the built-in rules pass with `key`.
    ///
    /// `None` for keys the crate does not render itself, such as custom
    /// rule ids; their templates are not checked.
    pub fn arity(key: &str) -> Option<usize> {
        match key {
            MIN | MIN_OPTION | MAX | MAX_OPTION | DATE | EXCLUDE | EXCLUDE_OPTION | EQUAL_TO
            | EXTENSION => Some(1),
            REQUIRED | NUMBER | DIGITS | NAME | USERNAME | PASS | STRONG_PASS | EMAIL | PHONE
            | ZIP | URL | DOB => Some(0),
            _ => None,
        }
    }
}

const ENGLISH: &[(&str, &str)] = &[
    (keys::REQUIRED, "This field is required."),
    (keys::NUMBER, "Must be a number."),
    (keys::DIGITS, "Must be only digits."),
    (
        keys::NAME,
        "Must be at least 3 characters long, and must only contain letters.",
    ),
    (
        keys::USERNAME,
        "Must be at between 4 and 32 characters long and start with a letter. You may use letters, numbers, underscores, and one dot (.)",
    ),
    (
        keys::PASS,
        "Must be at least 6 characters long, and contain at least one number, one uppercase and one lowercase letter.",
    ),
    (
        keys::STRONG_PASS,
        "Must be at least 8 characters long and contain at least one uppercase and one lowercase letter and one number or special character.",
    ),
    (
        keys::EMAIL,
        "Must be a valid e-mail address. <em>(e.g. user@gmail.com)</em>",
    ),
    (
        keys::PHONE,
        "Must be a valid US phone number. <em>(e.g. 555-123-4567)</em>",
    ),
    (
        keys::ZIP,
        "Must be a valid US zip code. <em>(e.g. 33245 or 33245-0003)</em>",
    ),
    (keys::URL, "Must be a valid URL. <em>(e.g. www.google.com)</em>"),
    (keys::MIN, "Must be at least <strong>{0}</strong> characters long."),
    (keys::MIN_OPTION, "Check at least <strong>{0}</strong> options."),
    (keys::MAX, "No more than <strong>{0}</strong> characters long."),
    (keys::MAX_OPTION, "No more than <strong>{0}</strong> options allowed."),
    (keys::DATE, "Must be a valid date. <em>(e.g. {0})</em>"),
    (keys::DOB, "Must be a valid date of birth."),
    (keys::EXCLUDE, "\"{0}\" is not available."),
    (keys::EXCLUDE_OPTION, "{0}"),
    (
        keys::EQUAL_TO,
        "Must be the same value as <strong>\"{0}\"</strong>",
    ),
    (
        keys::EXTENSION,
        "File(s) must have a valid extension. <em>(e.g. \"{0}\")</em>",
    ),
];

// ============================================================================
// CATALOG
// ============================================================================

/// Templates for one locale.
///
/// Deserializes from `{"locale": "fr", "messages": {"required": "...", ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    locale: Cow<'static, str>,
    messages: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl MessageCatalog {
    /// Creates an empty catalog for a locale.
    pub fn new(locale: impl Into<Cow<'static, str>>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// The built-in English catalog.
    pub fn english() -> Self {
        Self {
            locale: Cow::Borrowed("en"),
            messages: ENGLISH
                .iter()
                .map(|&(key, template)| (Cow::Borrowed(key), Cow::Borrowed(template)))
                .collect(),
        }
    }

    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::CatalogFormat {
            reason: e.to_string(),
        })
    }

    /// Adds or replaces a template while building a catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(
        mut self,
        key: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(key, template);
        self
    }

    /// Adds or replaces a template.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) {
        self.messages.insert(key.into(), template.into());
    }

    /// Locale tag of this catalog.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Template for a message key.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(AsRef::as_ref)
    }

    /// Template keyed by a rule's own id.
    pub fn template_for(&self, rule: &RuleId) -> Option<&str> {
        self.template(rule.as_str())
    }

    /// Renders a template with positional arguments.
    pub fn render<S: AsRef<str>>(&self, key: &str, args: &[S]) -> Result<String, ConfigError> {
        self.template(key)
            .map(|template| substitute(template, args))
            .ok_or_else(|| ConfigError::MissingMessage {
                key: key.to_owned(),
            })
    }

    /// Returns `true` if a template exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Keys from `required` that have no template, in the order given.
    pub fn missing_keys<'a, I>(&self, required: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        required
            .into_iter()
            .filter(|key| !self.contains(key))
            .map(str::to_owned)
            .collect()
    }

    /// Fails unless every key in `required` has a template, and every
    /// built-in template only uses placeholders its rule fills in.
    pub fn ensure_complete<'a, I>(&self, required: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let required: Vec<&str> = required.into_iter().collect();
        let missing = self.missing_keys(required.iter().copied());
        if !missing.is_empty() {
            return Err(ConfigError::IncompleteCatalog {
                locale: self.locale.to_string(),
                missing,
            });
        }

        for key in required {
            let (Some(template), Some(supplied)) = (self.template(key), keys::arity(key)) else {
                continue;
            };
            if let Some(index) = placeholders(template).find(|&index| index >= supplied) {
                return Err(ConfigError::PlaceholderOutOfRange {
                    locale: self.locale.to_string(),
                    key: key.to_owned(),
                    index,
                    supplied,
                });
            }
        }
        Ok(())
    }

    /// Iterates over all message keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

// ============================================================================
// SUBSTITUTION
// ============================================================================

/// Parses a `{digits}` placeholder at the start of `after`, which follows
/// an opening brace. Returns the index and the placeholder's length past
/// the brace.
fn placeholder_at(after: &str) -> Option<(usize, usize)> {
    let digits = after.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || after.as_bytes().get(digits) != Some(&b'}') {
        return None;
    }
    after[..digits].parse().ok().map(|index| (index, digits + 1))
}

/// Indices of every `{n}` placeholder in `template`, in order.
pub fn placeholders(template: &str) -> impl Iterator<Item = usize> + '_ {
    template
        .match_indices('{')
        .filter_map(|(open, _)| placeholder_at(&template[open + 1..]))
        .map(|(index, _)| index)
}

/// Replaces every `{i}` in `template` with `args[i]`.
///
/// Placeholders with an out-of-range index, or that are not `{` digits `}`,
/// stay in the output literally. Substituted text is not scanned again.
pub fn substitute<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let arg = placeholder_at(after)
            .and_then(|(index, len)| args.get(index).map(|arg| (arg, len)));

        match arg {
            Some((arg, len)) => {
                out.push_str(arg.as_ref());
                rest = &after[len..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================
