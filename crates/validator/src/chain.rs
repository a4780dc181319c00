//! Per-field rule lists
//!
//! Forms declare a field's rules as one whitespace-separated string, e.g.
//! `"required username min"`. A [`RuleChain`] runs them in order and
//! reports the first failure.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::context::FieldContext;
use crate::foundation::{ConfigError, ConfigResult, Evaluation};
use crate::registry::RuleRegistry;
use crate::rules::RuleId;

/// Result of running a chain against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Every rule passed.
    Valid,
    /// The field is empty and not required; no rule ran.
    Skipped,
    /// The first rule that failed.
    Invalid(Evaluation),
}

impl ChainOutcome {
    /// `Valid` and `Skipped` both count as valid.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    pub fn failure(&self) -> Option<&Evaluation> {
        match self {
            Self::Invalid(evaluation) => Some(evaluation),
            Self::Valid | Self::Skipped => None,
        }
    }
}

/// Ordered, duplicate-free list of rules for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleChain {
    rules: Vec<RuleId>,
}

impl RuleChain {
    /// Builds a chain, dropping repeats but keeping first positions.
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = RuleId>,
    {
        let mut chain = Vec::new();
        for rule in rules {
            if !chain.contains(&rule) {
                chain.push(rule);
            }
        }
        Self { rules: chain }
    }

    /// Parses a whitespace-separated rule list.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split_whitespace().map(RuleId::from))
    }

    pub fn rules(&self) -> &[RuleId] {
        &self.rules
    }

    /// Returns `true` if the chain contains `required`.
    pub fn is_required(&self) -> bool {
        self.rules.contains(&RuleId::Required)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Runs the chain.
    ///
    /// Every rule must be registered, checked before anything runs. An
    /// empty field without `required` is skipped. Otherwise rules run in
    /// order and stop at the first failure.
    pub fn evaluate(
        &self,
        registry: &RuleRegistry,
        field: &FieldContext,
    ) -> ConfigResult<ChainOutcome> {
        if let Some(unknown) = self.rules.iter().find(|rule| !registry.contains(rule)) {
            return Err(ConfigError::UnknownRule {
                rule: unknown.to_string(),
            });
        }

        if field.value.is_blank() && !self.is_required() {
            return Ok(ChainOutcome::Skipped);
        }

        for rule in &self.rules {
            let evaluation = registry.evaluate(rule, field)?;
            if !evaluation.valid {
                return Ok(ChainOutcome::Invalid(evaluation));
            }
        }
        Ok(ChainOutcome::Valid)
    }
}

impl FromStr for RuleChain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl FromIterator<RuleId> for RuleChain {
    fn from_iter<I: IntoIterator<Item = RuleId>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
