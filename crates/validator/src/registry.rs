//! Rule registry
//!
//! Maps [`RuleId`]s to [`RuleDefinition`]s and owns the active
//! [`MessageCatalog`]. Evaluation takes `&self` and never writes anything,
//! so one registry can serve every field of every form concurrently.
//!
//! The catalog sits behind an [`ArcSwap`]. Each evaluation loads one
//! snapshot up front, so a concurrent [`RuleRegistry::set_locale`] is seen
//! either entirely or not at all.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, trace, warn};

use crate::catalog::MessageCatalog;
use crate::context::FieldContext;
use crate::foundation::{ConfigError, ConfigResult, Evaluation};
use crate::rules::{self, RuleDefinition, RuleId, RuleInput};

/// What [`RuleRegistry::register_rule`] does when the id is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Override {
    /// Fail with [`ConfigError::DuplicateRule`].
    #[default]
    Reject,
    /// Replace the existing definition.
    Replace,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Rule table plus the active message catalog.
///
/// # Examples
///
/// ```rust,ignore
/// use formrule_validator::prelude::*;
///
/// let registry = RuleRegistry::new();
/// let field = FieldContext::text("33245-0003");
/// assert!(registry.evaluate(&RuleId::Zip, &field)?.valid);
/// ```
pub struct RuleRegistry {
    rules: HashMap<RuleId, RuleDefinition>,
    catalog: ArcSwap<MessageCatalog>,
}

impl RuleRegistry {
    /// The built-in rules with the English catalog.
    pub fn new() -> Self {
        Self {
            rules: rules::builtin().into_iter().collect(),
            catalog: ArcSwap::from_pointee(MessageCatalog::english()),
        }
    }

    /// The built-in rules with another catalog.
    ///
    /// Fails if the catalog lacks a template any built-in rule needs, or
    /// uses a placeholder a rule never fills.
    pub fn with_catalog(catalog: MessageCatalog) -> ConfigResult<Self> {
        let registry = Self::new();
        catalog.ensure_complete(registry.required_keys())?;
        registry.catalog.store(Arc::new(catalog));
        Ok(registry)
    }

    /// A registry with no rules at all, for fully custom rule sets.
    pub fn empty(catalog: MessageCatalog) -> Self {
        Self {
            rules: HashMap::new(),
            catalog: ArcSwap::from_pointee(catalog),
        }
    }

    /// Adds a rule.
    ///
    /// The active catalog must already carry a template under the rule's
    /// id, so every registered rule can always render its message.
    pub fn register_rule(
        &mut self,
        id: RuleId,
        definition: RuleDefinition,
        mode: Override,
    ) -> ConfigResult<()> {
        let exists = self.rules.contains_key(&id);
        if exists && mode == Override::Reject {
            return Err(ConfigError::DuplicateRule {
                rule: id.to_string(),
            });
        }
        if self.catalog.load().template_for(&id).is_none() {
            return Err(ConfigError::MissingMessage { key: id.to_string() });
        }

        if exists {
            debug!(rule = %id, kind = definition.kind(), "overriding rule");
        } else {
            debug!(rule = %id, kind = definition.kind(), "registering rule");
        }
        self.rules.insert(id, definition);
        Ok(())
    }

    pub fn contains(&self, id: &RuleId) -> bool {
        self.rules.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn rule_ids(&self) -> Vec<&RuleId> {
        let mut ids: Vec<&RuleId> = self.rules.keys().collect();
        ids.sort();
        ids
    }

    pub fn definition(&self, id: &RuleId) -> Option<&RuleDefinition> {
        self.rules.get(id)
    }

    /// Snapshot of the active catalog.
    pub fn catalog(&self) -> Arc<MessageCatalog> {
        self.catalog.load_full()
    }

    /// Every message key a catalog must provide for this registry: each
    /// rule id plus the option-control variants.
    pub fn required_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .rules
            .keys()
            .flat_map(|id| std::iter::once(id.as_str()).chain(id.variant_keys().iter().copied()))
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Replaces the active catalog.
    ///
    /// A catalog that is incomplete, or whose templates use placeholders
    /// their rules never fill, is rejected and the previous one stays
    /// active.
    pub fn set_locale(&self, catalog: MessageCatalog) -> ConfigResult<()> {
        if let Err(err) = catalog.ensure_complete(self.required_keys()) {
            warn!(locale = catalog.locale(), error = %err, "rejected message catalog");
            return Err(err);
        }

        let to = catalog.locale().to_owned();
        let previous = self.catalog.swap(Arc::new(catalog));
        debug!(from = previous.locale(), to = %to, "switched message catalog");
        Ok(())
    }

    /// Runs one rule against one field.
    ///
    /// The registry never skips: `required` semantics for empty fields are
    /// applied by [`RuleChain`](crate::chain::RuleChain).
    pub fn evaluate(&self, id: &RuleId, field: &FieldContext) -> ConfigResult<Evaluation> {
        let definition = self.rules.get(id).ok_or_else(|| ConfigError::UnknownRule {
            rule: id.to_string(),
        })?;

        let catalog = self.catalog.load_full();
        let evaluation = definition.evaluate(&RuleInput::new(id, field, &catalog))?;

        trace!(
            rule = %id,
            field = field.name.as_deref().unwrap_or(""),
            valid = evaluation.valid,
            "evaluated rule"
        );
        Ok(evaluation)
    }

    /// [`evaluate`](Self::evaluate) with the id given by name.
    pub fn evaluate_named(&self, name: &str, field: &FieldContext) -> ConfigResult<Evaluation> {
        self.evaluate(&RuleId::from(name), field)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rule_ids())
            .field("locale", &self.catalog.load().locale())
            .finish()
    }
}
