//! Prelude module for convenient imports.
//!
//! Provides a single `use formrule_validator::prelude::*;` import that brings
//! in the registry, chains, field context and result types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formrule_validator::prelude::*;
//!
//! let registry = RuleRegistry::new();
//! let field = FieldContext::checked(["a"]).with_option("min", 2);
//! let eval = registry.evaluate(&RuleId::Min, &field)?;
//! assert_eq!(eval.message, "Check at least <strong>2</strong> options.");
//! ```

// ============================================================================
// FOUNDATION: Results and errors
// ============================================================================

pub use crate::foundation::{ConfigError, ConfigResult, Evaluation, ValidationError};

// ============================================================================
// RULES: Identifiers, definitions, registry
// ============================================================================

pub use crate::chain::{ChainOutcome, RuleChain};
pub use crate::registry::{Override, RuleRegistry};
pub use crate::rules::{DateFormat, RuleDefinition, RuleId, RuleInput};

// ============================================================================
// INPUT: Field context and options
// ============================================================================

pub use crate::catalog::MessageCatalog;
pub use crate::context::{ControlKind, FieldContext, FieldValue, PeerField, Validity};
pub use crate::options::RuleOptions;
