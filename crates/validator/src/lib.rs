//! # formrule-validator
//!
//! Declarative validation rules for form fields, with message catalogs that
//! can be swapped at runtime.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formrule_validator::prelude::*;
//!
//! let registry = RuleRegistry::new();
//! let chain = RuleChain::parse("required username");
//!
//! let field = FieldContext::text("jdoe").with_name("login");
//! assert!(chain.evaluate(&registry, &field)?.is_valid());
//! ```
//!
//! ## Pieces
//!
//! - [`RuleRegistry`](registry::RuleRegistry): rule table plus the active
//!   [`MessageCatalog`](catalog::MessageCatalog)
//! - [`RuleChain`](chain::RuleChain): a field's rule list, with the
//!   skip-when-empty policy
//! - [`FieldContext`](context::FieldContext): everything a rule may read
//! - [`Evaluation`](foundation::Evaluation): one verdict with its message
//! - [`ConfigError`](foundation::ConfigError): the form was wired up wrong
//!
//! ## Built-in Rules
//!
//! `required`, `number`, `digits`, `name`, `username`, `pass`, `strongpass`,
//! `email`, `phone`, `zip`, `url`, `min`, `max`, `date`, `dob`, `exclude`,
//! `equalto`, `extension`. See [`rules`] for what each accepts.

pub mod catalog;
pub mod chain;
pub mod context;
pub mod foundation;
pub mod options;
pub mod prelude;
pub mod registry;
pub mod rules;
