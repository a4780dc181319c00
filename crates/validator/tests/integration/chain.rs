//! Whole-field rule lists, the way a form declares them.

use formrule_validator::prelude::*;
use pretty_assertions::assert_eq;

fn signup_username(value: &str) -> FieldContext {
    FieldContext::text(value)
        .with_name("username")
        .with_options(
            RuleOptions::from_json(r#"{"min": 4, "max": 32, "exclude": ["admin", "root"]}"#)
                .unwrap(),
        )
}

#[test]
fn signup_username_chain() {
    let registry = RuleRegistry::new();
    let chain: RuleChain = "required username min max exclude".parse().unwrap();

    assert_eq!(
        chain.evaluate(&registry, &signup_username("j.doe")).unwrap(),
        ChainOutcome::Valid
    );

    let outcome = chain.evaluate(&registry, &signup_username("admin")).unwrap();
    let failure = outcome.failure().unwrap();
    assert_eq!(failure.rule, RuleId::Exclude);
    assert_eq!(failure.message, "\"admin\" is not available.");

    let outcome = chain.evaluate(&registry, &signup_username("")).unwrap();
    assert_eq!(outcome.failure().unwrap().rule, RuleId::Required);
}

#[test]
fn optional_field_is_skipped_when_empty() {
    let registry = RuleRegistry::new();
    let chain = RuleChain::parse("phone");

    assert_eq!(
        chain.evaluate(&registry, &FieldContext::text("")).unwrap(),
        ChainOutcome::Skipped
    );
    assert!(!chain
        .evaluate(&registry, &FieldContext::text("123"))
        .unwrap()
        .is_valid());
}

#[test]
fn optional_field_skips_even_without_options() {
    let registry = RuleRegistry::new();
    let chain = RuleChain::parse("min");
    assert_eq!(
        chain.evaluate(&registry, &FieldContext::absent()).unwrap(),
        ChainOutcome::Skipped
    );
}

#[test]
fn confirm_password_chain() {
    let registry = RuleRegistry::new();
    let chain = RuleChain::parse("required equalto");
    let field = FieldContext::text("Secret1")
        .with_option("equalto", "#password")
        .with_peer("password", PeerField::new("password", "Secret1").valid());

    assert!(chain.evaluate(&registry, &field).unwrap().is_valid());
}

#[test]
fn chain_from_ids() {
    let chain: RuleChain = [RuleId::Required, RuleId::Email, RuleId::Required]
        .into_iter()
        .collect();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.to_string(), "required email");
}
