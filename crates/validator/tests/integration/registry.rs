//! Registration, locale swaps and configuration errors.

use std::sync::Arc;
use std::thread;

use formrule_validator::prelude::*;
use pretty_assertions::assert_eq;

fn shouting_catalog() -> MessageCatalog {
    let english = MessageCatalog::english();
    let mut loud = MessageCatalog::new("en-XX");
    for key in english.keys() {
        let template = english.template(key).unwrap_or_default().to_uppercase();
        loud.insert(key.to_owned(), template);
    }
    loud
}

#[test]
fn unknown_rule_is_never_a_failed_evaluation() {
    let registry = RuleRegistry::new();
    let result = registry.evaluate_named("bogus", &FieldContext::text("anything"));
    assert_eq!(
        result,
        Err(ConfigError::UnknownRule {
            rule: "bogus".to_owned()
        })
    );
}

#[test]
fn every_registered_rule_has_a_template() {
    let registry = RuleRegistry::new();
    let catalog = registry.catalog();
    for id in registry.rule_ids() {
        assert!(catalog.template_for(id).is_some(), "no template for {id}");
    }
}

#[test]
fn custom_pattern_rule() {
    let mut registry = RuleRegistry::with_catalog(
        MessageCatalog::english().with_message("isbn", "Must be a 13-digit ISBN."),
    )
    .unwrap();
    registry
        .register_rule(
            RuleId::custom("isbn"),
            RuleDefinition::pattern(r"^97[89][0-9]{10}$").unwrap(),
            Override::Reject,
        )
        .unwrap();

    let ok = registry
        .evaluate_named("isbn", &FieldContext::text("9780306406157"))
        .unwrap();
    assert!(ok.valid);

    let bad = registry
        .evaluate_named("isbn", &FieldContext::text("12345"))
        .unwrap();
    assert_eq!(bad.failure_message(), Some("Must be a 13-digit ISBN."));
}

#[test]
fn custom_predicate_rule_renders_its_own_message() {
    let mut registry = RuleRegistry::with_catalog(
        MessageCatalog::english().with_message("even", "{0} is odd."),
    )
    .unwrap();
    registry
        .register_rule(
            RuleId::custom("even"),
            RuleDefinition::predicate(|input| {
                let text = input.value().as_text();
                let valid = text.parse::<u64>().is_ok_and(|n| n % 2 == 0);
                input.verdict(valid, "even", vec![text.into_owned()])
            }),
            Override::Reject,
        )
        .unwrap();

    let eval = registry
        .evaluate_named("even", &FieldContext::text("7"))
        .unwrap();
    assert!(!eval.valid);
    assert_eq!(eval.message, "7 is odd.");
}

#[test]
fn set_locale_swaps_messages() {
    let registry = RuleRegistry::new();
    registry.set_locale(shouting_catalog()).unwrap();

    let eval = registry
        .evaluate(&RuleId::Required, &FieldContext::absent())
        .unwrap();
    assert_eq!(eval.message, "THIS FIELD IS REQUIRED.");
    assert_eq!(registry.catalog().locale(), "en-XX");
}

#[test]
fn incomplete_locale_is_rejected_and_old_one_kept() {
    let registry = RuleRegistry::new();
    let partial = MessageCatalog::new("fr").with_message("required", "Ce champ est obligatoire.");

    let err = registry.set_locale(partial).unwrap_err();
    assert_eq!(err.code(), "CATALOG_INCOMPLETE");
    assert_eq!(registry.catalog().locale(), "en");

    let eval = registry
        .evaluate(&RuleId::Required, &FieldContext::absent())
        .unwrap();
    assert_eq!(eval.message, "This field is required.");
}

#[test]
fn unfillable_placeholder_is_rejected_and_old_one_kept() {
    let registry = RuleRegistry::new();
    let mut french = shouting_catalog();
    french.insert("min", "Au moins {1} caracteres.");

    match registry.set_locale(french).unwrap_err() {
        ConfigError::PlaceholderOutOfRange { key, index, supplied, .. } => {
            assert_eq!((key.as_str(), index, supplied), ("min", 1, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(registry.catalog().locale(), "en");

    let field = FieldContext::text("ab").with_option("min", 3);
    let eval = registry.evaluate(&RuleId::Min, &field).unwrap();
    assert_eq!(eval.message, "Must be at least <strong>3</strong> characters long.");
}

#[test]
fn variant_keys_are_part_of_completeness() {
    let registry = RuleRegistry::new();
    let mut catalog = MessageCatalog::new("xx");
    for id in RuleId::BUILTIN {
        catalog.insert(id.to_string(), "x");
    }
    match registry.set_locale(catalog).unwrap_err() {
        ConfigError::IncompleteCatalog { missing, .. } => {
            assert_eq!(missing, vec!["excludeOption", "maxOption", "minOption"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn readers_never_see_a_mixed_catalog() {
    let registry = Arc::new(RuleRegistry::new());
    let english = MessageCatalog::english();
    let loud = shouting_catalog();

    let field = FieldContext::checked(["a"]).with_option("min", 2);
    let quiet_message = english.render("minOption", &["2"]).unwrap();
    let loud_message = loud.render("minOption", &["2"]).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let field = field.clone();
            let (quiet, shouted) = (quiet_message.clone(), loud_message.clone());
            thread::spawn(move || {
                for _ in 0..500 {
                    let eval = registry.evaluate(&RuleId::Min, &field).unwrap();
                    assert!(eval.message == quiet || eval.message == shouted);
                }
            })
        })
        .collect();

    for i in 0..50 {
        let next = if i % 2 == 0 { loud.clone() } else { english.clone() };
        registry.set_locale(next).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
