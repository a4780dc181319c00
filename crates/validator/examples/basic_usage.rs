//! Basic usage example for formrule-validator

use formrule_validator::prelude::*;

fn main() -> Result<(), ConfigError> {
    let registry = RuleRegistry::new();

    // A sign-up form: each field declares its rules as one string
    let username = RuleChain::parse("required username min exclude");
    let email = RuleChain::parse("email");
    let interests = RuleChain::parse("required min");

    let fields = [
        (
            &username,
            FieldContext::text("admin")
                .with_name("username")
                .with_option("min", 4)
                .with_option("exclude", vec!["admin", "root"]),
        ),
        (&email, FieldContext::text("").with_name("email")),
        (
            &interests,
            FieldContext::checked(["rust"])
                .with_name("interests")
                .with_option("min", 2),
        ),
    ];

    for (chain, field) in &fields {
        let name = field.name.as_deref().unwrap_or("?");
        match chain.evaluate(&registry, field)? {
            ChainOutcome::Valid => println!("✓ {name}"),
            ChainOutcome::Skipped => println!("- {name} (empty, optional)"),
            ChainOutcome::Invalid(eval) => println!("✗ {name}: {}", eval.message),
        }
    }

    // Misconfiguration is an error, not a failed field
    if let Err(err) = registry.evaluate_named("bogus", &FieldContext::text("x")) {
        println!("\nconfiguration error [{}]: {err}", err.code());
    }

    Ok(())
}
