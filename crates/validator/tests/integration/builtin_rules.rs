//! The built-in rule set, evaluated through the registry.

use chrono::{Datelike, Local};
use formrule_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> RuleRegistry {
    RuleRegistry::new()
}

fn check(registry: &RuleRegistry, rule: RuleId, field: &FieldContext) -> Evaluation {
    registry.evaluate(&rule, field).unwrap()
}

// ============================================================================
// REQUIRED
// ============================================================================

#[rstest]
#[case(FieldContext::text(""), false)]
#[case(FieldContext::text("   "), false)]
#[case(FieldContext::absent(), false)]
#[case(FieldContext::checked(Vec::<String>::new()), false)]
#[case(FieldContext::text("x"), true)]
#[case(FieldContext::checked(["yes"]), true)]
fn required(registry: RuleRegistry, #[case] field: FieldContext, #[case] expected: bool) {
    let eval = check(&registry, RuleId::Required, &field);
    assert_eq!(eval.valid, expected);
    assert_eq!(eval.message, "This field is required.");
}

// ============================================================================
// PATTERNS
// ============================================================================

#[rstest]
#[case("user@gmail.com", true)]
#[case("user@", false)]
#[case("userexample.com", false)]
fn email(registry: RuleRegistry, #[case] value: &str, #[case] expected: bool) {
    let eval = check(&registry, RuleId::Email, &FieldContext::text(value));
    assert_eq!(eval.valid, expected);
}

#[rstest]
#[case("33245", true)]
#[case("33245-0003", true)]
#[case("3324", false)]
#[case("33245-03", false)]
fn zip(registry: RuleRegistry, #[case] value: &str, #[case] expected: bool) {
    let eval = check(&registry, RuleId::Zip, &FieldContext::text(value));
    assert_eq!(eval.valid, expected);
    assert_eq!(
        eval.message,
        "Must be a valid US zip code. <em>(e.g. 33245 or 33245-0003)</em>"
    );
}

#[rstest]
#[case(RuleId::Number, "abc1", true)]
#[case(RuleId::Digits, "12a", false)]
#[case(RuleId::Name, "Ann", true)]
#[case(RuleId::Username, "j.doe_42", true)]
#[case(RuleId::Username, "1abc", false)]
#[case(RuleId::Pass, "Abcde1", true)]
#[case(RuleId::Pass, "Abcde1\nxyz", true)]
#[case(RuleId::StrongPass, "Abcdefg!", true)]
#[case(RuleId::StrongPass, ".Abcdefg1", false)]
#[case(RuleId::Phone, "555-123-4567", true)]
#[case(RuleId::Phone, "555-023-4567", true)]
#[case(RuleId::Phone, "155-123-4567", false)]
#[case(RuleId::Url, "www.google.com", true)]
#[case(RuleId::Url, "google", false)]
fn text_shapes(
    registry: RuleRegistry,
    #[case] rule: RuleId,
    #[case] value: &str,
    #[case] expected: bool,
) {
    assert_eq!(check(&registry, rule, &FieldContext::text(value)).valid, expected);
}

/// The sample inside `<em>(e.g. ...)</em>` of an English template.
fn advertised_example(template: &str) -> &str {
    let start = template.find("(e.g. ").map(|i| i + "(e.g. ".len()).unwrap();
    let end = template[start..].find(')').unwrap();
    &template[start..start + end]
}

#[rstest]
#[case(RuleId::Phone)]
#[case(RuleId::Email)]
#[case(RuleId::Url)]
fn english_examples_pass_their_own_rule(registry: RuleRegistry, #[case] rule: RuleId) {
    let catalog = registry.catalog();
    let sample = advertised_example(catalog.template_for(&rule).unwrap());
    let eval = check(&registry, rule.clone(), &FieldContext::text(sample));
    assert!(eval.valid, "{rule} rejects its own example {sample:?}");
}

// ============================================================================
// DATES
// ============================================================================

#[rstest]
#[case("02/29/2020", None, true)]
#[case("02/29/2019", None, false)]
#[case("13/01/2020", None, false)]
#[case("2020-02-29", Some("yyyy-mm-dd"), true)]
#[case("29.02.2020", Some("dd.mm.yyyy"), true)]
fn date(
    registry: RuleRegistry,
    #[case] value: &str,
    #[case] format: Option<&str>,
    #[case] expected: bool,
) {
    let mut field = FieldContext::text(value);
    if let Some(format) = format {
        field = field.with_option("date", format);
    }
    let eval = check(&registry, RuleId::Date, &field);
    assert_eq!(eval.valid, expected);
    assert_eq!(eval.args, vec![format.unwrap_or("mm/dd/yyyy").to_owned()]);
}

#[rstest]
fn dob_year_window(registry: RuleRegistry) {
    let now = Local::now().year();
    let at = |year: i32| FieldContext::text(format!("06/15/{year}"));

    assert!(!check(&registry, RuleId::Dob, &at(1899)).valid);
    assert!(check(&registry, RuleId::Dob, &at(1900)).valid);
    assert!(check(&registry, RuleId::Dob, &at(now)).valid);

    let future = check(&registry, RuleId::Dob, &at(now + 1));
    assert!(!future.valid);
    assert_eq!(future.message, "Must be a valid date of birth.");
}

// ============================================================================
// COUNTING
// ============================================================================

#[rstest]
fn min_on_checkbox_group(registry: RuleRegistry) {
    let one = FieldContext::checked(["a"]).with_option("min", 2);
    let eval = check(&registry, RuleId::Min, &one);
    assert!(!eval.valid);
    assert_eq!(eval.message, "Check at least <strong>2</strong> options.");

    let two = FieldContext::checked(["a", "b"]).with_option("min", 2);
    assert!(check(&registry, RuleId::Min, &two).valid);
}

#[rstest]
fn max_on_text(registry: RuleRegistry) {
    let field = FieldContext::text("abcdef").with_option("max", 5);
    let eval = check(&registry, RuleId::Max, &field);
    assert!(!eval.valid);
    assert_eq!(eval.message, "No more than <strong>5</strong> characters long.");
}

// ============================================================================
// CROSS-FIELD
// ============================================================================

fn confirm(value: &str, peer: PeerField) -> FieldContext {
    FieldContext::text(value)
        .with_name("confirm")
        .with_option("equalto", "#password")
        .with_peer("password", peer)
}

#[rstest]
#[case(PeerField::new("password", "Secret1").invalid(), "Secret1", false)]
#[case(PeerField::new("password", "Secret1"), "Secret1", false)]
#[case(PeerField::new("password", "Secret1").valid(), "Secret1", true)]
#[case(PeerField::new("password", "Secret1").valid(), "Secret2", false)]
fn equal_to(
    registry: RuleRegistry,
    #[case] peer: PeerField,
    #[case] value: &str,
    #[case] expected: bool,
) {
    let eval = check(&registry, RuleId::EqualTo, &confirm(value, peer));
    assert_eq!(eval.valid, expected);
    assert_eq!(
        eval.message,
        "Must be the same value as <strong>\"password\"</strong>"
    );
}

// ============================================================================
// MEMBERSHIP AND FILES
// ============================================================================

#[rstest]
fn exclude_by_control(registry: RuleRegistry) {
    let text = FieldContext::text("root").with_option("exclude", vec!["admin", "root"]);
    assert_eq!(
        check(&registry, RuleId::Exclude, &text).message,
        "\"root\" is not available."
    );

    let select = FieldContext::selected(["root"]).with_option("exclude", vec!["admin", "root"]);
    let eval = check(&registry, RuleId::Exclude, &select);
    assert!(!eval.valid);
    assert_eq!(eval.message, "root");
}

#[rstest]
#[case("photo.JPG", true)]
#[case("photo.png", true)]
#[case("photo.gif", false)]
fn extension(registry: RuleRegistry, #[case] file: &str, #[case] expected: bool) {
    let field = FieldContext::files([file]).with_option("extension", vec!["jpg", "png"]);
    assert_eq!(check(&registry, RuleId::Extension, &field).valid, expected);
}

// ============================================================================
// RESULT CONVERSION
// ============================================================================

#[rstest]
fn failed_evaluation_converts_to_validation_error(registry: RuleRegistry) {
    let field = FieldContext::text("ab").with_name("username").with_option("min", 3);
    let err = check(&registry, RuleId::Min, &field)
        .into_result()
        .unwrap_err()
        .with_field("username");

    assert_eq!(err.code, "min");
    assert_eq!(err.param(0), Some("3"));
    assert_eq!(
        err.to_string(),
        "[username] min: Must be at least <strong>3</strong> characters long."
    );
}
