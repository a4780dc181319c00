//! Loading field options and a replacement message catalog from JSON

use formrule_validator::prelude::*;

const GERMAN: &str = r#"{
    "locale": "de",
    "messages": {
        "required": "Dieses Feld ist erforderlich.",
        "number": "Muss eine Zahl sein.",
        "digits": "Nur Ziffern.",
        "name": "Mindestens 3 Buchstaben.",
        "username": "Ungültiger Benutzername.",
        "pass": "Ungültiges Passwort.",
        "strongpass": "Passwort zu schwach.",
        "email": "Ungültige E-Mail-Adresse.",
        "phone": "Ungültige Telefonnummer.",
        "zip": "Ungültige Postleitzahl.",
        "url": "Ungültige URL.",
        "min": "Mindestens <strong>{0}</strong> Zeichen.",
        "minOption": "Mindestens <strong>{0}</strong> Optionen wählen.",
        "max": "Höchstens <strong>{0}</strong> Zeichen.",
        "maxOption": "Höchstens <strong>{0}</strong> Optionen.",
        "date": "Ungültiges Datum. <em>(z. B. {0})</em>",
        "dob": "Ungültiges Geburtsdatum.",
        "exclude": "\"{0}\" ist nicht verfügbar.",
        "excludeOption": "{0}",
        "equalto": "Muss mit <strong>\"{0}\"</strong> übereinstimmen",
        "extension": "Ungültige Dateiendung. <em>(z. B. \"{0}\")</em>"
    }
}"#;

fn main() -> Result<(), ConfigError> {
    let registry = RuleRegistry::new();
    let options = RuleOptions::from_json(r#"{"date": "dd.mm.yyyy"}"#)?;
    let field = FieldContext::text("31.02.2024").with_options(options);

    let eval = registry.evaluate(&RuleId::Date, &field)?;
    println!("[{}] {}", registry.catalog().locale(), eval);

    registry.set_locale(MessageCatalog::from_json(GERMAN)?)?;
    let eval = registry.evaluate(&RuleId::Date, &field)?;
    println!("[{}] {}", registry.catalog().locale(), eval);

    Ok(())
}
