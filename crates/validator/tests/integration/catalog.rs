//! Message catalogs loaded from JSON.

use formrule_validator::catalog::{MessageCatalog, keys, substitute};
use formrule_validator::prelude::*;
use pretty_assertions::assert_eq;

const SPANISH: &str = r#"{
    "locale": "es",
    "messages": {
        "required": "Este campo es obligatorio.",
        "number": "Debe ser un número.",
        "digits": "Solo dígitos.",
        "name": "Al menos 3 letras.",
        "username": "Nombre de usuario no válido.",
        "pass": "Contraseña no válida.",
        "strongpass": "Contraseña demasiado débil.",
        "email": "Correo no válido.",
        "phone": "Teléfono no válido.",
        "zip": "Código postal no válido.",
        "url": "URL no válida.",
        "min": "Al menos <strong>{0}</strong> caracteres.",
        "minOption": "Marque al menos <strong>{0}</strong> opciones.",
        "max": "No más de <strong>{0}</strong> caracteres.",
        "maxOption": "No más de <strong>{0}</strong> opciones.",
        "date": "Fecha no válida. <em>(p. ej. {0})</em>",
        "dob": "Fecha de nacimiento no válida.",
        "exclude": "\"{0}\" no está disponible.",
        "excludeOption": "{0}",
        "equalto": "Debe coincidir con <strong>\"{0}\"</strong>",
        "extension": "Extensión no válida. <em>(p. ej. \"{0}\")</em>"
    }
}"#;

#[test]
fn json_catalog_is_complete_and_usable() {
    let spanish = MessageCatalog::from_json(SPANISH).unwrap();
    let registry = RuleRegistry::with_catalog(spanish).unwrap();

    let field = FieldContext::text("ab").with_option("min", 3);
    let eval = registry.evaluate(&RuleId::Min, &field).unwrap();
    assert_eq!(eval.message, "Al menos <strong>3</strong> caracteres.");
}

#[test]
fn english_matches_documented_wording() {
    let en = MessageCatalog::english();
    assert_eq!(en.len(), 21);
    assert_eq!(
        en.render(keys::DATE, &["mm/dd/yyyy"]).unwrap(),
        "Must be a valid date. <em>(e.g. mm/dd/yyyy)</em>"
    );
    assert_eq!(
        en.template(keys::USERNAME),
        Some(
            "Must be at between 4 and 32 characters long and start with a letter. \
             You may use letters, numbers, underscores, and one dot (.)"
        )
    );
    assert_eq!(en.template(keys::EXCLUDE_OPTION), Some("{0}"));
}

#[test]
fn substitution_is_positional() {
    assert_eq!(
        substitute("{1} before {0}, again {1}", &["a", "b"]),
        "b before a, again b"
    );
    assert_eq!(substitute("{0} of {3}", &["one"]), "one of {3}");
}

#[test]
fn catalog_round_trips_through_json() {
    let en = MessageCatalog::english();
    let json = serde_json::to_string(&en).unwrap();
    assert_eq!(MessageCatalog::from_json(&json).unwrap(), en);
}

#[test]
fn malformed_json_is_a_catalog_error() {
    let err = MessageCatalog::from_json(r#"{"locale": "es"}"#).unwrap_err();
    assert_eq!(err.code(), "CATALOG_FORMAT");
    assert_eq!(err.category(), "catalog");
}
