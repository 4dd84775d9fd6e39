use std::collections::BTreeSet;

use conjuga_catalog::Catalog;
use conjuga_core::errors::{CatalogError, ConjugaError};
use conjuga_core::models::{PronounSlot, VerbTense};

#[test]
fn builtin_catalog_loads_every_verb_and_tense() {
    let catalog = Catalog::builtin().unwrap();
    let verbs: BTreeSet<&str> = catalog.pairs().map(|p| p.verb.as_str()).collect();
    assert_eq!(verbs.len(), 40);
    assert_eq!(catalog.len(), 40 * 6);
    for item in catalog.items() {
        assert!(item.forms.iter().all(|f| !f.is_empty()), "{}", item.pair());
    }
}

#[test]
fn builtin_catalog_forms_follow_slot_order() {
    let catalog = Catalog::builtin().unwrap();
    let ser = catalog.get("ser", "presente").unwrap();
    assert_eq!(ser.form(PronounSlot::FirstSingular), "sou");
    assert_eq!(ser.form(PronounSlot::ThirdPlural), "são");

    let por = catalog.get("pôr", "presente").unwrap();
    assert_eq!(por.form(PronounSlot::ThirdSingular), "põe");
}

#[test]
fn tense_display_names() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.tense_name("presente"), "Presente do Indicativo");
    assert_eq!(catalog.tense_name("subjuntivo_futuro"), "Futuro do Subjuntivo");
    assert_eq!(catalog.tense_name("unknown"), "unknown");
}

#[test]
fn lookup_reports_not_found() {
    let catalog = Catalog::builtin().unwrap();
    let err = catalog.lookup("falar", "condicional").unwrap_err();
    assert!(matches!(err, ConjugaError::NotFound { .. }));
    assert!(catalog.lookup("falar", "presente").is_ok());
    assert!(catalog.contains(&VerbTense::new("ir", "presente")));
}

#[test]
fn rejects_wrong_form_count() {
    let source = r#"
[tenses]
presente = "Presente"

[verbs.falar]
presente = ["falo", "fala", "falamos"]
"#;
    let err = Catalog::from_toml(source).unwrap_err();
    assert_eq!(
        err,
        CatalogError::WrongFormCount {
            verb: "falar".into(),
            tense: "presente".into(),
            count: 3,
            expected: 4,
        }
    );
}

#[test]
fn rejects_tense_without_display_name() {
    let source = r#"
[tenses]
presente = "Presente"

[verbs.falar]
futuro = ["falarei", "falará", "falaremos", "falarão"]
"#;
    assert!(matches!(
        Catalog::from_toml(source),
        Err(CatalogError::UnknownTense { .. })
    ));
}

#[test]
fn rejects_empty_catalog() {
    assert_eq!(
        Catalog::from_toml("[tenses]\npresente = \"Presente\"\n").unwrap_err(),
        CatalogError::Empty
    );
}

#[test]
fn single_pair_catalog() {
    let source = r#"
[tenses]
presente = "Presente do Indicativo"

[verbs.falar]
presente = ["falo", "fala", "falamos", "falam"]
"#;
    let catalog = Catalog::from_toml(source).unwrap();
    let pairs: Vec<_> = catalog.pairs().cloned().collect();
    assert_eq!(pairs, vec![VerbTense::new("falar", "presente")]);
}
