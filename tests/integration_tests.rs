//! Integration tests for translation lookup and the fallback rules

use interlocale::{translation_table, LocaleId, TranslationContext};

/// Context loaded the way the crate is meant to be used at startup.
fn create_test_context() -> TranslationContext {
    let mut ctx = TranslationContext::new();
    ctx.add_locale("pt_BR.UTF-8", translation_table! { "hello" => "olá" })
        .expect("pt_BR should parse");
    ctx
}

#[test]
fn test_exact_locale_lookup() {
    let ctx = create_test_context();
    assert_eq!(ctx.get_from_locale("hello", "pt_BR.UTF-8").unwrap(), "olá");
}

#[test]
fn test_fallback_by_region() {
    let ctx = create_test_context();
    // No pt_PT table: any region of "pt" answers.
    assert_eq!(ctx.get_from_locale("hello", "pt_PT.UTF-8").unwrap(), "olá");
}

#[test]
fn test_no_fallback_across_languages() {
    let ctx = create_test_context();
    // No "en" group at all: the key comes back, and that is not an error.
    assert_eq!(ctx.get_from_locale("hello", "en_US.UTF-8").unwrap(), "hello");
}

#[test]
fn test_missing_key_returns_key() {
    let ctx = create_test_context();
    assert_eq!(ctx.get_from_locale("farewell", "pt_BR").unwrap(), "farewell");
}

#[test]
fn test_overwrite_replaces_whole_table() {
    let mut ctx = create_test_context();
    ctx.add_locale("pt_BR", translation_table! { "bye" => "tchau" })
        .unwrap();

    // The first table is gone wholesale, not merged.
    assert_eq!(ctx.get_from_locale("hello", "pt_BR").unwrap(), "hello");
    assert_eq!(ctx.get_from_locale("bye", "pt_BR").unwrap(), "tchau");
}

#[test]
fn test_preferred_locale_happy_path() {
    let mut ctx = create_test_context();
    ctx.set_preferred_locale("pt_BR").unwrap();
    assert_eq!(ctx.get("hello"), "olá");
}

#[test]
fn test_preferred_locale_region_fallback() {
    let mut ctx = create_test_context();
    ctx.set_preferred_locale("pt_PT").unwrap();
    assert_eq!(ctx.get("hello"), "olá");
}

#[test]
fn test_get_without_preference_returns_key() {
    let ctx = create_test_context();
    assert_eq!(ctx.get("hello"), "hello");
}

#[test]
fn test_empty_text_is_treated_as_absent() {
    let mut ctx = TranslationContext::new();
    ctx.add_locale("pt_BR", translation_table! { "bye" => "" })
        .unwrap();
    ctx.add_locale("pt_PT", translation_table! { "bye" => "tchau" })
        .unwrap();

    // Exact table hit on an empty value: the key, not "".
    assert_eq!(ctx.get_from_locale("bye", "pt_BR").unwrap(), "bye");

    // The group-wide scan skips the empty value wherever it starts.
    assert_eq!(ctx.get_from_locale("bye", "pt_XX").unwrap(), "tchau");

    // The preferred path skips it too.
    ctx.set_preferred_locale("pt_BR").unwrap();
    assert_eq!(ctx.get("bye"), "tchau");
}

#[test]
fn test_exact_table_does_not_consult_siblings() {
    let mut ctx = TranslationContext::new();
    ctx.add_locale("pt_BR", translation_table! { "bye" => "tchau" })
        .unwrap();
    ctx.add_locale("pt_PT", translation_table! { "hello" => "olá" })
        .unwrap();

    // pt_BR has a table, so a missing key stops there...
    assert_eq!(ctx.get_from_locale("hello", "pt_BR").unwrap(), "hello");
    // ...while a region with no table at all scans the whole group.
    assert_eq!(ctx.get_from_locale("hello", "pt_XX").unwrap(), "olá");
}

#[test]
fn test_parse_error_stores_nothing() {
    let mut ctx = TranslationContext::new();
    let result = ctx.add_locale("bogus", translation_table! { "hello" => "x" });
    assert!(result.is_err());
    assert!(ctx.languages().is_empty());
}

#[test]
fn test_multiple_languages_coexist() {
    let mut ctx = create_test_context();
    ctx.add_locale("eo_IN.UTF-8", translation_table! { "hello" => "saluton" })
        .unwrap();

    let mut languages = ctx.languages();
    languages.sort_unstable();
    assert_eq!(languages, ["eo", "pt"]);
    assert_eq!(ctx.regions("pt"), ["BR"]);
    assert!(ctx.regions("en").is_empty());

    assert_eq!(ctx.get_from_locale("hello", "eo_IN").unwrap(), "saluton");
    assert_eq!(ctx.get_from_locale("hello", "pt_BR").unwrap(), "olá");
}

#[test]
fn test_typed_surface_matches_string_surface() {
    let mut ctx = TranslationContext::new();
    let id: LocaleId = "pt_BR.UTF-8".parse().unwrap();
    assert_eq!(id.language(), "pt");
    assert_eq!(id.region(), "BR");

    ctx.insert(id.clone(), translation_table! { "hello" => "olá" });
    assert_eq!(ctx.lookup("hello", &id), "olá");
    assert_eq!(ctx.get_from_locale("hello", "pt_BR").unwrap(), "olá");

    ctx.set_preferred(id);
    assert_eq!(ctx.get("hello"), "olá");
}

#[test]
fn test_error_carries_offending_input() {
    let ctx = create_test_context();
    let err = ctx.get_from_locale("hello", "portuguese").unwrap_err();
    assert!(err.to_string().contains("portuguese"));
    assert_eq!(err.input(), "portuguese");
}
