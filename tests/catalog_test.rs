//! Catalog resolution tests against in-memory loaders

mod helpers;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

use errata::{ArrayLoader, Catalog, ErrataError, Line, MessageSelector, PluralRules, Replacements};
use errata::plural::rules::SINGLE;
use helpers::*;
use serde_json::json;

fn none() -> Replacements {
    Replacements::new()
}

#[test]
fn test_missing_key_returns_key() {
    init_test_env();
    let catalog = Catalog::new(ArrayLoader::new(), "en");

    assert_eq!(catalog.error("auth.failed", &none(), None).unwrap(), "auth.failed");
    assert_eq!(
        catalog.error("billing::invoice.late", &none(), None).unwrap(),
        "billing::invoice.late"
    );
    assert!(!catalog.has("auth.failed", None, true).unwrap());
    assert!(!catalog.has_for_locale("auth.failed", Some("en")).unwrap());
}

#[test]
fn test_namespaced_replacement_with_case_variants() {
    init_test_env();
    let loader = CountingLoader::new().with_messages(
        "en",
        "greetings",
        json!({"hello": "Hello :name", "shout": "HEY :NAME", "polite": "Dear :Name"}),
        Some("app"),
    );
    let catalog = Catalog::new(loader, "en");
    let replace = replacements(&[("name", "ann")]);

    assert_eq!(catalog.error("app::greetings.hello", &replace, None).unwrap(), "Hello ann");
    assert_eq!(catalog.error("app::greetings.shout", &replace, None).unwrap(), "HEY ANN");
    assert_eq!(catalog.error("app::greetings.polite", &replace, None).unwrap(), "Dear Ann");
    assert!(catalog.has("app::greetings.hello", None, true).unwrap());
}

#[test]
fn test_longest_replacement_key_wins() {
    let loader = CountingLoader::new().with_messages(
        "en",
        "user",
        json!({"label": ":name_full :name"}),
        None,
    );
    let catalog = Catalog::new(loader, "en");
    let replace = replacements(&[("name", "X"), ("name_full", "Y")]);

    assert_eq!(catalog.error("user.label", &replace, None).unwrap(), "Y X");
}

#[test]
fn test_fallback_locale() {
    let loader = CountingLoader::new().with_messages(
        "en",
        "auth",
        json!({"throttle": "Too many attempts."}),
        None,
    );
    let mut catalog = Catalog::new(loader, "en");
    catalog.set_fallback("en");

    assert_eq!(
        catalog.get("auth.throttle", &none(), Some("fr"), true).unwrap(),
        "Too many attempts."
    );
    assert_eq!(catalog.get("auth.throttle", &none(), Some("fr"), false).unwrap(), "auth.throttle");
    assert!(catalog.has("auth.throttle", Some("fr"), true).unwrap());
    assert!(!catalog.has_for_locale("auth.throttle", Some("fr")).unwrap());
    assert!(catalog.has_for_locale("auth.throttle", Some("en")).unwrap());
}

#[test]
fn test_requested_locale_wins_over_fallback() {
    let loader = CountingLoader::new()
        .with_messages("en", "auth", json!({"failed": "Failed"}), None)
        .with_messages("nl", "auth", json!({"failed": "Mislukt"}), None);
    let mut catalog = Catalog::new(loader, "en");
    catalog.set_fallback("en");

    assert_eq!(catalog.error("auth.failed", &none(), Some("nl")).unwrap(), "Mislukt");
    assert_eq!(catalog.error("auth.failed", &none(), None).unwrap(), "Failed");
}

#[test]
fn test_choice_default_rule() {
    let loader = CountingLoader::new().with_messages(
        "en",
        "fruit",
        json!({
            "apples": "one apple|many apples",
            "counted": "{0} no apples|{1} one apple|[2,*] :count apples"
        }),
        None,
    );
    let catalog = Catalog::new(loader, "en");

    assert_eq!(catalog.choice("fruit.apples", 0, &none(), None).unwrap(), "many apples");
    assert_eq!(catalog.choice("fruit.apples", 1, &none(), None).unwrap(), "one apple");
    assert_eq!(catalog.choice("fruit.apples", 5, &none(), None).unwrap(), "many apples");

    assert_eq!(catalog.choice("fruit.counted", 0, &none(), None).unwrap(), "no apples");
    assert_eq!(catalog.choice("fruit.counted", 1, &none(), None).unwrap(), "one apple");
    assert_eq!(catalog.choice("fruit.counted", 10, &none(), None).unwrap(), "10 apples");
    assert_eq!(catalog.error_choice("fruit.counted", 10, &none(), None).unwrap(), "10 apples");
}

#[test]
fn test_choice_counts_collections_and_keeps_other_replacements() {
    let loader = CountingLoader::new().with_messages(
        "en",
        "upload",
        json!({"failed": ":user could not upload :count file|:user could not upload :count files"}),
        None,
    );
    let catalog = Catalog::new(loader, "en");
    let replace = replacements(&[("user", "sam")]);

    let files = vec!["a.txt", "b.txt"];
    assert_eq!(
        catalog.choice("upload.failed", &files, &replace, None).unwrap(),
        "sam could not upload 2 files"
    );
    assert_eq!(
        catalog.choice("upload.failed", [0u8; 1], &replace, None).unwrap(),
        "sam could not upload 1 file"
    );
}

#[test]
fn test_choice_uses_locale_rules() {
    let loader = CountingLoader::new().with_messages(
        "ru",
        "files",
        json!({"count": ":count файл|:count файла|:count файлов"}),
        None,
    );
    let catalog = Catalog::new(loader, "ru");

    assert_eq!(catalog.choice("files.count", 1, &none(), None).unwrap(), "1 файл");
    assert_eq!(catalog.choice("files.count", 3, &none(), None).unwrap(), "3 файла");
    assert_eq!(catalog.choice("files.count", 11, &none(), None).unwrap(), "11 файлов");
    assert_eq!(catalog.choice("files.count", 21, &none(), None).unwrap(), "21 файл");
}

#[test]
fn test_custom_selector() {
    let loader =
        CountingLoader::new().with_messages("en", "cart", json!({"items": "first|second"}), None);
    let mut catalog = Catalog::new(loader, "en");
    catalog.set_selector(MessageSelector::with_rules(PluralRules::empty(SINGLE)));

    assert_eq!(catalog.choice("cart.items", 42, &none(), None).unwrap(), "first");
    assert_eq!(catalog.selector().rules().index("en", 42), 0);
}

#[test]
fn test_choice_missing_key_returns_key() {
    let catalog = Catalog::new(ArrayLoader::new(), "en");
    assert_eq!(catalog.choice("cart.items", 3, &none(), None).unwrap(), "cart.items");
}

#[test]
fn test_choice_on_empty_line_is_error() {
    let loader = CountingLoader::new().with_messages("en", "cart", json!({"items": ""}), None);
    let catalog = Catalog::new(loader, "en");

    let err = catalog.choice("cart.items", 3, &none(), None).unwrap_err();
    assert!(matches!(err, ErrataError::NoPluralForm { number: 3, .. }));
}

#[test]
fn test_group_loaded_once() {
    let loader =
        CountingLoader::new().with_messages("en", "auth", json!({"failed": "Failed"}), None);
    let calls = loader.calls();
    let catalog = Catalog::new(loader, "en");

    catalog.error("auth.failed", &none(), None).unwrap();
    catalog.error("auth.failed", &none(), None).unwrap();
    catalog.error("auth.other", &none(), None).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_group_cached() {
    let loader = CountingLoader::new();
    let calls = loader.calls();
    let catalog = Catalog::new(loader, "en");

    assert_eq!(catalog.error("missing.key", &none(), None).unwrap(), "missing.key");
    assert_eq!(catalog.error("missing.key", &none(), None).unwrap(), "missing.key");

    assert!(catalog.is_loaded("*", "missing", "en"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fallback_chain_loads_each_locale_once() {
    let loader = CountingLoader::new();
    let calls = loader.calls();
    let mut catalog = Catalog::new(loader, "de");
    catalog.set_fallback("en");

    for _ in 0..3 {
        catalog.error("auth.failed", &none(), None).unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_add_lines_skips_loader() {
    let loader = CountingLoader::new();
    let calls = loader.calls();
    let catalog = Catalog::new(loader, "en");

    catalog.add_lines(
        to_messages(json!({"group.item": "value", "group.nested.deep": "Deep :x"})),
        "en",
        Some("*"),
    );

    assert_eq!(catalog.get("group.item", &none(), Some("en"), true).unwrap(), "value");
    assert_eq!(
        catalog.get("group.nested.deep", &replacements(&[("x", "y")]), Some("en"), true).unwrap(),
        "Deep y"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_add_lines_namespaced() {
    let catalog = Catalog::new(ArrayLoader::new(), "en");
    catalog.add_lines(to_messages(json!({"invoice.late": "Late"})), "en", Some("billing"));

    assert_eq!(catalog.error("billing::invoice.late", &none(), None).unwrap(), "Late");
    assert_eq!(catalog.error("invoice.late", &none(), None).unwrap(), "invoice.late");
}

#[test]
fn test_whole_group_lookup() {
    let loader =
        CountingLoader::new().with_messages("en", "auth", json!({"failed": "Failed :who"}), None);
    let catalog = Catalog::new(loader, "en");

    let line = catalog.error("auth", &replacements(&[("who", "x")]), None).unwrap();
    assert_eq!(line, Line::Group(to_messages(json!({"failed": "Failed :who"}))));
    assert!(catalog.has("auth", None, true).unwrap());
}

#[test]
fn test_array_line_returned_as_forms() {
    let loader = CountingLoader::new().with_messages(
        "en",
        "cart",
        json!({"items": ["one", "many"], "none": []}),
        None,
    );
    let catalog = Catalog::new(loader, "en");

    assert_eq!(
        catalog.error("cart.items", &none(), None).unwrap(),
        Line::Forms(vec!["one".to_string(), "many".to_string()])
    );
    assert_eq!(catalog.error("cart.none", &none(), None).unwrap(), "cart.none");
}

#[test]
fn test_line_equal_to_key_reads_as_missing() {
    let loader =
        CountingLoader::new().with_messages("en", "status", json!({"ok": "status.ok"}), None);
    let catalog = Catalog::new(loader, "en");

    assert_eq!(catalog.error("status.ok", &none(), None).unwrap(), "status.ok");
    assert!(!catalog.has("status.ok", None, true).unwrap());
}

#[test]
fn test_locale_accessors() {
    let mut catalog = Catalog::new(ArrayLoader::new(), "en");
    assert_eq!(catalog.get_locale(), "en");
    assert_eq!(catalog.locale(), "en");
    assert_eq!(catalog.get_fallback(), None);

    catalog.set_locale("pt_BR");
    catalog.set_fallback("pt");
    assert_eq!(catalog.get_locale(), "pt_BR");
    assert_eq!(catalog.get_fallback(), Some("pt"));
}

#[test]
fn test_in_memory_registration_is_inert() {
    let mut catalog = Catalog::new(ArrayLoader::new(), "en");
    catalog.add_namespace("billing", "/srv/billing/lang");
    catalog.add_json_path("/srv/json");
    assert!(catalog.namespaces().is_empty());
}

#[test]
fn test_shared_across_threads() {
    let loader =
        CountingLoader::new().with_messages("en", "auth", json!({"failed": "Failed"}), None);
    let calls = loader.calls();
    let catalog = Arc::new(Catalog::new(loader, "en"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || catalog.error("auth.failed", &Replacements::new(), None).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), "Failed");
    }
    assert!(calls.load(Ordering::SeqCst) >= 1);
    assert_eq!(catalog.error("auth.failed", &none(), None).unwrap(), "Failed");
}
