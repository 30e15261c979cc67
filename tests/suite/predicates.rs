//! Predicate sort-checking tests

use fstrips_types::{EQUALITY_SYMBOL, Language, LanguageError, Predicate, Theory, language};
use serde_json::json;

#[test]
fn predicate_over_own_sorts_succeeds() {
    let mut lang = Language::new("demo");
    let block = lang.sort("block").unwrap();
    let on = Predicate::new("on", lang.id(), &[block.clone(), block]).unwrap();
    assert_eq!(on.arity(), 2);
    assert!(!on.is_equality());
}

#[test]
fn predicate_over_foreign_sort_fails() {
    let mut lang = Language::new("demo");
    let mut other = Language::new("other");
    let block = lang.sort("block").unwrap();
    let other_block = other.sort("block").unwrap();

    let err = Predicate::new("on", lang.id(), &[other_block, block]).unwrap_err();
    assert_eq!(
        err,
        LanguageError::ForeignSort {
            symbol: "on".to_owned(),
            position: 1,
            sort: "block".to_owned(),
        }
    );
    assert!(lang.get_predicate("on").is_none());
}

#[test]
fn foreign_sort_reported_at_first_offending_position() {
    let mut lang = Language::new("demo");
    let mut other = Language::new("other");
    let block = lang.sort("block").unwrap();
    let foreign = other.sort("table").unwrap();

    let err = lang
        .predicate("stacked", &[block.clone(), block, foreign.clone(), foreign])
        .unwrap_err();
    assert_eq!(err.position(), Some(3));
}

#[test]
fn equality_arity_is_checked_before_sorts() {
    let mut lang = Language::new("demo");
    let mut other = Language::new("other");
    let block = lang.sort("block").unwrap();
    let foreign = other.sort("block").unwrap();

    let three = [block.clone(), block.clone(), block.clone()];
    assert_eq!(
        Predicate::equality(lang.id(), &three).unwrap_err(),
        LanguageError::EqualityArity { arity: 3 }
    );
    let foreign_three = [foreign.clone(), foreign.clone(), foreign];
    assert_eq!(
        Predicate::equality(lang.id(), &foreign_three).unwrap_err(),
        LanguageError::EqualityArity { arity: 3 }
    );
    assert!(Predicate::equality(lang.id(), &[]).is_err());
}

#[test]
fn equality_over_two_owned_sorts_is_named_eq() {
    let mut lang = Language::new("demo");
    let block = lang.sort("block").unwrap();
    let eq = Predicate::equality(lang.id(), &[block.clone(), block]).unwrap();
    assert_eq!(eq.symbol(), EQUALITY_SYMBOL);
    assert!(eq.is_equality());
}

#[test]
fn signature_lists_symbol_then_sorts() {
    let mut lang = Language::new("demo");
    let block = lang.sort("block").unwrap();
    let table = lang.sort("table").unwrap();
    let on = lang.predicate("on_table", &[block.clone(), table]).unwrap();
    let nullary = lang.predicate("handempty", &[]).unwrap();

    assert_eq!(on.signature(), vec!["on_table", "block", "table"]);
    assert_eq!(nullary.signature(), vec!["handempty"]);
    let names: Vec<&str> = on.types().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["block", "table"]);
    // Each access yields an independent view over the same sorts.
    assert_eq!(on.types(), on.types());
}

#[test]
fn dump_serializes_symbol_and_sort_names() {
    let lang = language("demo", &[]).unwrap();
    let eq = lang.get_predicate(EQUALITY_SYMBOL).unwrap();
    let value = serde_json::to_value(eq.dump()).unwrap();
    assert_eq!(value, json!({"symbol": "=", "type": ["object", "object"]}));
}

#[test]
fn display_shows_signature() {
    let mut lang = Language::new("demo");
    let block = lang.sort("block").unwrap();
    let on = lang.predicate("on", &[block.clone(), block]).unwrap();
    insta::assert_snapshot!(on.to_string(), @"on(block,block)");
}

#[test]
fn reserved_equality_symbol_keeps_arity_two() {
    let mut lang = Language::new("demo");
    let block = lang.sort("block").unwrap();

    let err = lang
        .predicate(EQUALITY_SYMBOL, &[block.clone(), block.clone(), block])
        .unwrap_err();
    assert_eq!(err, LanguageError::EqualityArity { arity: 3 });
    assert!(lang.get_predicate(EQUALITY_SYMBOL).is_none());

    lang.attach_theory(Theory::Equality).unwrap();
    let eq = lang.get_predicate(EQUALITY_SYMBOL).unwrap();
    assert!(eq.is_equality());
    assert_eq!(eq.arity(), 2);
}
