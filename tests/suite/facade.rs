//! Language facade, theory and operator table tests

use fstrips_types::{
    Capability, DEFAULT_LANGUAGE_NAME, Effect, EffectKind, InvalidEffectError, Operand,
    OperatorError, OperatorSymbols, Theory, assign, language, language_with,
};

use crate::common::Counters;

#[test]
fn default_language_has_equality_and_assign_operators() {
    let lang = language(DEFAULT_LANGUAGE_NAME, &[]).unwrap();
    assert_eq!(lang.theories(), &[Theory::Equality]);
    assert_eq!(lang.predicates().len(), 1);
    assert_eq!(lang.operators().handlers().len(), 2);
    assert!(lang.operators().is_bound("<<"));
    assert!(lang.operators().is_bound(">>"));
}

#[test]
fn both_theories_can_be_requested() {
    let lang = language("numbers", &[Theory::Equality, Theory::Arithmetic]).unwrap();
    assert_eq!(lang.theories(), &[Theory::Equality, Theory::Arithmetic]);
    assert_eq!(lang.predicates().len(), 5);
    assert!(lang.get_function("*").is_some());
    insta::assert_snapshot!(lang.to_string(), @"numbers: 4 sorts, 4 functions, 5 predicates");
}

#[test]
fn assign_operator_matches_named_builder() {
    let c = Counters::new();
    let via_operator = c.lang.apply_operator("<<", c.value("c1"), c.value("c2")).unwrap();
    let via_builder = assign(c.value("c1"), c.value("c2")).unwrap();
    assert_eq!(via_operator, via_builder);

    let inverted = c.lang.apply_operator(">>", c.value("c2"), c.value("c1")).unwrap();
    assert_eq!(inverted, via_builder);
}

#[test]
fn unknown_operator_is_unbound() {
    let c = Counters::new();
    let err = c.lang.apply_operator("+=", c.cost(), 1).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no handler for '+=' over (cost(), 1)");
}

#[test]
fn registered_handler_extends_language() {
    fn increase(lhs: Operand, rhs: Operand) -> Result<Effect, InvalidEffectError> {
        Effect::increase(lhs, rhs)
    }

    let mut c = Counters::new();
    c.lang
        .register_operator_handler("+=", Capability::CompoundTerm, Capability::Numeric, increase)
        .unwrap();
    let cost = c.cost();
    let effect = c.lang.apply_operator("+=", cost, 2.5).unwrap();
    assert_eq!(effect.kind(), EffectKind::Increase);
    assert_eq!(effect.payload(), "cost() += 2.5");
}

#[test]
fn operator_errors_keep_effect_reason() {
    let c = Counters::new();
    let err = c
        .lang
        .apply_operator("<<", c.constant("c1"), c.constant("c2"))
        .unwrap_err();
    let OperatorError::Effect(inner) = err else {
        panic!("expected the functional constructor to reject the operands");
    };
    assert_eq!(inner.kind(), EffectKind::Functional);
    assert_eq!(inner.payload(), "c1 := c2");
}

#[test]
fn custom_symbols_replace_defaults() {
    let symbols = OperatorSymbols::new("<-", "->").unwrap();
    let lang = language_with("custom", &[], &symbols).unwrap();
    assert!(lang.operators().is_bound("<-"));
    assert!(!lang.operators().is_bound("<<"));
}
