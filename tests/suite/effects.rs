//! Effect validation and rendering tests

use fstrips_types::{
    BlackBoxFunction, Effect, EffectKind, Formula, InvalidEffectReason, Matrix, OptimizationType,
    Side, UniversalEffect,
};

use crate::common::{Blocks, Counters};

#[test]
fn functional_with_constant_lhs_names_left_side() {
    let c = Counters::new();
    let five = c.constant("5");
    let err = Effect::functional(five, c.value("x")).unwrap_err();
    assert_eq!(err.kind(), EffectKind::Functional);
    assert_eq!(err.reason().side(), Side::Lhs);
    insta::assert_snapshot!(
        err.to_string(),
        @"error declaring FunctionalEffect: 5 := value(x): left hand side '5' needs to be a functional term"
    );
}

#[test]
fn functional_accepts_compound_lhs_and_any_term_rhs() {
    let c = Counters::new();
    for rhs in [
        c.constant("c2"),
        c.value("c2").into(),
        c.values(&["c2"]).into(),
    ] {
        let effect = Effect::functional(c.value("c1"), rhs).unwrap();
        assert_eq!(effect.kind(), EffectKind::Functional);
    }
}

#[test]
fn increase_by_literal_succeeds_and_by_string_fails() {
    let c = Counters::new();
    let effect = Effect::increase(c.cost(), 3).unwrap();
    insta::assert_snapshot!(effect.render(), @"(T -> cost() += 3)");

    let err = Effect::increase(c.cost(), "x").unwrap_err();
    assert_eq!(err.kind(), EffectKind::Increase);
    assert_eq!(
        err.reason(),
        &InvalidEffectReason::NotIncrement {
            side: Side::Rhs,
            operand: "\"x\"".to_owned(),
        }
    );
}

#[test]
fn black_box_names_first_mismatched_position() {
    let c = Counters::new();
    let function = BlackBoxFunction::new("simulate", vec![c.constant("c1")], ["value", "cost"])
        .unwrap();

    let matching = Matrix::column(vec![c.value("c1").into(), c.cost().into()]).unwrap();
    let effect = Effect::black_box(matching, function.clone()).unwrap();
    insta::assert_snapshot!(effect.payload(), @"[[value(c1)], [cost()]] := simulate");

    let swapped = Matrix::column(vec![c.cost().into(), c.value("c1").into()]).unwrap();
    let err = Effect::black_box(swapped, function).unwrap_err();
    assert_eq!(
        err.reason(),
        &InvalidEffectReason::OutputMismatch {
            position: 0,
            found: "cost()".to_owned(),
            expected: "value".to_owned(),
        }
    );
}

#[test]
fn vectorised_and_linear_check_conformability() {
    let c = Counters::new();
    assert!(Effect::vectorised(c.values(&["a", "b"]), c.values(&["c", "d"])).is_ok());
    assert!(Effect::vectorised(c.values(&["a", "b"]), c.values(&["c", "d", "e"])).is_err());

    let a = Matrix::new(vec![
        vec![c.constant("a11"), c.constant("a12")],
        vec![c.constant("a21"), c.constant("a22")],
    ])
    .unwrap();
    let linear = Effect::linear(
        c.values(&["y1", "y2"]),
        a.clone(),
        c.values(&["x1", "x2"]),
        c.values(&["b1", "b2"]),
    )
    .unwrap();
    insta::assert_snapshot!(
        linear.payload(),
        @"[[value(y1)], [value(y2)]] := [[a11, a12], [a21, a22]] * [[value(x1)], [value(x2)]] + [[value(b1)], [value(b2)]]"
    );

    let err = Effect::linear(
        c.values(&["y1", "y2"]),
        a,
        c.values(&["x1", "x2", "x3"]),
        c.values(&["b1", "b2"]),
    )
    .unwrap_err();
    assert_eq!(err.reason().side(), Side::A);
}

#[test]
fn choice_renders_direction_objective_and_constraints() {
    let c = Counters::new();
    let b = Blocks::new();
    let effect = Effect::choice(
        OptimizationType::Minimize,
        c.cost(),
        vec![c.value("c1").into()],
    )
    .unwrap();
    insta::assert_snapshot!(
        effect.render(),
        @"(T -> minimize cost(), vars: value(c1) subject to: T)"
    );

    // Constraints from another vocabulary are only rendered, never checked.
    let constrained = effect.when(b.clear("b1").into());
    assert_eq!(constrained.condition(), &Formula::from(b.clear("b1")));
}

#[test]
fn conditional_add_and_universal_render() {
    let b = Blocks::new();
    let x = b.lang.variable("x", &b.block).unwrap();
    let add = Effect::add(b.on("b1", "b2")).when(Formula::And(vec![
        b.clear("b1").into(),
        b.clear("b2").into(),
    ]));
    insta::assert_snapshot!(add.render(), @"((clear(b1) and clear(b2)) -> ADD(on(b1,b2)))");

    let universal = UniversalEffect::new(
        vec![x.clone()],
        vec![Effect::del(fstrips_types::Atom::new(&b.clear, vec![x.into()]).unwrap())],
    );
    insta::assert_snapshot!(universal.to_string(), @"forall (?x) : ((T -> DEL(clear(?x))))");
}

#[test]
fn procedural_and_logical_need_no_validation() {
    let c = Counters::new();
    let b = Blocks::new();
    let procedural = Effect::procedural(vec![c.constant("a"), c.constant("b")], vec![]);
    assert_eq!(procedural.payload(), "in: a,b, out: ");

    let logical = Effect::logical(Formula::from(b.on("b1", "b2")).negate());
    assert_eq!(logical.render(), "(T -> (not on(b1,b2)))");
}

#[test]
fn rendering_is_stable_across_equal_effects() {
    let c = Counters::new();
    let build = || {
        Effect::increase(c.value("c1"), c.value("c2"))
            .unwrap()
            .when(Formula::Contradiction)
    };
    let (first, second) = (build(), build());
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
    assert_eq!(first.render(), "(F -> value(c1) += value(c2))");
}
