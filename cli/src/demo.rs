//! A small blocks-and-counters model built through the language facade.

use std::io::Write;

use anyhow::{Context, Result};
use fstrips_config::FstripsConfig;
use fstrips_io::ParsedModel;
use fstrips_types::{
    Atom, CompoundTerm, Effect, Formula, OptimizationMetric, OptimizationType, UniversalEffect,
};

pub fn build(config: &FstripsConfig) -> Result<ParsedModel> {
    let mut lang = config
        .build_language()
        .context("failed to build language")?;

    let block = lang.sort("block")?;
    let counter = lang.sort("counter")?;
    let object = lang.object_sort().clone();

    let on = lang.predicate("on", &[block.clone(), block.clone()])?;
    let clear = lang.predicate("clear", &[block.clone()])?;
    let value = lang.function("value", &[counter.clone()], &object)?;
    let total_cost = lang.function("total-cost", &[], &object)?;

    let b1 = lang.constant("b1", &block)?;
    let b2 = lang.constant("b2", &block)?;
    let c1 = lang.constant("c1", &counter)?;
    let c2 = lang.constant("c2", &counter)?;
    let x = lang.variable("x", &block)?;

    let value_c1 = CompoundTerm::new(&value, vec![c1.into()])?;
    let value_c2 = CompoundTerm::new(&value, vec![c2.into()])?;
    let cost = CompoundTerm::new(&total_cost, vec![])?;
    let clear_b2 = Atom::new(&clear, vec![b2.clone().into()])?;

    let assign = config.operators().symbols().assign();
    let effects = vec![
        Effect::add(Atom::new(&on, vec![b1.into(), b2.into()])?)
            .when(Formula::from(clear_b2.clone())),
        Effect::del(clear_b2),
        lang.apply_operator(assign, value_c1, value_c2)?,
        Effect::increase(cost.clone(), 1)?,
    ];
    let universal = UniversalEffect::new(
        vec![x.clone()],
        vec![Effect::add(Atom::new(&clear, vec![x.into()])?)],
    );

    tracing::info!(language = %lang, effects = effects.len(), "built demo model");

    let mut model = ParsedModel::new(lang);
    model.effects = effects;
    model.universal_effects = vec![universal];
    model.metric = Some(OptimizationMetric::new(cost, OptimizationType::Minimize));
    Ok(model)
}

pub fn print(model: &ParsedModel, out: &mut impl Write) -> Result<()> {
    writeln!(out, "language: {}", model.language)?;
    writeln!(out, "predicates:")?;
    for predicate in model.language.predicates() {
        let dump = serde_json::to_string(&predicate.dump())?;
        writeln!(out, "  {predicate} {dump}")?;
    }
    writeln!(out, "effects:")?;
    for effect in &model.effects {
        writeln!(out, "  {effect}")?;
    }
    for universal in &model.universal_effects {
        writeln!(out, "  {universal}")?;
    }
    if let Some(metric) = &model.metric {
        writeln!(out, "metric: {metric}")?;
    }
    Ok(())
}
