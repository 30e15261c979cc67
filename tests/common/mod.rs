//! Shared test utilities and fixtures
//!
//! Small vocabularies the suites build effects over.

#![allow(dead_code)]

use fstrips_types::{
    Atom, CompoundTerm, FunctionSymbol, Language, Matrix, Predicate, Sort, Term, language,
};

/// Blocks world: `block` sort, `on/2`, `clear/1`, constants `b1..b3`.
pub struct Blocks {
    pub lang: Language,
    pub block: Sort,
    pub on: Predicate,
    pub clear: Predicate,
}

impl Blocks {
    pub fn new() -> Self {
        let mut lang = language("blocks", &[]).unwrap();
        let block = lang.sort("block").unwrap();
        let on = lang.predicate("on", &[block.clone(), block.clone()]).unwrap();
        let clear = lang.predicate("clear", &[block.clone()]).unwrap();
        Self {
            lang,
            block,
            on,
            clear,
        }
    }

    pub fn block(&self, name: &str) -> Term {
        self.lang.constant(name, &self.block).unwrap().into()
    }

    pub fn on(&self, top: &str, below: &str) -> Atom {
        Atom::new(&self.on, vec![self.block(top), self.block(below)]).unwrap()
    }

    pub fn clear(&self, name: &str) -> Atom {
        Atom::new(&self.clear, vec![self.block(name)]).unwrap()
    }
}

/// Counters: `counter` sort, `value: counter -> counter`, `cost: -> counter`.
pub struct Counters {
    pub lang: Language,
    pub counter: Sort,
    pub value: FunctionSymbol,
    pub cost: FunctionSymbol,
}

impl Counters {
    pub fn new() -> Self {
        let mut lang = language("counters", &[]).unwrap();
        let counter = lang.sort("counter").unwrap();
        let value = lang.function("value", &[counter.clone()], &counter).unwrap();
        let cost = lang.function("cost", &[], &counter).unwrap();
        Self {
            lang,
            counter,
            value,
            cost,
        }
    }

    pub fn constant(&self, name: &str) -> Term {
        self.lang.constant(name, &self.counter).unwrap().into()
    }

    pub fn value(&self, name: &str) -> CompoundTerm {
        CompoundTerm::new(&self.value, vec![self.constant(name)]).unwrap()
    }

    pub fn cost(&self) -> CompoundTerm {
        CompoundTerm::new(&self.cost, vec![]).unwrap()
    }

    /// Column vector `[value(n1); value(n2); ...]`.
    pub fn values(&self, names: &[&str]) -> Matrix {
        Matrix::column(names.iter().map(|n| self.value(n).into()).collect()).unwrap()
    }
}
