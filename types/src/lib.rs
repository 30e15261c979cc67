//! Sorted first-order vocabulary and action effects for FSTRIPS planning.
//!
//! This crate contains pure domain types with no IO and no async. Everything a
//! constructor hands back has already been checked: predicates are sort-checked
//! against their language and every effect variant validates its payload.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod black_box;
mod builder;
mod effect;
mod formula;
mod ids;
mod language;
mod metric;
mod operand;
mod operators;
mod predicate;
mod symbol;
mod term;
mod theory;
mod universal;

pub use black_box::BlackBoxFunction;
pub use builder::{
    DEFAULT_ASSIGN_INVERTED_SYMBOL, DEFAULT_ASSIGN_SYMBOL, DEFAULT_LANGUAGE_NAME, OperatorSymbols,
    assign, assign_inverted, language, language_with,
};
pub use effect::{
    AddEffect, BlackBoxEffect, ChoiceEffect, DelEffect, Effect, EffectKind, FunctionalEffect,
    IncreaseEffect, Increment, InvalidEffectError, InvalidEffectReason, LinearEffect,
    LogicalEffect, ProceduralEffect, Side, VectorisedEffect,
};
pub use formula::{Atom, Formula};
pub use ids::LanguageId;
pub use language::{FunctionSymbol, Language, LanguageError, OBJECT_SORT, Sort, SymbolKind};
pub use metric::{OptimizationMetric, OptimizationType, OptimizationTypeParseError};
pub use operand::{Capability, Operand};
pub use operators::{EffectConstructor, OperatorError, OperatorHandler, OperatorTable};
pub use predicate::{EQUALITY_SYMBOL, Predicate, PredicateDump, PredicateKind};
pub use symbol::{EmptySymbolError, Symbol};
pub use term::{
    CompoundTerm, Constant, Dimensioned, Dimensions, Matrix, Term, TermError, Variable,
};
pub use theory::{
    ARITHMETIC_FUNCTIONS, COMPARISON_PREDICATES, INTEGER_SORT, NATURAL_SORT, REAL_SORT, Theory,
    TheoryParseError,
};
pub use universal::UniversalEffect;
