//! Language registry: sorts, function symbols, predicates, attached theories
//! and operator bindings of one sorted first-order vocabulary.
//!
//! The registry is append-only. Declarations are sort-checked when they are
//! made, so everything a [`Language`] hands out already belongs to it.

use std::{fmt, iter, slice};

use thiserror::Error;

use crate::effect::Effect;
use crate::ids::LanguageId;
use crate::operand::{Capability, Operand};
use crate::operators::{EffectConstructor, OperatorError, OperatorTable};
use crate::predicate::Predicate;
use crate::symbol::{EmptySymbolError, Symbol};
use crate::term::{Constant, Variable};
use crate::theory::Theory;

/// Sort every language is created with.
pub const OBJECT_SORT: &str = "object";

// ── Errors ───────────────────────────────────────────────────

/// What a duplicate or invalid name was being declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Sort,
    Predicate,
    Function,
    Operator,
}

impl SymbolKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Predicate => "predicate",
            Self::Function => "function",
            Self::Operator => "operator",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature and registry errors.
///
/// Positions are 1-based and name the offending argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("{symbol}: {position}-th argument '{sort}' belongs to a different language")]
    ForeignSort {
        symbol: String,
        position: usize,
        sort: String,
    },
    #[error("equality predicate must have arity of 2, list of arguments has length {arity}")]
    EqualityArity { arity: usize },
    #[error("duplicate {kind} '{symbol}'")]
    DuplicateSymbol { kind: SymbolKind, symbol: String },
    #[error("symbol must not be empty")]
    EmptySymbol,
    #[error("'{symbol}' expects {expected} arguments, got {found}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },
    #[error("{symbol}: {position}-th argument '{term}' belongs to a different language")]
    ForeignTerm {
        symbol: String,
        position: usize,
        term: String,
    },
}

impl LanguageError {
    /// The offending argument position, for errors that have one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::ForeignSort { position, .. } | Self::ForeignTerm { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }
}

impl From<EmptySymbolError> for LanguageError {
    fn from(_: EmptySymbolError) -> Self {
        Self::EmptySymbol
    }
}

/// Fails on the first sort not owned by `language`.
pub(crate) fn check_sorts(
    symbol: &Symbol,
    language: LanguageId,
    sorts: &[Sort],
) -> Result<(), LanguageError> {
    match sorts.iter().position(|sort| sort.language() != language) {
        Some(index) => Err(LanguageError::ForeignSort {
            symbol: symbol.to_string(),
            position: index + 1,
            sort: sorts[index].name().to_owned(),
        }),
        None => Ok(()),
    }
}

// ── Sorts and function symbols ───────────────────────────────

/// A named type tag. Identity is the pair (name, owning language).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sort {
    name: Symbol,
    language: LanguageId,
}

impl Sort {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn language(&self) -> LanguageId {
        self.language
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A function symbol `f: s1 × … × sn → s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSymbol {
    symbol: Symbol,
    language: LanguageId,
    domain: Vec<Sort>,
    codomain: Sort,
}

impl FunctionSymbol {
    /// Sort-checks domain and codomain against `language`. The codomain is
    /// reported as the position after the last domain sort.
    pub fn new(
        symbol: impl Into<String>,
        language: LanguageId,
        domain: &[Sort],
        codomain: &Sort,
    ) -> Result<Self, LanguageError> {
        let symbol = Symbol::new(symbol)?;
        check_sorts(&symbol, language, domain)?;
        if codomain.language() != language {
            return Err(LanguageError::ForeignSort {
                symbol: symbol.into_inner(),
                position: domain.len() + 1,
                sort: codomain.name().to_owned(),
            });
        }
        Ok(Self {
            symbol,
            language,
            domain: domain.to_vec(),
            codomain: codomain.clone(),
        })
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn language(&self) -> LanguageId {
        self.language
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn domain(&self) -> &[Sort] {
        &self.domain
    }

    #[must_use]
    pub fn codomain(&self) -> &Sort {
        &self.codomain
    }

    /// `(symbol, domain sort names…, codomain sort name)`.
    #[must_use]
    pub fn signature(&self) -> Vec<&str> {
        iter::once(self.symbol())
            .chain(self.domain.iter().map(Sort::name))
            .chain(iter::once(self.codomain.name()))
            .collect()
    }
}

impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

// ── Language ─────────────────────────────────────────────────

/// Registry owning the sorts, function symbols and predicates of one
/// vocabulary. Single writer: declarations must be made sequentially.
#[derive(Debug)]
pub struct Language {
    id: LanguageId,
    name: String,
    sorts: Vec<Sort>,
    functions: Vec<FunctionSymbol>,
    predicates: Vec<Predicate>,
    theories: Vec<Theory>,
    operators: OperatorTable,
}

impl Language {
    /// An empty language holding only the [`OBJECT_SORT`] sort.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let id = LanguageId::fresh();
        let object = Sort {
            name: Symbol::new_unchecked(OBJECT_SORT),
            language: id,
        };
        Self {
            id,
            name: name.into(),
            sorts: vec![object],
            functions: Vec::new(),
            predicates: Vec::new(),
            theories: Vec::new(),
            operators: OperatorTable::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> LanguageId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // ── Sorts ────────────────────────────────────────────────

    pub fn sort(&mut self, name: impl Into<String>) -> Result<Sort, LanguageError> {
        let name = Symbol::new(name)?;
        if self.get_sort(&name).is_some() {
            return Err(LanguageError::DuplicateSymbol {
                kind: SymbolKind::Sort,
                symbol: name.into_inner(),
            });
        }
        let sort = Sort {
            name,
            language: self.id,
        };
        tracing::debug!(language = %self.name, sort = %sort, "declared sort");
        self.sorts.push(sort.clone());
        Ok(sort)
    }

    #[must_use]
    pub fn object_sort(&self) -> &Sort {
        // Index 0 is seeded by `new` and the registry never removes entries.
        &self.sorts[0]
    }

    #[must_use]
    pub fn get_sort(&self, name: &str) -> Option<&Sort> {
        self.sorts.iter().find(|sort| sort.name() == name)
    }

    /// Sorts in declaration order, starting with [`OBJECT_SORT`].
    #[must_use]
    pub fn sorts(&self) -> &[Sort] {
        &self.sorts
    }

    // ── Predicates and functions ─────────────────────────────

    pub fn predicate(
        &mut self,
        symbol: impl Into<String>,
        sorts: &[Sort],
    ) -> Result<Predicate, LanguageError> {
        let predicate = Predicate::new(symbol, self.id, sorts)?;
        self.declare_predicate(predicate)
    }

    pub(crate) fn declare_predicate(
        &mut self,
        predicate: Predicate,
    ) -> Result<Predicate, LanguageError> {
        self.ensure_undeclared(predicate.symbol(), SymbolKind::Predicate)?;
        tracing::debug!(language = %self.name, predicate = %predicate, "declared predicate");
        self.predicates.push(predicate.clone());
        Ok(predicate)
    }

    #[must_use]
    pub fn get_predicate(&self, symbol: &str) -> Option<&Predicate> {
        self.predicates.iter().find(|p| p.symbol() == symbol)
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn function(
        &mut self,
        symbol: impl Into<String>,
        domain: &[Sort],
        codomain: &Sort,
    ) -> Result<FunctionSymbol, LanguageError> {
        let function = FunctionSymbol::new(symbol, self.id, domain, codomain)?;
        self.ensure_undeclared(function.symbol(), SymbolKind::Function)?;
        tracing::debug!(
            language = %self.name,
            function = %function,
            arity = function.arity(),
            "declared function"
        );
        self.functions.push(function.clone());
        Ok(function)
    }

    #[must_use]
    pub fn get_function(&self, symbol: &str) -> Option<&FunctionSymbol> {
        self.functions.iter().find(|f| f.symbol() == symbol)
    }

    #[must_use]
    pub fn functions(&self) -> &[FunctionSymbol] {
        &self.functions
    }

    /// Whether `symbol` already names a predicate or a function.
    #[must_use]
    pub fn is_declared(&self, symbol: &str) -> bool {
        self.get_predicate(symbol).is_some() || self.get_function(symbol).is_some()
    }

    fn ensure_undeclared(&self, symbol: &str, kind: SymbolKind) -> Result<(), LanguageError> {
        if self.is_declared(symbol) {
            Err(LanguageError::DuplicateSymbol {
                kind,
                symbol: symbol.to_owned(),
            })
        } else {
            Ok(())
        }
    }

    // ── Terms ────────────────────────────────────────────────

    pub fn constant(
        &self,
        symbol: impl Into<String>,
        sort: &Sort,
    ) -> Result<Constant, LanguageError> {
        let symbol = Symbol::new(symbol)?;
        check_sorts(&symbol, self.id, slice::from_ref(sort))?;
        Ok(Constant::new(symbol, sort.clone()))
    }

    pub fn variable(
        &self,
        symbol: impl Into<String>,
        sort: &Sort,
    ) -> Result<Variable, LanguageError> {
        let symbol = Symbol::new(symbol)?;
        check_sorts(&symbol, self.id, slice::from_ref(sort))?;
        Ok(Variable::new(symbol, sort.clone()))
    }

    // ── Theories ─────────────────────────────────────────────

    /// Attaching a theory twice is a no-op.
    pub fn attach_theory(&mut self, theory: Theory) -> Result<(), LanguageError> {
        if self.has_theory(theory) {
            return Ok(());
        }
        theory.install(self)?;
        tracing::debug!(language = %self.name, theory = %theory, "attached theory");
        self.theories.push(theory);
        Ok(())
    }

    #[must_use]
    pub fn has_theory(&self, theory: Theory) -> bool {
        self.theories.contains(&theory)
    }

    #[must_use]
    pub fn theories(&self) -> &[Theory] {
        &self.theories
    }

    // ── Operator sugar ───────────────────────────────────────

    /// Binds `symbol` over operands with the given capabilities to an effect
    /// constructor. A later binding for the same triple replaces the earlier one.
    pub fn register_operator_handler(
        &mut self,
        symbol: impl Into<String>,
        lhs: Capability,
        rhs: Capability,
        constructor: EffectConstructor,
    ) -> Result<(), LanguageError> {
        let symbol = Symbol::new(symbol)?;
        tracing::debug!(
            language = %self.name,
            operator = %symbol,
            lhs = %lhs,
            rhs = %rhs,
            "bound operator"
        );
        self.operators.register(symbol, lhs, rhs, constructor);
        Ok(())
    }

    pub fn apply_operator(
        &self,
        symbol: &str,
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Effect, OperatorError> {
        self.operators.apply(symbol, lhs.into(), rhs.into())
    }

    #[must_use]
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} sorts, {} functions, {} predicates",
            self.name,
            self.sorts.len(),
            self.functions.len(),
            self.predicates.len()
        )
    }
}
