//! Sort-checked predicate symbols.
//!
//! A [`Predicate`] only exists if every sort in its signature belongs to the
//! same language as the predicate. Equality is the distinguished binary
//! predicate `=`; see [`Predicate::equality`].

use std::{fmt, iter};

use serde::Serialize;

use crate::ids::LanguageId;
use crate::language::{LanguageError, Sort, check_sorts};
use crate::symbol::Symbol;

/// Symbol of the equality predicate.
pub const EQUALITY_SYMBOL: &str = "=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    Regular,
    Equality,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    symbol: Symbol,
    language: LanguageId,
    sorts: Vec<Sort>,
    kind: PredicateKind,
}

/// Flat record of a predicate's symbol and sort names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateDump {
    pub symbol: String,
    #[serde(rename = "type")]
    pub sorts: Vec<String>,
}

impl Predicate {
    /// Fails with [`LanguageError::ForeignSort`] at the first argument that
    /// belongs to a different language. Nothing is returned on failure.
    ///
    /// The reserved `=` symbol always yields an equality predicate, so its
    /// arity is checked as in [`Predicate::equality`].
    pub fn new(
        symbol: impl Into<String>,
        language: LanguageId,
        sorts: &[Sort],
    ) -> Result<Self, LanguageError> {
        let symbol = Symbol::new(symbol)?;
        if symbol.as_str() == EQUALITY_SYMBOL {
            return Self::equality(language, sorts);
        }
        Self::checked(symbol, language, sorts, PredicateKind::Regular)
    }

    /// The `=` predicate. Any arity other than two is rejected before the
    /// sorts are looked at.
    pub fn equality(language: LanguageId, sorts: &[Sort]) -> Result<Self, LanguageError> {
        if sorts.len() != 2 {
            return Err(LanguageError::EqualityArity { arity: sorts.len() });
        }
        Self::checked(
            Symbol::new_unchecked(EQUALITY_SYMBOL),
            language,
            sorts,
            PredicateKind::Equality,
        )
    }

    fn checked(
        symbol: Symbol,
        language: LanguageId,
        sorts: &[Sort],
        kind: PredicateKind,
    ) -> Result<Self, LanguageError> {
        check_sorts(&symbol, language, sorts)?;
        Ok(Self {
            symbol,
            language,
            sorts: sorts.to_vec(),
            kind,
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
    pub fn kind(&self) -> PredicateKind {
        self.kind
    }

    #[must_use]
    pub fn is_equality(&self) -> bool {
        self.kind == PredicateKind::Equality
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.sorts.len()
    }

    /// Declared argument sorts, in order.
    #[must_use]
    pub fn types(&self) -> &[Sort] {
        &self.sorts
    }

    /// `(symbol, sort names…)`.
    #[must_use]
    pub fn signature(&self) -> Vec<&str> {
        iter::once(self.symbol())
            .chain(self.sorts.iter().map(Sort::name))
            .collect()
    }

    #[must_use]
    pub fn dump(&self) -> PredicateDump {
        PredicateDump {
            symbol: self.symbol.to_string(),
            sorts: self.sorts.iter().map(|s| s.name().to_owned()).collect(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorts: Vec<&str> = self.sorts.iter().map(Sort::name).collect();
        write!(f, "{}({})", self.symbol, sorts.join(","))
    }
}
