//! Built-in theories a language can be extended with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::{Language, LanguageError, SymbolKind};
use crate::predicate::Predicate;

pub const REAL_SORT: &str = "Real";
pub const INTEGER_SORT: &str = "Integer";
pub const NATURAL_SORT: &str = "Natural";

/// Binary functions `Real x Real -> Real` added by [`Theory::Arithmetic`].
pub const ARITHMETIC_FUNCTIONS: [&str; 4] = ["+", "-", "*", "/"];

/// Binary predicates over `Real x Real` added by [`Theory::Arithmetic`].
pub const COMPARISON_PREDICATES: [&str; 4] = ["<", "<=", ">", ">="];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theory {
    /// The `=` predicate over `(object, object)`.
    Equality,
    /// Numeric sorts, the four arithmetic functions and comparisons.
    Arithmetic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theory '{0}', expected 'equality' or 'arithmetic'")]
pub struct TheoryParseError(String);

impl Theory {
    pub const ALL: [Self; 2] = [Self::Equality, Self::Arithmetic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equality => "equality",
            Self::Arithmetic => "arithmetic",
        }
    }

    /// Declares the theory's symbols in `language`. Conflicts are found
    /// before anything is declared, so a failed install leaves it unchanged.
    pub(crate) fn install(self, language: &mut Language) -> Result<(), LanguageError> {
        match self {
            Self::Equality => {
                let object = language.object_sort().clone();
                let equality = Predicate::equality(language.id(), &[object.clone(), object])?;
                language.declare_predicate(equality)?;
            }
            Self::Arithmetic => {
                Self::check_arithmetic_free(language)?;
                let real = language.sort(REAL_SORT)?;
                language.sort(INTEGER_SORT)?;
                language.sort(NATURAL_SORT)?;
                let operands = [real.clone(), real.clone()];
                for symbol in ARITHMETIC_FUNCTIONS {
                    language.function(symbol, &operands, &real)?;
                }
                for symbol in COMPARISON_PREDICATES {
                    language.predicate(symbol, &operands)?;
                }
            }
        }
        Ok(())
    }

    fn check_arithmetic_free(language: &Language) -> Result<(), LanguageError> {
        let duplicate = |kind, symbol: &str| LanguageError::DuplicateSymbol {
            kind,
            symbol: symbol.to_owned(),
        };
        if let Some(sort) = [REAL_SORT, INTEGER_SORT, NATURAL_SORT]
            .into_iter()
            .find(|name| language.get_sort(name).is_some())
        {
            return Err(duplicate(SymbolKind::Sort, sort));
        }
        if let Some(symbol) = ARITHMETIC_FUNCTIONS
            .into_iter()
            .find(|symbol| language.is_declared(symbol))
        {
            return Err(duplicate(SymbolKind::Function, symbol));
        }
        if let Some(symbol) = COMPARISON_PREDICATES
            .into_iter()
            .find(|symbol| language.is_declared(symbol))
        {
            return Err(duplicate(SymbolKind::Predicate, symbol));
        }
        Ok(())
    }
}

impl fmt::Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theory {
    type Err = TheoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equality" => Ok(Self::Equality),
            "arithmetic" => Ok(Self::Arithmetic),
            _ => Err(TheoryParseError(s.to_owned())),
        }
    }
}
