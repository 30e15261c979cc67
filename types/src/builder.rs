//! Language construction facade.
//!
//! [`language`] is the one entry point model-building code needs: it creates
//! a [`Language`], attaches the requested theories and binds the assignment
//! operators. Effect validation stays in the effect constructors.

use crate::effect::{Effect, InvalidEffectError};
use crate::language::{Language, LanguageError, SymbolKind};
use crate::operand::{Capability, Operand};
use crate::symbol::Symbol;
use crate::theory::Theory;

pub const DEFAULT_LANGUAGE_NAME: &str = "Unnamed FOL Language";
pub const DEFAULT_ASSIGN_SYMBOL: &str = "<<";
pub const DEFAULT_ASSIGN_INVERTED_SYMBOL: &str = ">>";

/// Infix symbols bound to [`assign`] and [`assign_inverted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSymbols {
    assign: Symbol,
    assign_inverted: Symbol,
}

impl OperatorSymbols {
    /// Both symbols must be non-empty and distinct.
    pub fn new(
        assign: impl Into<String>,
        assign_inverted: impl Into<String>,
    ) -> Result<Self, LanguageError> {
        let assign = Symbol::new(assign)?;
        let assign_inverted = Symbol::new(assign_inverted)?;
        if assign == assign_inverted {
            return Err(LanguageError::DuplicateSymbol {
                kind: SymbolKind::Operator,
                symbol: assign.into_inner(),
            });
        }
        Ok(Self {
            assign,
            assign_inverted,
        })
    }

    #[must_use]
    pub fn assign(&self) -> &str {
        &self.assign
    }

    #[must_use]
    pub fn assign_inverted(&self) -> &str {
        &self.assign_inverted
    }
}

impl Default for OperatorSymbols {
    fn default() -> Self {
        Self {
            assign: Symbol::new_unchecked(DEFAULT_ASSIGN_SYMBOL),
            assign_inverted: Symbol::new_unchecked(DEFAULT_ASSIGN_INVERTED_SYMBOL),
        }
    }
}

/// `lhs := rhs`.
pub fn assign(
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<Effect, InvalidEffectError> {
    Effect::functional(lhs, rhs)
}

/// `rhs := lhs`, for the mirrored operator.
pub fn assign_inverted(
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<Effect, InvalidEffectError> {
    Effect::functional(rhs, lhs)
}

/// A language with `theories` attached and the default operator symbols
/// bound. No theories means [`Theory::Equality`] alone.
pub fn language(name: impl Into<String>, theories: &[Theory]) -> Result<Language, LanguageError> {
    language_with(name, theories, &OperatorSymbols::default())
}

pub fn language_with(
    name: impl Into<String>,
    theories: &[Theory],
    symbols: &OperatorSymbols,
) -> Result<Language, LanguageError> {
    let mut lang = Language::new(name);
    let theories = if theories.is_empty() {
        &[Theory::Equality][..]
    } else {
        theories
    };
    for &theory in theories {
        lang.attach_theory(theory)?;
    }
    lang.register_operator_handler(
        symbols.assign(),
        Capability::Term,
        Capability::Term,
        |lhs, rhs| assign(lhs, rhs),
    )?;
    lang.register_operator_handler(
        symbols.assign_inverted(),
        Capability::Term,
        Capability::Term,
        |lhs, rhs| assign_inverted(lhs, rhs),
    )?;
    tracing::debug!(language = %lang, "built language");
    Ok(lang)
}
