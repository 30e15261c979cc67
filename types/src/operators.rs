//! Binary operator bindings.
//!
//! A language can map an infix symbol over two capability-tagged operands to
//! an effect constructor. Lookup is by symbol first, then by the first
//! binding whose capabilities both operands have, in registration order.

use thiserror::Error;

use crate::effect::{Effect, InvalidEffectError};
use crate::operand::{Capability, Operand};
use crate::symbol::Symbol;

/// Builds an effect from the two operands of a bound operator.
pub type EffectConstructor = fn(Operand, Operand) -> Result<Effect, InvalidEffectError>;

#[derive(Debug, Error)]
pub enum OperatorError {
    #[error("no handler for '{symbol}' over ({lhs}, {rhs})")]
    Unbound {
        symbol: String,
        lhs: String,
        rhs: String,
    },
    #[error(transparent)]
    Effect(#[from] InvalidEffectError),
}

#[derive(Debug, Clone)]
pub struct OperatorHandler {
    symbol: Symbol,
    lhs: Capability,
    rhs: Capability,
    constructor: EffectConstructor,
}

impl OperatorHandler {
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn lhs(&self) -> Capability {
        self.lhs
    }

    #[must_use]
    pub fn rhs(&self) -> Capability {
        self.rhs
    }

    fn accepts(&self, symbol: &str, lhs: &Operand, rhs: &Operand) -> bool {
        *self.symbol == *symbol && lhs.has(self.lhs) && rhs.has(self.rhs)
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    handlers: Vec<OperatorHandler>,
}

impl OperatorTable {
    /// Replaces any binding with the same symbol and capabilities.
    pub(crate) fn register(
        &mut self,
        symbol: Symbol,
        lhs: Capability,
        rhs: Capability,
        constructor: EffectConstructor,
    ) {
        let handler = OperatorHandler {
            symbol,
            lhs,
            rhs,
            constructor,
        };
        match self
            .handlers
            .iter_mut()
            .find(|h| h.symbol == handler.symbol && h.lhs == lhs && h.rhs == rhs)
        {
            Some(existing) => *existing = handler,
            None => self.handlers.push(handler),
        }
    }

    pub fn apply(&self, symbol: &str, lhs: Operand, rhs: Operand) -> Result<Effect, OperatorError> {
        let Some(handler) = self.handlers.iter().find(|h| h.accepts(symbol, &lhs, &rhs)) else {
            tracing::debug!(operator = symbol, %lhs, %rhs, "no operator handler");
            return Err(OperatorError::Unbound {
                symbol: symbol.to_owned(),
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
            });
        };
        Ok((handler.constructor)(lhs, rhs)?)
    }

    /// Whether any binding exists for `symbol`.
    #[must_use]
    pub fn is_bound(&self, symbol: &str) -> bool {
        self.handlers.iter().any(|h| *h.symbol == *symbol)
    }

    #[must_use]
    pub fn handlers(&self) -> &[OperatorHandler] {
        &self.handlers
    }
}

#[cfg(test)]
mod tests {
    use super::{OperatorError, OperatorTable};
    use crate::effect::{Effect, EffectKind, InvalidEffectError};
    use crate::language::Language;
    use crate::operand::{Capability, Operand};
    use crate::symbol::Symbol;
    use crate::term::CompoundTerm;

    fn increase(lhs: Operand, rhs: Operand) -> Result<Effect, InvalidEffectError> {
        Effect::increase(lhs, rhs)
    }

    fn functional(lhs: Operand, rhs: Operand) -> Result<Effect, InvalidEffectError> {
        Effect::functional(lhs, rhs)
    }

    #[test]
    fn dispatches_on_symbol_and_capabilities() {
        let mut lang = Language::new("demo");
        let counter = lang.sort("counter").unwrap();
        let cost = lang.function("cost", &[], &counter).unwrap();
        let cost = CompoundTerm::new(&cost, vec![]).unwrap();

        let mut table = OperatorTable::default();
        table.register(
            Symbol::new("+=").unwrap(),
            Capability::CompoundTerm,
            Capability::Numeric,
            increase,
        );
        assert!(table.is_bound("+="));
        assert!(!table.is_bound("<<"));

        let effect = table.apply("+=", cost.clone().into(), 2.into()).unwrap();
        assert_eq!(effect.kind(), EffectKind::Increase);

        let err = table.apply("+=", cost.into(), "x".into()).unwrap_err();
        assert!(matches!(err, OperatorError::Unbound { .. }));
    }

    #[test]
    fn same_triple_is_replaced() {
        let mut table = OperatorTable::default();
        let symbol = Symbol::new("<<").unwrap();
        table.register(symbol.clone(), Capability::Term, Capability::Term, increase);
        table.register(symbol, Capability::Term, Capability::Term, functional);
        assert_eq!(table.handlers().len(), 1);
    }

    #[test]
    fn constructor_errors_pass_through() {
        let mut lang = Language::new("demo");
        let counter = lang.sort("counter").unwrap();
        let c1 = lang.constant("c1", &counter).unwrap();
        let c2 = lang.constant("c2", &counter).unwrap();

        let mut table = OperatorTable::default();
        table.register(
            Symbol::new("<<").unwrap(),
            Capability::Term,
            Capability::Term,
            functional,
        );
        let err = table.apply("<<", c1.into(), c2.into()).unwrap_err();
        let OperatorError::Effect(inner) = err else {
            panic!("expected an effect error");
        };
        assert_eq!(inner.kind(), EffectKind::Functional);
    }
}
