use std::fmt;

use crate::effect::Effect;
use crate::term::{Variable, write_joined};

/// Effects applied once per binding of `variables`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniversalEffect {
    variables: Vec<Variable>,
    effects: Vec<Effect>,
}

impl UniversalEffect {
    #[must_use]
    pub fn new(variables: Vec<Variable>, effects: Vec<Effect>) -> Self {
        Self { variables, effects }
    }

    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

impl fmt::Display for UniversalEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("forall (")?;
        write_joined(f, &self.variables, ", ")?;
        f.write_str(") : (")?;
        write_joined(f, &self.effects, ", ")?;
        f.write_str(")")
    }
}
