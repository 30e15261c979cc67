//! Declarations of opaque functions used by black-box effects.

use std::fmt;

use crate::ids::LanguageId;
use crate::symbol::{EmptySymbolError, Symbol};
use crate::term::{Term, write_joined};

/// An opaque function: its inputs and the symbols of the terms it writes.
///
/// The computation itself lives outside the vocabulary. A black-box effect
/// binds the function to the language of the terms it assigns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlackBoxFunction {
    name: Symbol,
    inputs: Vec<Term>,
    outputs: Vec<Symbol>,
    language: Option<LanguageId>,
}

impl BlackBoxFunction {
    pub fn new<I, S>(
        name: impl Into<String>,
        inputs: Vec<Term>,
        outputs: I,
    ) -> Result<Self, EmptySymbolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outputs = outputs
            .into_iter()
            .map(Symbol::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: Symbol::new(name)?,
            inputs,
            outputs,
            language: None,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn inputs(&self) -> &[Term] {
        &self.inputs
    }

    /// Declared output symbols, in position order.
    #[must_use]
    pub fn outputs(&self) -> &[Symbol] {
        &self.outputs
    }

    /// The language this function has been bound to, if any.
    #[must_use]
    pub fn language(&self) -> Option<LanguageId> {
        self.language
    }

    pub(crate) fn bind_to_language(&mut self, language: LanguageId) {
        self.language = Some(language);
    }
}

impl fmt::Display for BlackBoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_joined(f, &self.inputs, ",")?;
        f.write_str(")")
    }
}
