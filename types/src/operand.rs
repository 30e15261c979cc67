//! Dynamically-typed effect payloads.
//!
//! Effect factories accept anything convertible into an [`Operand`] and
//! decide whether it fits the slot. A payload of the wrong kind is therefore
//! a value the factory can reject, not a type error at the call site.

use std::fmt;

use crate::term::{CompoundTerm, Constant, Matrix, Term, Variable};

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Term(Term),
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

/// Capability tags used to match operands against operator bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Any term.
    Term,
    /// A function application.
    CompoundTerm,
    /// A term with a row/column shape.
    Dimensioned,
    /// An integer or float literal.
    Numeric,
}

impl Capability {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::CompoundTerm => "compound term",
            Self::Dimensioned => "dimensioned term",
            Self::Numeric => "numeric literal",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Operand {
    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Term => self.as_term().is_some(),
            Capability::CompoundTerm => self.as_term().and_then(Term::as_compound).is_some(),
            Capability::Dimensioned => self.as_term().and_then(Term::dimensions).is_some(),
            Capability::Numeric => matches!(self, Self::Int(_) | Self::Float(_)),
        }
    }

    #[must_use]
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Self::Term(t) => Some(t),
            _ => None,
        }
    }

    /// Hands the operand back unchanged when it is not a term.
    pub fn into_term(self) -> Result<Term, Self> {
        match self {
            Self::Term(t) => Ok(t),
            other => Err(other),
        }
    }

    pub fn into_compound(self) -> Result<CompoundTerm, Self> {
        match self {
            Self::Term(Term::Compound(c)) => Ok(c),
            other => Err(other),
        }
    }

    pub fn into_matrix(self) -> Result<Matrix, Self> {
        match self {
            Self::Term(Term::Matrix(m)) => Ok(m),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(t) => write!(f, "{t}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<Term> for Operand {
    fn from(value: Term) -> Self {
        Self::Term(value)
    }
}

impl From<Variable> for Operand {
    fn from(value: Variable) -> Self {
        Self::Term(value.into())
    }
}

impl From<Constant> for Operand {
    fn from(value: Constant) -> Self {
        Self::Term(value.into())
    }
}

impl From<CompoundTerm> for Operand {
    fn from(value: CompoundTerm) -> Self {
        Self::Term(value.into())
    }
}

impl From<Matrix> for Operand {
    fn from(value: Matrix) -> Self {
        Self::Term(value.into())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
