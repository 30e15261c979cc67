//! Formulas used as effect conditions and logical effects.

use std::fmt;

use crate::language::LanguageError;
use crate::predicate::Predicate;
use crate::term::{Term, Variable, write_joined};

/// A predicate applied to terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    predicate: Predicate,
    args: Vec<Term>,
}

impl Atom {
    /// Checks arity and that every argument belongs to the predicate's language.
    pub fn new(predicate: &Predicate, args: Vec<Term>) -> Result<Self, LanguageError> {
        if args.len() != predicate.arity() {
            return Err(LanguageError::ArityMismatch {
                symbol: predicate.symbol().to_owned(),
                expected: predicate.arity(),
                found: args.len(),
            });
        }
        if let Some(index) = args
            .iter()
            .position(|arg| arg.language() != predicate.language())
        {
            return Err(LanguageError::ForeignTerm {
                symbol: predicate.symbol().to_owned(),
                position: index + 1,
                term: args[index].to_string(),
            });
        }
        Ok(Self {
            predicate: predicate.clone(),
            args,
        })
    }

    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    #[must_use]
    pub fn args(&self) -> &[Term] {
        &self.args
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate.symbol())?;
        write_joined(f, &self.args, ",")?;
        f.write_str(")")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Trivially true; the guard of unconditional effects.
    #[default]
    Tautology,
    Contradiction,
    Atom(Atom),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Forall(Vec<Variable>, Box<Formula>),
    Exists(Vec<Variable>, Box<Formula>),
}

impl Formula {
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    #[must_use]
    pub fn implies(self, consequent: Formula) -> Self {
        Self::Implies(Box::new(self), Box::new(consequent))
    }

    #[must_use]
    pub fn forall(variables: Vec<Variable>, body: Formula) -> Self {
        Self::Forall(variables, Box::new(body))
    }

    #[must_use]
    pub fn exists(variables: Vec<Variable>, body: Formula) -> Self {
        Self::Exists(variables, Box::new(body))
    }

    #[must_use]
    pub fn is_tautology(&self) -> bool {
        matches!(self, Self::Tautology)
    }
}

impl From<Atom> for Formula {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tautology => f.write_str("T"),
            Self::Contradiction => f.write_str("F"),
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Not(inner) => write!(f, "(not {inner})"),
            Self::And(parts) => {
                f.write_str("(")?;
                write_joined(f, parts, " and ")?;
                f.write_str(")")
            }
            Self::Or(parts) => {
                f.write_str("(")?;
                write_joined(f, parts, " or ")?;
                f.write_str(")")
            }
            Self::Implies(lhs, rhs) => write!(f, "({lhs} -> {rhs})"),
            Self::Forall(vars, body) => {
                f.write_str("forall ")?;
                write_joined(f, vars, ", ")?;
                write!(f, " : ({body})")
            }
            Self::Exists(vars, body) => {
                f.write_str("exists ")?;
                write_joined(f, vars, ", ")?;
                write!(f, " : ({body})")
            }
        }
    }
}
