//! First-order terms.
//!
//! Only as much of a term language as effects need: variables, constants,
//! function applications, and matrices of terms. [`Matrix`] is the single
//! implementor of [`Dimensioned`]; every shape check goes through it.

use std::fmt;

use thiserror::Error;

use crate::ids::LanguageId;
use crate::language::{FunctionSymbol, LanguageError, Sort};
use crate::symbol::Symbol;

// ── Leaves ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    symbol: Symbol,
    sort: Sort,
}

impl Variable {
    pub(crate) fn new(symbol: Symbol, sort: Sort) -> Self {
        Self { symbol, sort }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    symbol: Symbol,
    sort: Sort,
}

impl Constant {
    pub(crate) fn new(symbol: Symbol, sort: Sort) -> Self {
        Self { symbol, sort }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

// ── Function application ─────────────────────────────────────

/// `f(t1, …, tn)`: the only assignable kind of term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundTerm {
    function: FunctionSymbol,
    args: Vec<Term>,
}

impl CompoundTerm {
    pub fn new(function: &FunctionSymbol, args: Vec<Term>) -> Result<Self, LanguageError> {
        if args.len() != function.arity() {
            return Err(LanguageError::ArityMismatch {
                symbol: function.symbol().to_owned(),
                expected: function.arity(),
                found: args.len(),
            });
        }
        if let Some(index) = args
            .iter()
            .position(|arg| arg.language() != function.language())
        {
            return Err(LanguageError::ForeignTerm {
                symbol: function.symbol().to_owned(),
                position: index + 1,
                term: args[index].to_string(),
            });
        }
        Ok(Self {
            function: function.clone(),
            args,
        })
    }

    #[must_use]
    pub fn function(&self) -> &FunctionSymbol {
        &self.function
    }

    #[must_use]
    pub fn args(&self) -> &[Term] {
        &self.args
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        self.function.symbol()
    }

    #[must_use]
    pub fn sort(&self) -> &Sort {
        self.function.codomain()
    }
}

impl fmt::Display for CompoundTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_joined(f, &self.args, ",")?;
        f.write_str(")")
    }
}

// ── Dimensions ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// A single row or a single column.
    #[must_use]
    pub const fn is_vector(self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    #[must_use]
    pub const fn is_column(self) -> bool {
        self.cols == 1
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Capability of values that have a row/column shape.
pub trait Dimensioned {
    fn dimensions(&self) -> Dimensions;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,
    #[error("matrix row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A non-empty, rectangular grid of terms stored row-major.
///
/// The matrix takes the language of its first entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    dimensions: Dimensions,
    entries: Vec<Term>,
    language: LanguageId,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<Term>>) -> Result<Self, TermError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(TermError::EmptyMatrix);
        }
        if let Some((row, entries)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(TermError::RaggedRow {
                row,
                expected: cols,
                found: entries.len(),
            });
        }
        let dimensions = Dimensions::new(rows.len(), cols);
        let entries: Vec<Term> = rows.into_iter().flatten().collect();
        let language = entries[0].language();
        Ok(Self {
            dimensions,
            entries,
            language,
        })
    }

    /// An `n x 1` column vector.
    pub fn column(entries: Vec<Term>) -> Result<Self, TermError> {
        Self::new(entries.into_iter().map(|t| vec![t]).collect())
    }

    /// A `1 x n` row vector.
    pub fn row(entries: Vec<Term>) -> Result<Self, TermError> {
        Self::new(vec![entries])
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Term> {
        if row < self.dimensions.rows && col < self.dimensions.cols {
            self.entries.get(row * self.dimensions.cols + col)
        } else {
            None
        }
    }

    /// Entries of column `col`, top to bottom.
    pub fn column_entries(&self, col: usize) -> impl Iterator<Item = &Term> {
        self.entries
            .iter()
            .skip(col)
            .step_by(self.dimensions.cols)
            .take(if col < self.dimensions.cols {
                self.dimensions.rows
            } else {
                0
            })
    }

    #[must_use]
    pub fn entries(&self) -> &[Term] {
        &self.entries
    }

    #[must_use]
    pub fn language(&self) -> LanguageId {
        self.language
    }
}

impl Dimensioned for Matrix {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, row) in self.entries.chunks(self.dimensions.cols).enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            write_joined(f, row, ", ")?;
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

// ── Term ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Compound(CompoundTerm),
    Matrix(Matrix),
}

impl Term {
    #[must_use]
    pub fn language(&self) -> LanguageId {
        match self {
            Self::Variable(v) => v.sort.language(),
            Self::Constant(c) => c.sort.language(),
            Self::Compound(c) => c.function.language(),
            Self::Matrix(m) => m.language,
        }
    }

    /// The symbol heading this term; matrices have none.
    #[must_use]
    pub fn head_symbol(&self) -> Option<&str> {
        match self {
            Self::Variable(v) => Some(v.symbol()),
            Self::Constant(c) => Some(c.symbol()),
            Self::Compound(c) => Some(c.symbol()),
            Self::Matrix(_) => None,
        }
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&CompoundTerm> {
        match self {
            Self::Compound(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Self::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Shape of this term, if it has one.
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.as_matrix().map(Dimensioned::dimensions)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "{v}"),
            Self::Constant(c) => write!(f, "{c}"),
            Self::Compound(c) => write!(f, "{c}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

impl From<Constant> for Term {
    fn from(value: Constant) -> Self {
        Self::Constant(value)
    }
}

impl From<CompoundTerm> for Term {
    fn from(value: CompoundTerm) -> Self {
        Self::Compound(value)
    }
}

impl From<Matrix> for Term {
    fn from(value: Matrix) -> Self {
        Self::Matrix(value)
    }
}

pub(crate) fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
