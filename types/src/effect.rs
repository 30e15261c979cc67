//! Action effects.
//!
//! [`Effect`] is a closed sum over every effect kind. Each variant carries its
//! own payload plus the formula guarding it (Tautology unless set with
//! [`Effect::when`]). Variant factories check the payload's shape and types
//! before anything is built: they either return a complete effect or an
//! [`InvalidEffectError`], never a half-validated value.
//!
//! Validation is fail-fast. The first rule that does not hold is reported and
//! nothing after it is looked at.

use std::fmt;

use thiserror::Error;

use crate::black_box::BlackBoxFunction;
use crate::formula::{Atom, Formula};
use crate::metric::OptimizationType;
use crate::operand::Operand;
use crate::term::{CompoundTerm, Dimensioned, Dimensions, Matrix, Term};

// ── Kinds and sides ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Add,
    Del,
    Functional,
    Increase,
    Procedural,
    Choice,
    Logical,
    Vectorised,
    Linear,
    BlackBox,
}

impl EffectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "AddEffect",
            Self::Del => "DelEffect",
            Self::Functional => "FunctionalEffect",
            Self::Increase => "IncreaseEffect",
            Self::Procedural => "ProceduralEffect",
            Self::Choice => "ChoiceEffect",
            Self::Logical => "LogicalEffect",
            Self::Vectorised => "VectorisedEffect",
            Self::Linear => "LinearEffect",
            Self::BlackBox => "BlackBoxEffect",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload slot a validation rule is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Lhs,
    Rhs,
    Objective,
    Y,
    A,
    X,
    B,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lhs => "left hand side",
            Self::Rhs => "right hand side",
            Self::Objective => "objective",
            Self::Y => "y",
            Self::A => "coefficient matrix A",
            Self::X => "x",
            Self::B => "coefficient vector b",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Errors ───────────────────────────────────────────────────

/// Which rule an effect payload broke. Black-box positions are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEffectReason {
    #[error("{side} '{operand}' needs to be a functional term")]
    NotFunctional { side: Side, operand: String },
    #[error("{side} '{operand}' needs to be a term")]
    NotTerm { side: Side, operand: String },
    #[error("{side} '{operand}' needs to be a constant or functional term")]
    NotIncrement { side: Side, operand: String },
    #[error("{side} '{operand}' needs to be vector or matrix like")]
    NotDimensioned { side: Side, operand: String },
    #[error("{side} needs to be a vector, found {dimensions}")]
    NotVector { side: Side, dimensions: Dimensions },
    #[error("{side} needs to be a vector in column order, found {dimensions}")]
    NotColumn { side: Side, dimensions: Dimensions },
    #[error("{left} ({left_dimensions}) does not conform to {right} ({right_dimensions})")]
    DimensionMismatch {
        left: Side,
        left_dimensions: Dimensions,
        right: Side,
        right_dimensions: Dimensions,
    },
    #[error("lhs {position}-th term {found} belongs to a different language than the first")]
    MixedLanguages { position: usize, found: String },
    #[error("lhs {position}-th symbol {found} has no corresponding function output")]
    MissingOutput { position: usize, found: String },
    #[error(
        "lhs {position}-th symbol {found} is not matched by corresponding function output {expected}"
    )]
    OutputMismatch {
        position: usize,
        found: String,
        expected: String,
    },
}

impl InvalidEffectReason {
    /// The slot the rule is about. Black-box rules concern the left hand side.
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            Self::NotFunctional { side, .. }
            | Self::NotTerm { side, .. }
            | Self::NotIncrement { side, .. }
            | Self::NotDimensioned { side, .. }
            | Self::NotVector { side, .. }
            | Self::NotColumn { side, .. } => *side,
            Self::DimensionMismatch { left, .. } => *left,
            Self::MixedLanguages { .. }
            | Self::MissingOutput { .. }
            | Self::OutputMismatch { .. } => Side::Lhs,
        }
    }
}

/// A rejected effect: its kind, the payload it would have rendered, and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error declaring {kind}: {payload}: {reason}")]
pub struct InvalidEffectError {
    kind: EffectKind,
    payload: String,
    reason: InvalidEffectReason,
}

impl InvalidEffectError {
    #[must_use]
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// The payload as it would have rendered had it been accepted.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    #[must_use]
    pub fn reason(&self) -> &InvalidEffectReason {
        &self.reason
    }
}

/// A payload under validation, kept for error reporting.
struct Declaration {
    kind: EffectKind,
    payload: String,
}

impl Declaration {
    fn new(kind: EffectKind, payload: String) -> Self {
        Self { kind, payload }
    }

    fn reject(&self, reason: InvalidEffectReason) -> InvalidEffectError {
        tracing::trace!(kind = %self.kind, payload = %self.payload, %reason, "rejected effect");
        InvalidEffectError {
            kind: self.kind,
            payload: self.payload.clone(),
            reason,
        }
    }

    fn compound(&self, side: Side, operand: Operand) -> Result<CompoundTerm, InvalidEffectError> {
        operand.into_compound().map_err(|op| {
            self.reject(InvalidEffectReason::NotFunctional {
                side,
                operand: op.to_string(),
            })
        })
    }

    fn term(&self, side: Side, operand: Operand) -> Result<Term, InvalidEffectError> {
        operand.into_term().map_err(|op| {
            self.reject(InvalidEffectReason::NotTerm {
                side,
                operand: op.to_string(),
            })
        })
    }

    fn matrix(&self, side: Side, operand: Operand) -> Result<Matrix, InvalidEffectError> {
        operand.into_matrix().map_err(|op| {
            self.reject(InvalidEffectReason::NotDimensioned {
                side,
                operand: op.to_string(),
            })
        })
    }

    fn column(&self, side: Side, operand: Operand) -> Result<Matrix, InvalidEffectError> {
        let matrix = self.matrix(side, operand)?;
        let dimensions = matrix.dimensions();
        if dimensions.is_column() {
            Ok(matrix)
        } else {
            Err(self.reject(InvalidEffectReason::NotColumn { side, dimensions }))
        }
    }

    fn conform(
        &self,
        (left, left_dimensions): (Side, Dimensions),
        (right, right_dimensions): (Side, Dimensions),
        holds: bool,
    ) -> Result<(), InvalidEffectError> {
        if holds {
            Ok(())
        } else {
            Err(self.reject(InvalidEffectReason::DimensionMismatch {
                left,
                left_dimensions,
                right,
                right_dimensions,
            }))
        }
    }
}

// ── Variants ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct AddEffect {
    atom: Atom,
    condition: Formula,
}

impl AddEffect {
    #[must_use]
    pub fn new(atom: Atom) -> Self {
        Self {
            atom,
            condition: Formula::Tautology,
        }
    }

    #[must_use]
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    fn payload(&self) -> String {
        format!("ADD({})", self.atom)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DelEffect {
    atom: Atom,
    condition: Formula,
}

impl DelEffect {
    #[must_use]
    pub fn new(atom: Atom) -> Self {
        Self {
            atom,
            condition: Formula::Tautology,
        }
    }

    #[must_use]
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    fn payload(&self) -> String {
        format!("DEL({})", self.atom)
    }
}

/// `lhs := rhs` where `lhs` is a function application.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalEffect {
    lhs: CompoundTerm,
    rhs: Term,
    condition: Formula,
}

impl FunctionalEffect {
    pub fn new(
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        let (lhs, rhs) = (lhs.into(), rhs.into());
        let decl = Declaration::new(EffectKind::Functional, format!("{lhs} := {rhs}"));
        let lhs = decl.compound(Side::Lhs, lhs)?;
        let rhs = decl.term(Side::Rhs, rhs)?;
        Ok(Self {
            lhs,
            rhs,
            condition: Formula::Tautology,
        })
    }

    #[must_use]
    pub fn lhs(&self) -> &CompoundTerm {
        &self.lhs
    }

    #[must_use]
    pub fn rhs(&self) -> &Term {
        &self.rhs
    }

    fn payload(&self) -> String {
        format!("{} := {}", self.lhs, self.rhs)
    }
}

/// Right hand side of an increase: a term or a numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Increment {
    Term(Term),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(t) => write!(f, "{t}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// `lhs += rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct IncreaseEffect {
    lhs: CompoundTerm,
    rhs: Increment,
    condition: Formula,
}

impl IncreaseEffect {
    pub fn new(
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        let (lhs, rhs) = (lhs.into(), rhs.into());
        let decl = Declaration::new(EffectKind::Increase, format!("{lhs} += {rhs}"));
        let lhs = decl.compound(Side::Lhs, lhs)?;
        let rhs = match rhs {
            Operand::Term(t) => Increment::Term(t),
            Operand::Int(i) => Increment::Int(i),
            Operand::Float(x) => Increment::Float(x),
            other @ (Operand::Str(_) | Operand::Bool(_)) => {
                return Err(decl.reject(InvalidEffectReason::NotIncrement {
                    side: Side::Rhs,
                    operand: other.to_string(),
                }));
            }
        };
        Ok(Self {
            lhs,
            rhs,
            condition: Formula::Tautology,
        })
    }

    #[must_use]
    pub fn lhs(&self) -> &CompoundTerm {
        &self.lhs
    }

    #[must_use]
    pub fn rhs(&self) -> &Increment {
        &self.rhs
    }

    fn payload(&self) -> String {
        format!("{} += {}", self.lhs, self.rhs)
    }
}

/// An opaque procedure call reading `input` and writing `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProceduralEffect {
    input: Vec<Term>,
    output: Vec<Term>,
    condition: Formula,
}

impl ProceduralEffect {
    #[must_use]
    pub fn new(input: Vec<Term>, output: Vec<Term>) -> Self {
        Self {
            input,
            output,
            condition: Formula::Tautology,
        }
    }

    #[must_use]
    pub fn input(&self) -> &[Term] {
        &self.input
    }

    #[must_use]
    pub fn output(&self) -> &[Term] {
        &self.output
    }

    fn payload(&self) -> String {
        format!("in: {}, out: {}", joined(&self.input, ","), joined(&self.output, ","))
    }
}

/// Choose values for `variables` optimizing `objective`. The guarding
/// condition doubles as the constraints the choice is subject to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceEffect {
    direction: OptimizationType,
    objective: CompoundTerm,
    variables: Vec<Term>,
    constraints: Formula,
}

impl ChoiceEffect {
    pub fn new(
        direction: OptimizationType,
        objective: impl Into<Operand>,
        variables: Vec<Term>,
    ) -> Result<Self, InvalidEffectError> {
        let objective = objective.into();
        let decl = Declaration::new(
            EffectKind::Choice,
            choice_payload(direction, &objective, &variables, &Formula::Tautology),
        );
        let objective = decl.compound(Side::Objective, objective)?;
        Ok(Self {
            direction,
            objective,
            variables,
            constraints: Formula::Tautology,
        })
    }

    #[must_use]
    pub fn direction(&self) -> OptimizationType {
        self.direction
    }

    #[must_use]
    pub fn objective(&self) -> &CompoundTerm {
        &self.objective
    }

    #[must_use]
    pub fn variables(&self) -> &[Term] {
        &self.variables
    }

    #[must_use]
    pub fn constraints(&self) -> &Formula {
        &self.constraints
    }

    fn payload(&self) -> String {
        choice_payload(
            self.direction,
            &self.objective,
            &self.variables,
            &self.constraints,
        )
    }
}

fn choice_payload(
    direction: OptimizationType,
    objective: &dyn fmt::Display,
    variables: &[Term],
    constraints: &Formula,
) -> String {
    format!(
        "{direction} {objective}, vars: {} subject to: {constraints}",
        joined(variables, ",")
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalEffect {
    formula: Formula,
    condition: Formula,
}

impl LogicalEffect {
    #[must_use]
    pub fn new(formula: Formula) -> Self {
        Self {
            formula,
            condition: Formula::Tautology,
        }
    }

    #[must_use]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    fn payload(&self) -> String {
        self.formula.to_string()
    }
}

/// Element-wise assignment of a vector of terms.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorisedEffect {
    lhs: Matrix,
    rhs: Matrix,
    condition: Formula,
}

impl VectorisedEffect {
    /// `lhs` must be a single row or column and `rhs` must have the same shape.
    pub fn new(
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        let (lhs, rhs) = (lhs.into(), rhs.into());
        let decl = Declaration::new(EffectKind::Vectorised, format!("{lhs} := {rhs}"));

        let lhs = decl.matrix(Side::Lhs, lhs)?;
        let lhs_dimensions = lhs.dimensions();
        if !lhs_dimensions.is_vector() {
            return Err(decl.reject(InvalidEffectReason::NotVector {
                side: Side::Lhs,
                dimensions: lhs_dimensions,
            }));
        }
        let rhs = decl.matrix(Side::Rhs, rhs)?;
        let rhs_dimensions = rhs.dimensions();
        decl.conform(
            (Side::Lhs, lhs_dimensions),
            (Side::Rhs, rhs_dimensions),
            lhs_dimensions == rhs_dimensions,
        )?;
        Ok(Self {
            lhs,
            rhs,
            condition: Formula::Tautology,
        })
    }

    #[must_use]
    pub fn lhs(&self) -> &Matrix {
        &self.lhs
    }

    #[must_use]
    pub fn rhs(&self) -> &Matrix {
        &self.rhs
    }

    fn payload(&self) -> String {
        format!("{} := {}", self.lhs, self.rhs)
    }
}

/// `y := A * x + b` over column vectors `y`, `x`, `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEffect {
    y: Matrix,
    a: Matrix,
    x: Matrix,
    b: Matrix,
    condition: Formula,
}

impl LinearEffect {
    /// Requires `y` and `x` to be column vectors, `A` to be
    /// `rows(y) x rows(x)`, and `b` to have the shape of `y`.
    pub fn new(
        y: impl Into<Operand>,
        a: impl Into<Operand>,
        x: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        let (y, a, x, b) = (y.into(), a.into(), x.into(), b.into());
        let decl = Declaration::new(EffectKind::Linear, format!("{y} := {a} * {x} + {b}"));

        let y = decl.column(Side::Y, y)?;
        let x = decl.column(Side::X, x)?;
        let a = decl.matrix(Side::A, a)?;
        let (yd, xd, ad) = (y.dimensions(), x.dimensions(), a.dimensions());
        decl.conform((Side::A, ad), (Side::X, xd), ad.cols == xd.rows)?;
        decl.conform((Side::A, ad), (Side::Y, yd), ad.rows == yd.rows)?;
        let b = decl.matrix(Side::B, b)?;
        let bd = b.dimensions();
        decl.conform((Side::B, bd), (Side::Y, yd), bd == yd)?;

        Ok(Self {
            y,
            a,
            x,
            b,
            condition: Formula::Tautology,
        })
    }

    #[must_use]
    pub fn y(&self) -> &Matrix {
        &self.y
    }

    #[must_use]
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    #[must_use]
    pub fn x(&self) -> &Matrix {
        &self.x
    }

    #[must_use]
    pub fn b(&self) -> &Matrix {
        &self.b
    }

    fn payload(&self) -> String {
        format!("{} := {} * {} + {}", self.y, self.a, self.x, self.b)
    }
}

/// Assigns a column of terms from the outputs of an opaque function.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackBoxEffect {
    lhs: Matrix,
    function: BlackBoxFunction,
    condition: Formula,
}

impl BlackBoxEffect {
    /// `lhs` must be a column vector whose k-th entry is headed by the
    /// function's k-th declared output symbol. The function is bound to the
    /// language of `lhs`.
    pub fn new(
        lhs: impl Into<Operand>,
        mut function: BlackBoxFunction,
    ) -> Result<Self, InvalidEffectError> {
        let lhs = lhs.into();
        let decl = Declaration::new(
            EffectKind::BlackBox,
            format!("{lhs} := {}", function.name()),
        );
        let lhs = decl.column(Side::Lhs, lhs)?;
        let language = lhs.language();
        function.bind_to_language(language);

        for (position, term) in lhs.column_entries(0).enumerate() {
            if term.language() != language {
                return Err(decl.reject(InvalidEffectReason::MixedLanguages {
                    position,
                    found: term.to_string(),
                }));
            }
            let Some(expected) = function.outputs().get(position) else {
                return Err(decl.reject(InvalidEffectReason::MissingOutput {
                    position,
                    found: term.to_string(),
                }));
            };
            if term.head_symbol() != Some(expected.as_str()) {
                return Err(decl.reject(InvalidEffectReason::OutputMismatch {
                    position,
                    found: term.to_string(),
                    expected: expected.to_string(),
                }));
            }
        }

        Ok(Self {
            lhs,
            function,
            condition: Formula::Tautology,
        })
    }

    #[must_use]
    pub fn lhs(&self) -> &Matrix {
        &self.lhs
    }

    #[must_use]
    pub fn function(&self) -> &BlackBoxFunction {
        &self.function
    }

    fn payload(&self) -> String {
        format!("{} := {}", self.lhs, self.function.name())
    }
}

fn joined<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

// ── Effect ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Add(AddEffect),
    Del(DelEffect),
    Functional(FunctionalEffect),
    Increase(IncreaseEffect),
    Procedural(ProceduralEffect),
    Choice(ChoiceEffect),
    Logical(LogicalEffect),
    Vectorised(VectorisedEffect),
    Linear(LinearEffect),
    BlackBox(BlackBoxEffect),
}

impl Effect {
    #[must_use]
    pub fn add(atom: Atom) -> Self {
        Self::Add(AddEffect::new(atom))
    }

    #[must_use]
    pub fn del(atom: Atom) -> Self {
        Self::Del(DelEffect::new(atom))
    }

    pub fn functional(
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        FunctionalEffect::new(lhs, rhs).map(Self::Functional)
    }

    pub fn increase(
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        IncreaseEffect::new(lhs, rhs).map(Self::Increase)
    }

    #[must_use]
    pub fn procedural(input: Vec<Term>, output: Vec<Term>) -> Self {
        Self::Procedural(ProceduralEffect::new(input, output))
    }

    pub fn choice(
        direction: OptimizationType,
        objective: impl Into<Operand>,
        variables: Vec<Term>,
    ) -> Result<Self, InvalidEffectError> {
        ChoiceEffect::new(direction, objective, variables).map(Self::Choice)
    }

    #[must_use]
    pub fn logical(formula: Formula) -> Self {
        Self::Logical(LogicalEffect::new(formula))
    }

    pub fn vectorised(
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        VectorisedEffect::new(lhs, rhs).map(Self::Vectorised)
    }

    pub fn linear(
        y: impl Into<Operand>,
        a: impl Into<Operand>,
        x: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Self, InvalidEffectError> {
        LinearEffect::new(y, a, x, b).map(Self::Linear)
    }

    pub fn black_box(
        lhs: impl Into<Operand>,
        function: BlackBoxFunction,
    ) -> Result<Self, InvalidEffectError> {
        BlackBoxEffect::new(lhs, function).map(Self::BlackBox)
    }

    /// Replaces the guarding condition. For a choice this sets its constraints.
    #[must_use]
    pub fn when(mut self, condition: Formula) -> Self {
        *self.condition_mut() = condition;
        self
    }

    #[must_use]
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Add(_) => EffectKind::Add,
            Self::Del(_) => EffectKind::Del,
            Self::Functional(_) => EffectKind::Functional,
            Self::Increase(_) => EffectKind::Increase,
            Self::Procedural(_) => EffectKind::Procedural,
            Self::Choice(_) => EffectKind::Choice,
            Self::Logical(_) => EffectKind::Logical,
            Self::Vectorised(_) => EffectKind::Vectorised,
            Self::Linear(_) => EffectKind::Linear,
            Self::BlackBox(_) => EffectKind::BlackBox,
        }
    }

    #[must_use]
    pub fn condition(&self) -> &Formula {
        match self {
            Self::Add(e) => &e.condition,
            Self::Del(e) => &e.condition,
            Self::Functional(e) => &e.condition,
            Self::Increase(e) => &e.condition,
            Self::Procedural(e) => &e.condition,
            Self::Choice(e) => &e.constraints,
            Self::Logical(e) => &e.condition,
            Self::Vectorised(e) => &e.condition,
            Self::Linear(e) => &e.condition,
            Self::BlackBox(e) => &e.condition,
        }
    }

    fn condition_mut(&mut self) -> &mut Formula {
        match self {
            Self::Add(e) => &mut e.condition,
            Self::Del(e) => &mut e.condition,
            Self::Functional(e) => &mut e.condition,
            Self::Increase(e) => &mut e.condition,
            Self::Procedural(e) => &mut e.condition,
            Self::Choice(e) => &mut e.constraints,
            Self::Logical(e) => &mut e.condition,
            Self::Vectorised(e) => &mut e.condition,
            Self::Linear(e) => &mut e.condition,
            Self::BlackBox(e) => &mut e.condition,
        }
    }

    /// The variant's payload, without the condition.
    #[must_use]
    pub fn payload(&self) -> String {
        match self {
            Self::Add(e) => e.payload(),
            Self::Del(e) => e.payload(),
            Self::Functional(e) => e.payload(),
            Self::Increase(e) => e.payload(),
            Self::Procedural(e) => e.payload(),
            Self::Choice(e) => e.payload(),
            Self::Logical(e) => e.payload(),
            Self::Vectorised(e) => e.payload(),
            Self::Linear(e) => e.payload(),
            Self::BlackBox(e) => e.payload(),
        }
    }

    /// `(condition -> payload)`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("({} -> {})", self.condition(), self.payload())
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Effect {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Add(AddEffect),
    Del(DelEffect),
    Functional(FunctionalEffect),
    Increase(IncreaseEffect),
    Procedural(ProceduralEffect),
    Choice(ChoiceEffect),
    Logical(LogicalEffect),
    Vectorised(VectorisedEffect),
    Linear(LinearEffect),
    BlackBox(BlackBoxEffect),
);
