//! Text I/O ports for FSTRIPS models.
//!
//! [`ModelReader`] and [`ModelWriter`] are the boundary between model-building
//! code and a concrete syntax. The PDDL adapters exist so callers can be wired
//! against them, but no PDDL grammar is implemented: both always fail with
//! [`PddlError::NotImplemented`].

use std::fmt;
use std::path::{Path, PathBuf};

use fstrips_types::{Effect, Language, OptimizationMetric, UniversalEffect};
use thiserror::Error;

/// A language together with the effects and metric declared over it.
#[derive(Debug)]
pub struct ParsedModel {
    pub language: Language,
    pub effects: Vec<Effect>,
    pub universal_effects: Vec<UniversalEffect>,
    pub metric: Option<OptimizationMetric>,
}

impl ParsedModel {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            effects: Vec::new(),
            universal_effects: Vec::new(),
            metric: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Write => "write",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PddlError {
    #[error("pddl {operation} of {} is not implemented", .path.display())]
    NotImplemented { operation: Operation, path: PathBuf },
}

pub trait ModelReader {
    type Error;

    fn read(&self) -> Result<ParsedModel, Self::Error>;
}

pub trait ModelWriter {
    type Error;

    fn write(&self, model: &ParsedModel) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone)]
pub struct PddlReader {
    path: PathBuf,
}

impl PddlReader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelReader for PddlReader {
    type Error = PddlError;

    fn read(&self) -> Result<ParsedModel, PddlError> {
        tracing::warn!(path = %self.path.display(), "pddl reader is a stub");
        Err(PddlError::NotImplemented {
            operation: Operation::Read,
            path: self.path.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PddlWriter {
    path: PathBuf,
}

impl PddlWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelWriter for PddlWriter {
    type Error = PddlError;

    fn write(&self, model: &ParsedModel) -> Result<(), PddlError> {
        tracing::warn!(
            path = %self.path.display(),
            language = %model.language,
            effects = model.effects.len(),
            "pddl writer is a stub"
        );
        Err(PddlError::NotImplemented {
            operation: Operation::Write,
            path: self.path.clone(),
        })
    }
}
