//! Optimization direction and problem-level metric.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::term::CompoundTerm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationType {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown optimization direction '{0}', expected 'minimize' or 'maximize'")]
pub struct OptimizationTypeParseError(String);

impl OptimizationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

impl fmt::Display for OptimizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationType {
    type Err = OptimizationTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimize" => Ok(Self::Minimize),
            "maximize" => Ok(Self::Maximize),
            _ => Err(OptimizationTypeParseError(s.to_owned())),
        }
    }
}

/// Objective of a planning problem: a function application and a direction.
///
/// Used at problem scope; effects never hold one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptimizationMetric {
    expression: CompoundTerm,
    direction: OptimizationType,
}

impl OptimizationMetric {
    #[must_use]
    pub fn new(expression: CompoundTerm, direction: OptimizationType) -> Self {
        Self {
            expression,
            direction,
        }
    }

    #[must_use]
    pub fn expression(&self) -> &CompoundTerm {
        &self.expression
    }

    #[must_use]
    pub fn direction(&self) -> OptimizationType {
        self.direction
    }
}

impl fmt::Display for OptimizationMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.direction, self.expression)
    }
}
