use std::fmt;
use std::ops::Deref;

use serde::Serialize;
use thiserror::Error;

/// A name guaranteed to be non-empty (after trimming).
///
/// Every sort, predicate, function, constant and variable is named by a
/// `Symbol`. The check happens once, here, so holders never re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("symbol must not be empty")]
pub struct EmptySymbolError;

impl Symbol {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptySymbolError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptySymbolError)
        } else {
            Ok(Self(value))
        }
    }

    /// For built-in names known to be non-empty.
    pub(crate) fn new_unchecked(value: &str) -> Self {
        debug_assert!(!value.trim().is_empty(), "built-in symbols are non-empty");
        Self(value.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = EmptySymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = EmptySymbolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

impl Deref for Symbol {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
