use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LANGUAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Language`](crate::Language) instance.
///
/// Sorts, symbols and terms carry this token instead of a reference back to
/// their language. Two languages never share an id, even when they share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct LanguageId(u64);

impl LanguageId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_LANGUAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "language#{}", self.0)
    }
}
