//! Immutable TextMate scope names.
//!
//! A [`Scope`] holds a dotted, space-separated scope path such as
//! `source.java keyword.control`, or a selector written in the same shape.
//! The ranker treats it as opaque; only weighers look inside via
//! [`Scope::tokens`].

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cheaply clonable scope or selector string.
///
/// # Examples
///
/// ```
/// use scope_rank_core::Scope;
///
/// let scope = Scope::from("source.java keyword.control");
/// let tokens: Vec<&str> = scope.tokens().collect();
/// assert_eq!(tokens, ["source", "java", "keyword", "control"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Scope(Arc<str>);

impl Scope {
    /// Wrap a scope string.
    #[must_use]
    pub fn new(scope: impl AsRef<str>) -> Self {
        Self(Arc::from(scope.as_ref()))
    }

    /// Borrow the raw scope text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the non-empty segments of the scope.
    ///
    /// Segments are separated by `.` and by whitespace, so
    /// `"source.java  keyword"` yields `source`, `java`, `keyword`.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        tokens(&self.0)
    }
}

/// Split raw scope text into its non-empty segments.
///
/// Shared by [`Scope::tokens`] and weighers that work on borrowed strings.
pub fn tokens(scope: &str) -> impl Iterator<Item = &str> {
    scope
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for Scope {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&String> for Scope {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}
