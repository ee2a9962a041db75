//! Weigh selectors against scopes.
//!
//! The [`Weigher`] trait turns a `(selector, scope)` pair into a [`Weight`].
//! Rankers depend only on this trait, so hosts can plug in full TextMate
//! selector semantics, a cached variant, or a stub in tests.

use std::sync::Arc;

use crate::Weight;
use crate::scope::tokens;

/// Calculate how well a selector matches a scope.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one weigher can be
/// shared by rankers on many threads. The method is infallible; implementers
/// return [`Weight::ZERO`] when the selector does not match or cannot be
/// understood.
///
/// Implementations must:
/// - Be pure: the same arguments always give the same weight.
/// - Return a positive weight only when the selector matches the scope.
/// - Never block on I/O.
///
/// # Examples
///
/// ```rust
/// use scope_rank_core::{Weigher, Weight};
///
/// struct ExactWeigher;
///
/// impl Weigher for ExactWeigher {
///     fn weigh(&self, selector: &str, scope: &str) -> Weight {
///         if selector == scope { Weight::normal(1) } else { Weight::ZERO }
///     }
/// }
///
/// assert!(ExactWeigher.weigh("source.rust", "source.rust").is_positive());
/// assert_eq!(ExactWeigher.weigh("source.rust", "source.java"), Weight::ZERO);
/// ```
pub trait Weigher: Send + Sync {
    /// Return the weight of `selector` against `scope`.
    fn weigh(&self, selector: &str, scope: &str) -> Weight;
}

impl<W: Weigher + ?Sized> Weigher for &W {
    fn weigh(&self, selector: &str, scope: &str) -> Weight {
        (**self).weigh(selector, scope)
    }
}

impl<W: Weigher + ?Sized> Weigher for Box<W> {
    fn weigh(&self, selector: &str, scope: &str) -> Weight {
        (**self).weigh(selector, scope)
    }
}

impl<W: Weigher + ?Sized> Weigher for Arc<W> {
    fn weigh(&self, selector: &str, scope: &str) -> Weight {
        (**self).weigh(selector, scope)
    }
}

/// Weigh by the number of leading scope segments a selector shares.
///
/// Both strings are split on `.` and whitespace. The weight is the length of
/// the common leading run of segments, so the run can never be longer than
/// the scope itself. Selectors that are more specific than the scope
/// therefore tie with an exact match. A selector sharing no leading segment
/// weighs [`Weight::ZERO`].
///
/// This is a structural approximation, not TextMate selector matching:
/// there is no support for exclusions, groups, or `L:`/`R:` markers.
///
/// # Examples
///
/// ```
/// use scope_rank_core::{TokenPrefixWeigher, Weigher, Weight};
///
/// let weigher = TokenPrefixWeigher;
/// let scope = "source.java keyword";
/// assert_eq!(weigher.weigh("source.java", scope), Weight::normal(2));
/// assert_eq!(weigher.weigh("source.java keyword.control", scope), Weight::normal(3));
/// assert_eq!(weigher.weigh("text.html", scope), Weight::ZERO);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenPrefixWeigher;

impl Weigher for TokenPrefixWeigher {
    fn weigh(&self, selector: &str, scope: &str) -> Weight {
        let shared = tokens(selector)
            .zip(tokens(scope))
            .take_while(|(wanted, found)| wanted == found)
            .count();
        Weight::normal(u32::try_from(shared).unwrap_or(u32::MAX))
    }
}
