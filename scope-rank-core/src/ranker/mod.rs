//! Rank candidates by how well their selector matches a target scope.
//!
//! A [`Ranker`] is built per query site from three parts: the target scope,
//! a projection that reads a selector from each candidate, and a [`Weigher`].
//! It holds no mutable state, so one ranker can serve many threads when its
//! projection and weigher can.
//!
//! Candidates whose projection yields `None` are ranked as non-matches: they
//! weigh [`Weight::ZERO`] and the weigher is never consulted for them.
//! Panics raised by the projection or the weigher unwind through the ranker
//! unchanged; no partial result is returned.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use log::trace;

use crate::{Scope, Weigher, Weight};

/// A candidate paired with the weight it scored against the target.
#[derive(Debug, PartialEq, Eq)]
pub struct Ranked<'c, T: ?Sized> {
    /// Weight of the candidate's selector against the target scope.
    pub weight: Weight,
    /// The ranked candidate.
    pub candidate: &'c T,
}

impl<T: ?Sized> Clone for Ranked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Ranked<'_, T> {}

/// Order candidates by selector weight against a fixed target scope.
///
/// # Examples
///
/// ```
/// use scope_rank_core::{Ranker, TokenPrefixWeigher};
///
/// struct Rule {
///     selector: Option<&'static str>,
///     name: &'static str,
/// }
///
/// let rules = [
///     Rule { selector: Some("source.java"), name: "java" },
///     Rule { selector: Some("text.html"), name: "html" },
///     Rule { selector: Some("source.java keyword.control"), name: "control" },
///     Rule { selector: None, name: "unscoped" },
/// ];
/// let ranker = Ranker::new(
///     "source.java keyword",
///     |rule: &Rule| rule.selector,
///     TokenPrefixWeigher,
/// );
///
/// let names: Vec<&str> = ranker
///     .sort_and_filter(&rules)
///     .into_iter()
///     .map(|rule| rule.name)
///     .collect();
/// assert_eq!(names, ["control", "java"]);
/// assert_eq!(ranker.max(&rules).map(|rule| rule.name), Some("control"));
/// ```
pub struct Ranker<T: ?Sized, P, W> {
    target: Scope,
    projection: P,
    weigher: W,
    candidate: PhantomData<fn(&T)>,
}

impl<T, P, W> Ranker<T, P, W>
where
    T: ?Sized,
    P: Fn(&T) -> Option<&str>,
    W: Weigher,
{
    /// Build a ranker for `target`.
    ///
    /// `projection` reads the selector of a candidate and must be pure for
    /// the duration of each call. Pass the weigher by reference or behind an
    /// [`Arc`](std::sync::Arc) to share it between rankers.
    #[must_use]
    pub fn new(target: impl Into<Scope>, projection: P, weigher: W) -> Self {
        Self {
            target: target.into(),
            projection,
            weigher,
            candidate: PhantomData,
        }
    }

    /// The scope candidates are ranked against.
    #[must_use]
    pub const fn target(&self) -> &Scope {
        &self.target
    }

    /// Weigh a single candidate against the target scope.
    ///
    /// Returns [`Weight::ZERO`] when the projection yields no selector.
    #[must_use]
    pub fn weigh(&self, candidate: &T) -> Weight {
        (self.projection)(candidate).map_or(Weight::ZERO, |selector| {
            self.weigher.weigh(selector, self.target.as_str())
        })
    }

    /// Compare two candidates by weight in **ascending** order.
    ///
    /// `Less` means `first` matches the target worse than `second`. Use it
    /// with `sort_by` for worst-first ordering, or reach for
    /// [`Ranker::sort_and_filter`], which is best-first and drops
    /// non-matches.
    #[must_use]
    pub fn compare(&self, first: &T, second: &T) -> Ordering {
        self.weigh(first).cmp(&self.weigh(second))
    }

    /// Weigh, filter and order candidates, keeping their weights.
    ///
    /// The result holds only candidates with a positive weight, best match
    /// first. Candidates of equal weight keep their encounter order.
    #[must_use]
    pub fn ranked<'c, I>(&self, candidates: I) -> Vec<Ranked<'c, T>>
    where
        I: IntoIterator<Item = &'c T>,
    {
        let mut ranked: Vec<Ranked<'c, T>> = candidates
            .into_iter()
            .map(|candidate| Ranked {
                weight: self.weigh(candidate),
                candidate,
            })
            .collect();
        let weighed = ranked.len();
        ranked.retain(|entry| entry.weight.is_positive());
        // `sort_by` is stable, which keeps ties in encounter order.
        ranked.sort_by(|left, right| right.weight.cmp(&left.weight));
        trace!(
            "ranked {} of {weighed} candidates against `{}`",
            ranked.len(),
            self.target
        );
        ranked
    }

    /// Keep the candidates that match the target, best match first.
    ///
    /// Ties keep their encounter order. The input is left untouched.
    #[must_use]
    pub fn sort_and_filter<'c, I>(&self, candidates: I) -> Vec<&'c T>
    where
        I: IntoIterator<Item = &'c T>,
    {
        self.ranked(candidates)
            .into_iter()
            .map(|entry| entry.candidate)
            .collect()
    }

    /// Return the best matching candidate, if any matches at all.
    ///
    /// When several candidates share the top weight the first one
    /// encountered wins.
    #[must_use]
    pub fn max<'c, I>(&self, candidates: I) -> Option<&'c T>
    where
        I: IntoIterator<Item = &'c T>,
    {
        let mut best_weight = Weight::ZERO;
        let mut best = None;
        for candidate in candidates {
            let weight = self.weigh(candidate);
            if weight.is_positive() && weight > best_weight {
                best_weight = weight;
                best = Some(candidate);
            }
        }
        best
    }
}

impl<T: ?Sized, P, W: fmt::Debug> fmt::Debug for Ranker<T, P, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranker")
            .field("target", &self.target)
            .field("weigher", &self.weigher)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, P: Clone, W: Clone> Clone for Ranker<T, P, W> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            projection: self.projection.clone(),
            weigher: self.weigher.clone(),
            candidate: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests;
