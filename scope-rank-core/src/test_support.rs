//! Test-only weighers used by unit, behaviour and property tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{Weigher, Weight};

/// `Weigher` that looks selectors up in a fixed table.
///
/// The target scope is ignored; unknown selectors weigh [`Weight::ZERO`].
#[derive(Debug, Default, Clone)]
pub struct TableWeigher {
    weights: HashMap<String, Weight>,
}

impl TableWeigher {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selector with a normal-priority score, enabling chaining.
    #[must_use]
    pub fn with_score(self, selector: &str, score: u32) -> Self {
        self.with_weight(selector, Weight::normal(score))
    }

    /// Add a selector with an explicit weight, enabling chaining.
    #[must_use]
    pub fn with_weight(mut self, selector: &str, weight: Weight) -> Self {
        self.weights.insert(selector.to_owned(), weight);
        self
    }
}

impl Weigher for TableWeigher {
    fn weigh(&self, selector: &str, _scope: &str) -> Weight {
        self.weights.get(selector).copied().unwrap_or(Weight::ZERO)
    }
}

/// `Weigher` that counts how often it is consulted.
#[derive(Debug, Default)]
pub struct CountingWeigher<W> {
    inner: W,
    calls: AtomicUsize,
}

impl<W> CountingWeigher<W> {
    /// Wrap `inner`, starting the count at zero.
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `weigh` calls observed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<W: Weigher> Weigher for CountingWeigher<W> {
    fn weigh(&self, selector: &str, scope: &str) -> Weight {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.weigh(selector, scope)
    }
}
