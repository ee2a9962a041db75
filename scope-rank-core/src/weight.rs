//! Totally ordered match weights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precedence of a selector match, compared before the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Outranked by every normal match.
    Low,
    /// The precedence of an unmarked selector.
    #[default]
    Normal,
    /// Outranks every normal match.
    High,
}

/// How well a selector matches a scope.
///
/// Weights compare by [`Priority`] first and by score second. A score of zero
/// always collapses to [`Weight::ZERO`], the smallest weight, which means "no
/// match". Any other weight is *positive*.
///
/// # Examples
///
/// ```
/// use scope_rank_core::{Priority, Weight};
///
/// let shallow = Weight::new(1, Priority::Normal);
/// let deep = Weight::new(3, Priority::Normal);
/// assert!(deep > shallow);
/// assert!(Weight::new(1, Priority::High) > deep);
/// assert_eq!(Weight::new(0, Priority::High), Weight::ZERO);
/// assert!(!Weight::ZERO.is_positive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "WeightRepr", into = "WeightRepr"))]
pub struct Weight {
    // Field order drives the derived ordering.
    priority: Priority,
    score: u32,
}

impl Weight {
    /// The "no match" weight. No weight compares below it.
    pub const ZERO: Self = Self {
        priority: Priority::Low,
        score: 0,
    };

    /// Build a weight, normalising zero scores to [`Weight::ZERO`].
    #[must_use]
    pub const fn new(score: u32, priority: Priority) -> Self {
        if score == 0 {
            Self::ZERO
        } else {
            Self { priority, score }
        }
    }

    /// Build a weight with [`Priority::Normal`].
    #[must_use]
    pub const fn normal(score: u32) -> Self {
        Self::new(score, Priority::Normal)
    }

    /// The numeric part of the weight.
    #[must_use]
    pub const fn score(self) -> u32 {
        self.score
    }

    /// The precedence part of the weight.
    #[must_use]
    pub const fn priority(self) -> Priority {
        self.priority
    }

    /// Report whether the weight denotes a match (`self > Weight::ZERO`).
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.score > 0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct WeightRepr {
    score: u32,
    #[serde(default)]
    priority: Priority,
}

#[cfg(feature = "serde")]
impl From<WeightRepr> for Weight {
    fn from(repr: WeightRepr) -> Self {
        Self::new(repr.score, repr.priority)
    }
}

#[cfg(feature = "serde")]
impl From<Weight> for WeightRepr {
    fn from(weight: Weight) -> Self {
        Self {
            score: weight.score,
            priority: weight.priority,
        }
    }
}
