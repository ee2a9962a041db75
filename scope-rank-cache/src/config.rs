//! Public configuration types for the weight cache.
#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CacheConfigError;

/// How many weights a [`CachingWeigher`](crate::CachingWeigher) may retain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CachePolicy {
    /// Keep every weight ever computed.
    #[default]
    Unbounded,
    /// Keep at most `max_entries` weights. Inserting into a full cache
    /// flushes it first.
    Bounded {
        /// Upper bound on retained entries.
        max_entries: usize,
    },
}

/// Tunable settings for a [`CachingWeigher`](crate::CachingWeigher).
///
/// # Examples
///
/// ```
/// use scope_rank_cache::{CacheConfig, CachePolicy};
///
/// let config = CacheConfig::bounded(512).validate().expect("valid config");
/// assert_eq!(config.policy, CachePolicy::Bounded { max_entries: 512 });
/// assert!(CacheConfig::bounded(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CacheConfig {
    /// Retention policy for memoised weights.
    pub policy: CachePolicy,
}

impl CacheConfig {
    /// Shortcut for a bounded cache holding at most `max_entries` weights.
    #[must_use]
    pub const fn bounded(max_entries: usize) -> Self {
        Self {
            policy: CachePolicy::Bounded { max_entries },
        }
    }

    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`CacheConfigError::ZeroCapacity`] when a bounded policy
    /// allows no entries.
    pub const fn validate(self) -> Result<Self, CacheConfigError> {
        match self.policy {
            CachePolicy::Bounded { max_entries: 0 } => Err(CacheConfigError::ZeroCapacity),
            CachePolicy::Bounded { .. } | CachePolicy::Unbounded => Ok(self),
        }
    }
}
