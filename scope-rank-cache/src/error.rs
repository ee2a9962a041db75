//! Error types raised while configuring the weight cache.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a [`CacheConfig`](crate::CacheConfig) is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheConfigError {
    /// A bounded cache was configured to hold no entries.
    #[error("bounded cache must hold at least one entry")]
    ZeroCapacity,
}
