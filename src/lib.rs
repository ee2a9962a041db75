//! Facade crate for ranking objects by TextMate scope selector matches.
//!
//! This crate re-exports the core ranking types and exposes the caching
//! weigher behind the `cache` feature.

#![forbid(unsafe_code)]

pub use scope_rank_core::{
    Priority, Ranked, Ranker, Scope, TokenPrefixWeigher, Weigher, Weight, tokens,
};

#[cfg(feature = "test-support")]
pub use scope_rank_core::test_support;

#[cfg(feature = "cache")]
pub use scope_rank_cache::{CacheConfig, CacheConfigError, CachePolicy, CacheStats, CachingWeigher};
