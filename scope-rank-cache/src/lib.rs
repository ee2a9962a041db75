//! Memoising weigher for the scope ranker.
//!
//! [`CachingWeigher`] wraps any [`Weigher`](scope_rank_core::Weigher) and
//! remembers the weight of every `(selector, scope)` pair it has seen, in a
//! concurrent map shared by all threads. Rankers cannot tell a cached weigher
//! from the one it wraps.
//!
//! Retention is controlled by [`CacheConfig`]: the default keeps every
//! weight, while a bounded policy flushes the whole cache whenever it fills
//! up. Grammar-sized workloads (a few thousand selectors against a handful of
//! active scopes) fit comfortably in an unbounded cache.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use scope_rank_cache::{CacheConfig, CachingWeigher};
//! use scope_rank_core::{Ranker, TokenPrefixWeigher};
//!
//! let weigher = Arc::new(
//!     CachingWeigher::with_config(TokenPrefixWeigher, CacheConfig::bounded(1024))
//!         .expect("bounded config is valid"),
//! );
//! let selectors = ["source", "source.java", "text.html"];
//!
//! for target in ["source.java", "source.java keyword"] {
//!     let ranker = Ranker::new(target, |s: &str| Some(s), Arc::clone(&weigher));
//!     assert_eq!(ranker.max(selectors.iter().copied()), Some("source.java"));
//! }
//! assert_eq!(weigher.stats().misses, 6);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod caching;
mod config;
mod error;

pub use caching::{CacheStats, CachingWeigher};
pub use config::{CacheConfig, CachePolicy};
pub use error::CacheConfigError;
