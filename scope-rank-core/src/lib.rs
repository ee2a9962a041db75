//! Core types for ranking objects by TextMate scope selector matches.
//!
//! A [`Ranker`] orders arbitrary candidates by how well their selector
//! matches a fixed target [`Scope`]. Match quality comes from a pluggable
//! [`Weigher`] that returns totally ordered [`Weight`]s, where
//! [`Weight::ZERO`] means "no match". [`TokenPrefixWeigher`] is a small
//! structural weigher for hosts that have nothing better to plug in.
//!
//! # Examples
//!
//! ```
//! use scope_rank_core::{Ranker, TokenPrefixWeigher};
//!
//! let selectors = ["a", "a.b", "a.b.c", "a.b.c.d", "x.y"];
//! let ranker = Ranker::new("a.b.c", |s: &str| Some(s), TokenPrefixWeigher);
//!
//! let ranked = ranker.sort_and_filter(selectors.iter().copied());
//! assert_eq!(ranked, ["a.b.c", "a.b.c.d", "a.b", "a"]);
//! assert_eq!(ranker.max(selectors.iter().copied()), Some("a.b.c"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod ranker;
mod scope;
mod weigher;
mod weight;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use ranker::{Ranked, Ranker};
pub use scope::{Scope, tokens};
pub use weigher::{TokenPrefixWeigher, Weigher};
pub use weight::{Priority, Weight};
