//! Resolution of candidate identifiers to import origins.
//!
//! Lookup order for every candidate is fixed: the caller-owned
//! [`ResolutionCache`], then the direct `imports` table, then the
//! [`Resolver`] chain (first non-empty answer wins). Answers from the chain
//! are normalized and written back into the cache.

pub mod cache;
pub use cache::ResolutionCache;
#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod cache_tests;

pub mod resolver;
pub use resolver::{DirectiveResolver, MapResolver, ResolveFuture, Resolver, ResolverKind};
#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod resolver_tests;

pub mod engine;
pub use engine::{ModuleGroup, ResolveError, first_matched_resolver, resolve_candidates};
#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod engine_tests;
