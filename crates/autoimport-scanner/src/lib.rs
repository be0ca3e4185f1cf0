//! Candidate discovery for autoimport.
//!
//! Everything here works on text alone and is deliberately approximate:
//! there is no tokenizer and no AST. The pipeline is
//!
//! 1. [`strip::strip_comments_and_strings`] blanks comments and literals,
//! 2. [`identifiers::scan_identifiers`] collects identifier-like runs,
//! 3. [`bindings::exclude_local_bindings`] drops names the file binds itself.
//!
//! Each stage is total over any input. Known misses (nested template
//! literals, division mistaken for a regex literal, identifiers inside
//! unterminated strings) are accepted.

use indexmap::IndexSet;

pub mod strip;
pub use strip::strip_comments_and_strings;
#[cfg(test)]
#[path = "tests/strip_tests.rs"]
mod strip_tests;

pub mod identifiers;
pub use identifiers::scan_identifiers;
#[cfg(test)]
#[path = "tests/identifiers_tests.rs"]
mod identifiers_tests;

pub mod bindings;
pub use bindings::{exclude_local_bindings, local_bindings};
#[cfg(test)]
#[path = "tests/bindings_tests.rs"]
mod bindings_tests;

/// Distinct candidate names in scan order.
pub type CandidateSet = IndexSet<String>;
