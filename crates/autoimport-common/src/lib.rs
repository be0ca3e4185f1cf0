//! Common types and utilities for the autoimport transform.
//!
//! This crate provides the foundational types shared by every stage:
//! - Import records (`ImportInfo`, `ImportBinding`, `SideEffects`)
//! - Resolver answers in every accepted shape (`ResolverOutput`)
//! - Source map generation (`SourceMapGenerator`, `SourceMap`)

// Import records - resolved origins, bindings and side-effect entries
pub mod import_info;
pub use import_info::{
    ImportBinding, ImportInfo, LegacyImportInfo, ResolverOutput, SideEffectEntry, SideEffects,
};
#[cfg(test)]
#[path = "tests/import_info_tests.rs"]
mod import_info_tests;

// Source Map generation
pub mod source_map;
pub use source_map::{SourceMap, SourceMapGenerator};
#[cfg(test)]
#[path = "tests/source_map_tests.rs"]
mod source_map_tests;
