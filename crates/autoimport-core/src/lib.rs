//! autoimport: inject import declarations for free identifiers.
//!
//! [`transform`] strips comments and literals from a source text, collects
//! identifier candidates, drops the ones the file binds itself, resolves the
//! rest through [`TransformOptions`] and prepends the resulting import
//! statements. `Ok(None)` means the text needs no change.

pub mod error;
pub use error::TransformError;

pub mod options;
pub use options::{IgnoreRule, TransformOptions, apply_ignore_rules};
#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;

pub mod config;
pub use config::{ResolverConfig, TransformConfig, load_config, parse_config};
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

pub mod transform;
pub use transform::{transform, transform_with_cache};

pub mod tracing_config;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;

pub use autoimport_common::{
    ImportInfo, LegacyImportInfo, ResolverOutput, SideEffectEntry, SideEffects, SourceMap,
};
pub use autoimport_emitter::TransformResult;
pub use autoimport_resolver::{
    DirectiveResolver, MapResolver, ResolutionCache, ResolveFuture, Resolver, ResolverKind,
};
