//! Per-call transform options and ignore rules.

use std::fmt;
use std::sync::Arc;

use autoimport_common::ImportInfo;
use autoimport_resolver::Resolver;
use autoimport_scanner::CandidateSet;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;

use crate::error::TransformError;

/// `/pattern/flags`
static PATTERN_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(.+)/([a-z]*)$").expect("valid regex"));

/// Candidates to drop before resolution.
#[derive(Clone, Debug)]
pub enum IgnoreRule {
    /// Removes exactly this name.
    Name(String),
    /// Removes every candidate the pattern matches anywhere.
    Pattern(Regex),
}

impl IgnoreRule {
    pub fn name(name: impl Into<String>) -> Self {
        IgnoreRule::Name(name.into())
    }

    /// Read a config entry: `/pattern/flags` compiles to a pattern rule,
    /// anything else is a literal name.
    ///
    /// Of the JavaScript flags only `i`, `m` and `s` change matching; the
    /// rest are accepted and ignored.
    pub fn parse(entry: &str) -> Result<Self, TransformError> {
        let Some(caps) = PATTERN_LITERAL_RE.captures(entry) else {
            return Ok(IgnoreRule::Name(entry.to_string()));
        };

        let flags = &caps[2];
        RegexBuilder::new(&caps[1])
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map(IgnoreRule::Pattern)
            .map_err(|source| TransformError::InvalidIgnorePattern {
                pattern: entry.to_string(),
                source,
            })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            IgnoreRule::Name(name) => name == candidate,
            IgnoreRule::Pattern(pattern) => pattern.is_match(candidate),
        }
    }
}

impl From<Regex> for IgnoreRule {
    fn from(pattern: Regex) -> Self {
        IgnoreRule::Pattern(pattern)
    }
}

/// Remove ignored names from `candidates`, keeping scan order.
pub fn apply_ignore_rules(candidates: &mut CandidateSet, rules: &[IgnoreRule]) {
    for rule in rules {
        match rule {
            IgnoreRule::Name(name) => {
                candidates.shift_remove(name.as_str());
            }
            IgnoreRule::Pattern(pattern) => candidates.retain(|c| !pattern.is_match(c)),
        }
    }
}

/// Everything one [`crate::transform`] call needs besides the text.
#[derive(Clone, Default)]
pub struct TransformOptions {
    /// Direct name to import table, consulted after the cache.
    pub imports: FxHashMap<String, ImportInfo>,
    /// Produce a source map for changed files.
    pub source_map: bool,
    /// Consulted in order for names found in neither the cache nor `imports`.
    pub resolvers: Vec<Arc<dyn Resolver>>,
    pub ignore: Vec<IgnoreRule>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_import(mut self, name: impl Into<String>, info: ImportInfo) -> Self {
        self.imports.insert(name.into(), info);
        self
    }

    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolvers.push(Arc::new(resolver));
        self
    }

    pub fn with_ignore(mut self, rule: IgnoreRule) -> Self {
        self.ignore.push(rule);
        self
    }

    pub fn with_source_map(mut self, source_map: bool) -> Self {
        self.source_map = source_map;
        self
    }
}

impl fmt::Debug for TransformOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformOptions")
            .field("imports", &self.imports.len())
            .field("source_map", &self.source_map)
            .field("resolvers", &self.resolvers.len())
            .field("ignore", &self.ignore)
            .finish()
    }
}
