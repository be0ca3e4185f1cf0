//! Candidate resolution
//!
//! Turns the ordered candidate set into a [`ModuleGroup`]. Candidates are
//! processed strictly one after another: every resolver future is awaited
//! before the next candidate is looked at, which keeps cache writes and
//! module order identical across runs.

use std::sync::Arc;

use autoimport_common::{ImportBinding, ImportInfo};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, trace};

use crate::cache::ResolutionCache;
use crate::resolver::{DIRECTIVE_PREFIX, Resolver, ResolverKind};

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A resolver failed; the whole transform is abandoned.
    #[error("resolver failed for `{name}`")]
    Resolver {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Bindings grouped by origin module, in first-registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleGroup {
    modules: IndexMap<String, SmallVec<[ImportBinding; 2]>>,
}

impl ModuleGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `binding` to its module, creating the module entry on first
    /// use.
    pub fn add(&mut self, binding: ImportBinding) {
        self.modules
            .entry(binding.from.clone())
            .or_default()
            .push(binding);
    }

    pub fn get(&self, module: &str) -> Option<&[ImportBinding]> {
        self.modules.get(module).map(|bindings| bindings.as_slice())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ImportBinding])> {
        self.modules
            .iter()
            .map(|(module, bindings)| (module.as_str(), bindings.as_slice()))
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }
}

/// Resolve every candidate and group the resulting bindings.
///
/// A candidate that nothing resolves, or whose record has an empty `from`,
/// contributes no primary binding. Side-effect entries of a found record
/// are registered either way.
pub async fn resolve_candidates(
    candidates: &IndexSet<String>,
    imports: &FxHashMap<String, ImportInfo>,
    cache: &mut ResolutionCache,
    resolvers: &[Arc<dyn Resolver>],
) -> Result<ModuleGroup, ResolveError> {
    let mut group = ModuleGroup::new();

    for name in candidates {
        let info = if let Some(cached) = cache.get(name) {
            trace!(name = %name, "resolution cache hit");
            Some(cached.clone())
        } else if let Some(direct) = imports.get(name) {
            Some(direct.clone())
        } else if !resolvers.is_empty() {
            let resolved = first_matched_resolver(resolvers, name).await?;
            if let Some(info) = &resolved {
                cache.insert(name.clone(), info.clone());
            }
            resolved
        } else {
            None
        };

        let Some(info) = info else {
            continue;
        };

        if info.has_origin() {
            trace!(name = %name, from = %info.from, "resolved");
            group.add(info.binding_for(name));
        }

        for binding in info.side_effect_bindings() {
            if !binding.from.is_empty() {
                group.add(binding);
            }
        }
    }

    debug!(
        candidates = candidates.len(),
        modules = group.len(),
        "resolved candidates"
    );
    Ok(group)
}

/// Ask each resolver in order; the first non-empty answer wins.
///
/// Directive resolvers are skipped unless the current query carries the
/// directive prefix. Once a directive resolver strips the prefix, every
/// later resolver in the chain is queried with the stripped name.
pub async fn first_matched_resolver(
    resolvers: &[Arc<dyn Resolver>],
    name: &str,
) -> Result<Option<ImportInfo>, ResolveError> {
    let mut query = name;

    for resolver in resolvers {
        if resolver.kind() == ResolverKind::Directive {
            match query.strip_prefix(DIRECTIVE_PREFIX) {
                Some(stripped) => query = stripped,
                None => continue,
            }
        }

        let answer = resolver
            .resolve(query)
            .await
            .map_err(|source| ResolveError::Resolver {
                name: name.to_string(),
                source,
            })?;

        if let Some(output) = answer.filter(|output| !output.is_empty()) {
            trace!(name = %name, query = %query, kind = ?resolver.kind(), "resolver matched");
            return Ok(Some(output.normalize()));
        }
    }

    Ok(None)
}
