use autoimport_emitter::{TransformResult, prepend_imports, synthesize_imports};
use autoimport_resolver::{ResolutionCache, resolve_candidates};
use autoimport_scanner::{exclude_local_bindings, scan_identifiers, strip_comments_and_strings};
use tracing::debug;

use crate::error::TransformError;
use crate::options::{TransformOptions, apply_ignore_rules};

/// Transform `code` with a fresh resolution cache.
///
/// `id` only names the source in the generated map.
pub async fn transform(
    code: &str,
    id: &str,
    options: &TransformOptions,
) -> Result<Option<TransformResult>, TransformError> {
    let mut cache = ResolutionCache::new();
    transform_with_cache(code, id, options, &mut cache).await
}

/// Transform `code`, reading and extending `cache`.
///
/// Returns `Ok(None)` when no candidate survives scanning, ignore rules and
/// local-binding exclusion, or when none of the survivors resolves.
#[tracing::instrument(level = "debug", skip(code, options, cache), fields(len = code.len()))]
pub async fn transform_with_cache(
    code: &str,
    id: &str,
    options: &TransformOptions,
    cache: &mut ResolutionCache,
) -> Result<Option<TransformResult>, TransformError> {
    let surface = strip_comments_and_strings(code);
    let mut candidates = scan_identifiers(&surface);
    apply_ignore_rules(&mut candidates, &options.ignore);
    if candidates.is_empty() {
        debug!("no candidates");
        return Ok(None);
    }

    let excluded = exclude_local_bindings(&surface, &mut candidates);
    if candidates.is_empty() {
        debug!(excluded, "every candidate is bound locally");
        return Ok(None);
    }

    let group =
        resolve_candidates(&candidates, &options.imports, cache, &options.resolvers).await?;
    let Some(block) = synthesize_imports(&group) else {
        debug!(candidates = candidates.len(), "nothing resolved");
        return Ok(None);
    };

    debug!(modules = group.len(), "injecting imports");
    Ok(Some(prepend_imports(code, id, &block, options.source_map)))
}
