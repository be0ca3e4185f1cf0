//! Import statement rendering
//!
//! One statement per module, in [`ModuleGroup`] order:
//!
//! ```text
//! import * as ns, { a, b as c } from 'module';
//! import 'side-effect-only';
//! ```
//!
//! Namespace parts come first, then a single braced group. Bindings without
//! a local alias render nothing; a module left with no parts becomes a bare
//! side-effect import.

use autoimport_common::ImportBinding;
use autoimport_resolver::ModuleGroup;

/// Render every module of `group` and concatenate the statements.
///
/// Returns `None` for an empty group.
pub fn synthesize_imports(group: &ModuleGroup) -> Option<String> {
    if group.is_empty() {
        return None;
    }

    let mut block = String::new();
    for (module, bindings) in group.iter() {
        render_module(&mut block, module, bindings);
    }
    Some(block)
}

/// Append the statement for `module` to `out`.
pub fn render_module(out: &mut String, module: &str, bindings: &[ImportBinding]) {
    let mut parts: Vec<String> = Vec::new();
    let mut named: Vec<String> = Vec::new();

    for binding in bindings {
        let Some(alias) = binding.alias.as_deref() else {
            continue;
        };
        if binding.is_namespace() {
            parts.push(format!("* as {alias}"));
            continue;
        }
        let imported = binding.imported_name();
        if imported == alias {
            named.push(alias.to_string());
        } else {
            named.push(format!("{imported} as {alias}"));
        }
    }

    if !named.is_empty() {
        parts.push(format!("{{ {} }}", named.join(", ")));
    }

    out.push_str("import ");
    if !parts.is_empty() {
        out.push_str(&parts.join(", "));
        out.push_str(" from ");
    }
    out.push('\'');
    out.push_str(module);
    out.push_str("';");
}
