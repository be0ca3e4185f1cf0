//! Local-binding exclusion
//!
//! Names the file binds itself must not be auto-imported. Three patterns
//! are searched on the scan surface:
//!
//! - `import <bindings> from`
//! - `function <name>(`
//! - `const|let|var <pattern>` where the pattern is `[...]`, `{...}` or
//!   anything up to `=`, `;` or a newline
//!
//! Captures are split on `, [ ] { }` and newlines. Each piece is reduced to
//! the local name it introduces: `x as y` gives `y`, an object-pattern
//! entry `key: local` gives `local`, a type annotation `x: T` gives `x`,
//! and `= default` / `...rest` decorations are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CandidateSet;

static IMPORT_BINDINGS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bimport\s*([\s\S]+?)\s*from\b").unwrap());

static FUNCTION_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfunction\s*([\w$]+?)\s*\(").unwrap());

static VARIABLE_PATTERN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:const|let|var)\s+?(\[[\s\S]*?\]|\{[\s\S]*?\}|[\s\S]+?)\s*?[=;\n]").unwrap()
});

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\[\]{}\n]").unwrap());

static IMPORT_AS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*\sas\s+").unwrap());

/// Every name bound locally by an import, a function declaration or a
/// variable declaration, in match order. May contain duplicates.
pub fn local_bindings(surface: &str) -> Vec<String> {
    let mut names = Vec::new();
    for re in [&*IMPORT_BINDINGS_RE, &*FUNCTION_NAME_RE, &*VARIABLE_PATTERN_RE] {
        for caps in re.captures_iter(surface) {
            if let Some(capture) = caps.get(1) {
                push_local_names(capture.as_str(), &mut names);
            }
        }
    }
    names
}

/// Remove locally bound names from `candidates`, keeping the order of the
/// rest. Returns the number of candidates removed.
pub fn exclude_local_bindings(surface: &str, candidates: &mut CandidateSet) -> usize {
    if candidates.is_empty() {
        return 0;
    }
    let before = candidates.len();
    for name in local_bindings(surface) {
        candidates.shift_remove(&name);
    }
    before - candidates.len()
}

fn push_local_names(capture: &str, out: &mut Vec<String>) {
    let object_pattern = capture.trim_start().starts_with('{');

    for piece in SEPARATOR_RE.split(capture) {
        let piece = match IMPORT_AS_RE.find(piece) {
            Some(m) => &piece[m.end()..],
            None => piece,
        };
        let piece = if object_pattern {
            piece.rsplit(':').next().unwrap_or(piece)
        } else {
            piece.split(':').next().unwrap_or(piece)
        };
        let piece = piece.split('=').next().unwrap_or(piece);
        let name = piece.trim().trim_start_matches("...").trim();
        if !name.is_empty() {
            out.push(name.to_string());
        }
    }
}
