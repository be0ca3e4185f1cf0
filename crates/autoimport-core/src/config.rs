//! Transform configuration files
//!
//! `autoimport.json` holds a serialized [`TransformConfig`]. Comments and
//! trailing commas are accepted.
//!
//! ```jsonc
//! {
//!   "imports": { "ref": { "from": "vue", "name": "ref" } },
//!   "sourceMap": true,
//!   "ignore": ["h", "/^use[A-Z]/"],
//!   "resolvers": [
//!     { "type": "directive", "entries": { "Focus": "directives/focus" } },
//!   ],
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use autoimport_common::{ImportInfo, ResolverOutput};
use autoimport_resolver::{MapResolver, Resolver, ResolverKind};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::options::{IgnoreRule, TransformOptions};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    #[serde(default)]
    pub imports: FxHashMap<String, ImportInfo>,
    #[serde(default)]
    pub source_map: bool,
    /// Literal names, or `/pattern/flags` regexes.
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub resolvers: Vec<ResolverConfig>,
}

/// A table-backed resolver declared in configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(rename = "type", default)]
    pub kind: ResolverKind,
    #[serde(default)]
    pub entries: FxHashMap<String, ResolverOutput>,
}

impl TransformConfig {
    /// Compile ignore patterns and build the declared resolvers.
    pub fn into_options(self) -> Result<TransformOptions, TransformError> {
        let ignore = self
            .ignore
            .iter()
            .map(|entry| IgnoreRule::parse(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let resolvers = self
            .resolvers
            .into_iter()
            .map(|resolver| {
                Arc::new(MapResolver::with_entries(resolver.kind, resolver.entries))
                    as Arc<dyn Resolver>
            })
            .collect();

        Ok(TransformOptions {
            imports: self.imports,
            source_map: self.source_map,
            resolvers,
            ignore,
        })
    }
}

pub fn parse_config(source: &str) -> Result<TransformConfig> {
    let json = drop_trailing_commas(&strip_jsonc_comments(source));
    serde_json::from_str(&json).context("failed to parse autoimport config JSON")
}

pub fn load_config(path: &Path) -> Result<TransformConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum JsoncState {
    Code,
    String { escaped: bool },
    LineComment,
    BlockComment,
}

/// Remove `//` and `/* */` comments outside strings. Newlines inside
/// comments are kept so error positions still line up.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut state = JsoncState::Code;

    while let Some(ch) = chars.next() {
        state = match state {
            JsoncState::Code => match (ch, chars.peek()) {
                ('/', Some('/')) => {
                    chars.next();
                    JsoncState::LineComment
                }
                ('/', Some('*')) => {
                    chars.next();
                    JsoncState::BlockComment
                }
                _ => {
                    out.push(ch);
                    if ch == '"' {
                        JsoncState::String { escaped: false }
                    } else {
                        JsoncState::Code
                    }
                }
            },
            JsoncState::String { escaped } => {
                out.push(ch);
                match ch {
                    _ if escaped => JsoncState::String { escaped: false },
                    '\\' => JsoncState::String { escaped: true },
                    '"' => JsoncState::Code,
                    _ => state,
                }
            }
            JsoncState::LineComment => {
                if ch == '\n' {
                    out.push(ch);
                    JsoncState::Code
                } else {
                    state
                }
            }
            JsoncState::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    JsoncState::Code
                } else {
                    if ch == '\n' {
                        out.push(ch);
                    }
                    state
                }
            }
        };
    }

    out
}

/// Drop a `,` whose next non-whitespace char closes an object or array.
fn drop_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in input.char_indices() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == ',' {
            let next = input[idx + 1..].chars().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }

        in_string = ch == '"';
        out.push(ch);
    }

    out
}
