//! Prepend edit
//!
//! The synthesized block is inserted at offset zero; every original byte
//! keeps its relative position. The optional source map records one
//! mapping per non-empty original line, pointing back at column 0 of that
//! line.

use autoimport_common::{SourceMap, SourceMapGenerator};
use memchr::memchr_iter;
use serde::Serialize;
use tracing::trace;

/// Rewritten text plus its source map, when one was requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub code: String,
    pub map: Option<SourceMap>,
}

/// Prepend `block` to `code`.
///
/// With `source_map` set, the map names `id` as its only source and embeds
/// `code` as that source's content.
pub fn prepend_imports(code: &str, id: &str, block: &str, source_map: bool) -> TransformResult {
    let mut out = String::with_capacity(block.len() + code.len());
    out.push_str(block);
    out.push_str(code);

    let map = source_map.then(|| prepend_map(code, id, block));
    trace!(id, prefix_len = block.len(), with_map = map.is_some(), "prepended imports");

    TransformResult { code: out, map }
}

fn prepend_map(code: &str, id: &str, block: &str) -> SourceMap {
    let mut generator = SourceMapGenerator::new();
    let source = generator.add_source_with_content(id.to_string(), code.to_string());

    let (prefix_lines, prefix_column) = prefix_extent(block);
    let bytes = code.as_bytes();
    let line_starts =
        std::iter::once(0).chain(memchr_iter(b'\n', bytes).map(|newline| newline + 1));

    for (line, start) in line_starts.enumerate() {
        if start >= bytes.len() || bytes[start] == b'\n' {
            continue;
        }
        let line = line as u32;
        let column = if line == 0 { prefix_column } else { 0 };
        generator.add_simple_mapping(prefix_lines + line, column, source, line, 0);
    }

    generator.generate()
}

/// Newlines in `block`, and the UTF-16 length of its last line.
fn prefix_extent(block: &str) -> (u32, u32) {
    let newlines = memchr_iter(b'\n', block.as_bytes()).count() as u32;
    let last_line = block.rsplit('\n').next().unwrap_or_default();
    let column = last_line.encode_utf16().count() as u32;
    (newlines, column)
}
