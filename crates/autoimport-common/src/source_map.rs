//! Source Map generation
//!
//! Builds version 3 source maps. Mappings are collected as absolute
//! positions and delta-encoded with base64 VLQ when the map is generated.

use serde::{Deserialize, Serialize};

pub mod vlq;

/// A single mapping from a generated position to an original one.
/// Lines and columns are zero-based; columns count UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mapping {
    pub generated_line: u32,
    pub generated_column: u32,
    pub source_index: u32,
    pub original_line: u32,
    pub original_column: u32,
    pub name_index: Option<u32>,
}

/// A generated version 3 source map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub sources: Vec<String>,
    pub sources_content: Vec<Option<String>>,
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    /// Serialize to compact JSON.
    pub fn to_json(&self) -> String {
        // Plain strings and numbers only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// `data:` URL carrying the base64-encoded JSON.
    pub fn to_url(&self) -> String {
        format!(
            "data:application/json;charset=utf-8;base64,{}",
            base64_encode(self.to_json().as_bytes())
        )
    }

    /// Trailing `//# sourceMappingURL=` comment for inline maps.
    pub fn to_inline_comment(&self) -> String {
        format!("//# sourceMappingURL={}", self.to_url())
    }
}

/// Incremental source map builder.
#[derive(Debug, Default)]
pub struct SourceMapGenerator {
    file: Option<String>,
    sources: Vec<String>,
    sources_content: Vec<Option<String>>,
    names: Vec<String>,
    mappings: Vec<Mapping>,
}

impl SourceMapGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose map records the generated file name.
    pub fn with_file(file: String) -> Self {
        SourceMapGenerator {
            file: Some(file),
            ..Default::default()
        }
    }

    pub fn add_source(&mut self, source: String) -> u32 {
        self.sources.push(source);
        self.sources_content.push(None);
        (self.sources.len() - 1) as u32
    }

    pub fn add_source_with_content(&mut self, source: String, content: String) -> u32 {
        self.sources.push(source);
        self.sources_content.push(Some(content));
        (self.sources.len() - 1) as u32
    }

    pub fn add_name(&mut self, name: String) -> u32 {
        if let Some(idx) = self.names.iter().position(|existing| *existing == name) {
            return idx as u32;
        }
        self.names.push(name);
        (self.names.len() - 1) as u32
    }

    pub fn add_simple_mapping(
        &mut self,
        generated_line: u32,
        generated_column: u32,
        source_index: u32,
        original_line: u32,
        original_column: u32,
    ) {
        self.mappings.push(Mapping {
            generated_line,
            generated_column,
            source_index,
            original_line,
            original_column,
            name_index: None,
        });
    }

    pub fn add_named_mapping(
        &mut self,
        generated_line: u32,
        generated_column: u32,
        source_index: u32,
        original_line: u32,
        original_column: u32,
        name_index: u32,
    ) {
        self.mappings.push(Mapping {
            generated_line,
            generated_column,
            source_index,
            original_line,
            original_column,
            name_index: Some(name_index),
        });
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// Finish the map.
    pub fn generate(mut self) -> SourceMap {
        let mappings = self.encode_mappings();
        SourceMap {
            version: 3,
            file: self.file,
            sources: self.sources,
            sources_content: self.sources_content,
            names: self.names,
            mappings,
        }
    }

    pub fn to_json(self) -> String {
        self.generate().to_json()
    }

    pub fn to_inline_comment(self) -> String {
        self.generate().to_inline_comment()
    }

    fn encode_mappings(&mut self) -> String {
        self.mappings
            .sort_by_key(|m| (m.generated_line, m.generated_column));

        let mut out = String::new();
        let mut current_line = 0u32;
        let mut prev_generated_column = 0i64;
        let mut prev_source_index = 0i64;
        let mut prev_original_line = 0i64;
        let mut prev_original_column = 0i64;
        let mut prev_name_index = 0i64;
        let mut first_in_line = true;

        for mapping in &self.mappings {
            while current_line < mapping.generated_line {
                out.push(';');
                current_line += 1;
                prev_generated_column = 0;
                first_in_line = true;
            }

            if !first_in_line {
                out.push(',');
            }
            first_in_line = false;

            vlq::encode_into(
                mapping.generated_column as i64 - prev_generated_column,
                &mut out,
            );
            prev_generated_column = mapping.generated_column as i64;

            vlq::encode_into(mapping.source_index as i64 - prev_source_index, &mut out);
            prev_source_index = mapping.source_index as i64;

            vlq::encode_into(mapping.original_line as i64 - prev_original_line, &mut out);
            prev_original_line = mapping.original_line as i64;

            vlq::encode_into(
                mapping.original_column as i64 - prev_original_column,
                &mut out,
            );
            prev_original_column = mapping.original_column as i64;

            if let Some(name_index) = mapping.name_index {
                vlq::encode_into(name_index as i64 - prev_name_index, &mut out);
                prev_name_index = name_index as i64;
            }
        }

        out
    }
}

/// Standard base64 with padding.
pub fn base64_encode(input: &[u8]) -> String {
    const ALPHABET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    for chunk in input.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = chunk.get(1).copied().unwrap_or(0) as u32;
        let b2 = chunk.get(2).copied().unwrap_or(0) as u32;
        let triple = (b0 << 16) | (b1 << 8) | b2;

        out.push(ALPHABET[((triple >> 18) & 0x3f) as usize] as char);
        out.push(ALPHABET[((triple >> 12) & 0x3f) as usize] as char);
        if chunk.len() > 1 {
            out.push(ALPHABET[((triple >> 6) & 0x3f) as usize] as char);
        } else {
            out.push('=');
        }
        if chunk.len() > 2 {
            out.push(ALPHABET[(triple & 0x3f) as usize] as char);
        } else {
            out.push('=');
        }
    }
    out
}
