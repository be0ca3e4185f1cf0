//! Checks that every decoded mapping points the rewritten text back at the
//! matching original character.

use autoimport_common::ImportInfo;
use autoimport_common::source_map::vlq;
use autoimport_emitter::{prepend_imports, synthesize_imports};
use autoimport_resolver::ModuleGroup;

/// Absolute `(generated_line, generated_column, original_line, original_column)`.
fn decode_mappings(mappings: &str) -> Vec<(usize, usize, i64, i64)> {
    let mut decoded = Vec::new();
    let (mut original_line, mut original_column) = (0i64, 0i64);

    for (generated_line, line) in mappings.split(';').enumerate() {
        let mut generated_column = 0i64;
        for segment in line.split(',').filter(|segment| !segment.is_empty()) {
            let mut fields = Vec::new();
            let mut rest = segment;
            while !rest.is_empty() {
                let (value, consumed) = vlq::decode(rest).unwrap();
                fields.push(value);
                rest = &rest[consumed..];
            }
            generated_column += fields[0];
            original_line += fields[2];
            original_column += fields[3];
            decoded.push((
                generated_line,
                generated_column as usize,
                original_line,
                original_column,
            ));
        }
    }
    decoded
}

#[test]
fn mappings_point_back_at_original_lines() {
    let code = "const count = ref(0)\n\nwatch(count, log)\n  computed(() => 1)\n";
    let mut group = ModuleGroup::new();
    for name in ["ref", "watch", "computed"] {
        group.add(ImportInfo::named("vue", name).binding_for(name));
    }
    let block = synthesize_imports(&group).unwrap();

    let result = prepend_imports(code, "src/App.js", &block, true);
    let map = result.map.unwrap();
    let generated: Vec<&str> = result.code.split('\n').collect();
    let original: Vec<&str> = code.split('\n').collect();

    let decoded = decode_mappings(&map.mappings);
    assert_eq!(decoded.len(), 3);

    for (generated_line, generated_column, original_line, original_column) in decoded {
        let original_rest = &original[original_line as usize][original_column as usize..];
        let generated_rest = &generated[generated_line][generated_column..];
        assert_eq!(generated_rest, original_rest);
    }
}

#[test]
fn map_serializes_as_v3_json() {
    let result = prepend_imports("a\n", "a.js", "import 'x';", true);
    let json = result.map.unwrap().to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], 3);
    assert_eq!(value["sources"][0], "a.js");
    assert_eq!(value["sourcesContent"][0], "a\n");
    assert!(value.get("file").is_none());
}
