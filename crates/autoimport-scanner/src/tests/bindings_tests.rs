use crate::CandidateSet;
use crate::bindings::*;

#[test]
fn test_import_bindings_with_alias() {
    assert_eq!(
        local_bindings("import { ref as vueRef, computed } from \"\"\n"),
        vec!["vueRef", "computed"]
    );
}

#[test]
fn test_default_and_namespace_import() {
    assert_eq!(
        local_bindings("import Foo, * as ns from \"\"\n"),
        vec!["Foo", "ns"]
    );
}

#[test]
fn test_function_declaration() {
    assert_eq!(local_bindings("function foo (a) {}"), vec!["foo"]);
}

#[test]
fn test_variable_list() {
    assert_eq!(local_bindings("let a, b;"), vec!["a", "b"]);
}

#[test]
fn test_array_destructure() {
    assert_eq!(local_bindings("const [x, , y] = arr\n"), vec!["x", "y"]);
}

#[test]
fn test_object_destructure_uses_local_names() {
    assert_eq!(local_bindings("const { a, b: c } = x\n"), vec!["a", "c"]);
}

#[test]
fn test_object_destructure_defaults_and_rest() {
    assert_eq!(
        local_bindings("var { a = 1, b: { c } } = o\n"),
        vec!["a", "c"]
    );
    assert_eq!(local_bindings("const { ...rest } = o\n"), vec!["rest"]);
}

#[test]
fn test_type_annotation_keeps_variable_name() {
    assert_eq!(local_bindings("const total: number = 1\n"), vec!["total"]);
}

#[test]
fn test_exclude_keeps_order_of_remaining() {
    let mut candidates: CandidateSet = ["const", "a", "b", "c", "x"]
        .into_iter()
        .map(String::from)
        .collect();
    let removed = exclude_local_bindings("const { a, b: c } = x\n", &mut candidates);
    assert_eq!(removed, 2);
    assert_eq!(
        candidates.into_iter().collect::<Vec<_>>(),
        vec!["const", "b", "x"]
    );
}

#[test]
fn test_exclude_on_empty_set_is_noop() {
    let mut candidates = CandidateSet::default();
    assert_eq!(exclude_local_bindings("let a;", &mut candidates), 0);
}
