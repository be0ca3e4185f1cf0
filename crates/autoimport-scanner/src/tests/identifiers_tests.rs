use crate::identifiers::*;

fn names(surface: &str) -> Vec<String> {
    scan_identifiers(surface).into_iter().collect()
}

#[test]
fn test_member_access_excluded() {
    assert_eq!(names("foo(bar, baz.qux)\n"), vec!["foo", "bar", "baz"]);
}

#[test]
fn test_member_after_call_excluded() {
    assert_eq!(names("f().then(x)\n"), vec!["f", "x"]);
}

#[test]
fn test_spread_is_not_member_access() {
    assert_eq!(names("g(...rest)"), vec!["g", "rest"]);
}

#[test]
fn test_run_followed_by_brace_excluded() {
    assert_eq!(names("foo{"), Vec::<String>::new());
    assert_eq!(names("foo {"), vec!["foo"]);
}

#[test]
fn test_run_at_end_of_input_excluded() {
    assert!(names("foo").is_empty());
    assert!(scan_identifiers("").is_empty());
}

#[test]
fn test_dollar_and_underscore_are_identifier_bytes() {
    assert_eq!(names("$ref_1 + _x;"), vec!["$ref_1", "_x"]);
}

#[test]
fn test_candidates_deduplicated_in_first_seen_order() {
    assert_eq!(names("b a b a;"), vec!["b", "a"]);
}

#[test]
fn test_numbers_come_through_as_candidates() {
    assert_eq!(names("x = 1.5;"), vec!["x", "1"]);
}

#[test]
fn test_is_identifier_byte() {
    assert!(is_identifier_byte(b'a'));
    assert!(is_identifier_byte(b'Z'));
    assert!(is_identifier_byte(b'7'));
    assert!(is_identifier_byte(b'$'));
    assert!(!is_identifier_byte(b'.'));
    assert!(!is_identifier_byte(b'{'));
}
