use super::*;

fn opts() -> Options {
    Options::default()
}

#[test]
fn empty_fragment_becomes_null() {
    let out = crate::complete_to_string("", &opts()).unwrap();
    assert_eq!(out, "null");
}

#[test]
fn whitespace_only_fragment_becomes_null() {
    let out = crate::complete_to_string(" \t\n ", &opts()).unwrap();
    assert_eq!(out, "null");
}

#[test]
fn dangling_object_value_gets_null() {
    let out = crate::complete_to_string("{\"a\":1,\"b\":", &opts()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!({"a":1,"b":null}));
}

#[test]
fn trailing_array_comma_is_elided() {
    let out = crate::complete_to_string("[1,2,", &opts()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!([1, 2]));
}

#[test]
fn unterminated_string_value_is_closed() {
    let out = crate::complete_to_string("{\"key\": \"val", &opts()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!({"key":"val"}));
}

#[test]
fn mixed_nesting_closes_in_order() {
    let out = crate::complete_to_string("[{\"a\":1},{\"b\":[2,3", &opts()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!([{"a":1},{"b":[2,3]}]));
}

#[test]
fn keyword_prefix_is_quoted_not_completed() {
    // `tru` could be converging toward `true`, but guessing is off the
    // table; the bare token is closed as a string.
    let out = crate::complete_to_string("tru", &opts()).unwrap();
    assert_eq!(out, "\"tru\"");
}

#[test]
fn complete_keywords_pass_through() {
    for kw in ["true", "false", "null"] {
        let out = crate::complete_to_string(kw, &opts()).unwrap();
        assert_eq!(out, kw);
    }
}

#[test]
fn already_valid_documents_are_structurally_unchanged() {
    let docs = [
        "{\"a\":1,\"b\":[2,3],\"c\":{\"d\":\"e\"}}",
        "[1,2.5,-3e10,\"x\",{\"k\":[]}]",
        "{\"s\": \"with spaces \\\"inside\\\"\"}",
        "\"root string\"",
        "-42",
        "[]",
        "{}",
    ];
    for doc in docs {
        let out = crate::complete_to_string(doc, &opts()).unwrap();
        let a: serde_json::Value = serde_json::from_str(&out).unwrap();
        let b: serde_json::Value = serde_json::from_str(doc).unwrap();
        assert_eq!(a, b, "doc {:?} changed to {:?}", doc, out);
    }
}

#[test]
fn repeated_calls_share_no_state() {
    // Two interleaved fragments must not influence each other.
    let a = crate::complete_to_string("{\"a\":[1,", &opts()).unwrap();
    let b = crate::complete_to_string("\"lonely", &opts()).unwrap();
    let a2 = crate::complete_to_string("{\"a\":[1,", &opts()).unwrap();
    assert_eq!(a, a2);
    assert_eq!(b, "\"lonely\"");
}

#[test]
fn writer_path_matches_string_path() {
    let mut buf = Vec::new();
    crate::complete_to_writer("[1,{\"a\":", &opts(), &mut buf).unwrap();
    let s = crate::complete_to_string("[1,{\"a\":", &opts()).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), s);
}

#[test]
fn complete_to_value_parses() {
    let v = crate::complete_to_value("{\"n\": [1, 2,", &opts()).unwrap();
    assert_eq!(v, serde_json::json!({"n": [1, 2]}));
}
