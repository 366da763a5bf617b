//! Import tests for the mobiledoc format (mobiledoc → lexical)
//!
//! These tests go through the public string-in, string-out surface and check
//! the resulting lexical JSON.

use crate::common::{convert_to_value, read_fixture};
use mobilex_babel::{
    mobiledoc_to_lexical, mobiledoc_to_lexical_with_rules, ConversionRules, FormatError,
    RootDirectionRule,
};
use serde_json::{json, Value};

fn blank() -> Value {
    json!({
        "root": {
            "children": [],
            "direction": null,
            "format": "",
            "indent": 0,
            "type": "root",
            "version": 1
        }
    })
}

fn text(value: &str, format: u32) -> Value {
    json!({
        "detail": 0,
        "format": format,
        "mode": "normal",
        "style": "",
        "text": value,
        "type": "text",
        "version": 1
    })
}

#[test]
fn test_absent_inputs_give_blank_document() {
    for input in [None, Some("")] {
        let out = mobiledoc_to_lexical(input).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), blank());
    }
    assert_eq!(convert_to_value(r#"{"version":"0.3.1"}"#), blank());
}

#[test]
fn test_plain_paragraph() {
    let doc = convert_to_value(r#"{"sections":[[1,"p",[[0,[],0,"Hello world"]]]]}"#);
    let para = &doc["root"]["children"][0];
    assert_eq!(para["type"], "paragraph");
    assert_eq!(para["direction"], "ltr");
    assert_eq!(para["children"], json!([text("Hello world", 0)]));
    assert_eq!(doc["root"]["direction"], "ltr");
}

#[test]
fn test_single_bold_span() {
    let doc = convert_to_value(
        r#"{"markups":[["strong"]],"sections":[[1,"p",[[0,[0],1,"Hi"]]]]}"#,
    );
    assert_eq!(doc["root"]["children"][0]["children"][0]["format"], 1);
}

#[test]
fn test_bold_and_italic_together() {
    let doc = convert_to_value(
        r#"{"markups":[["strong"],["em"]],"sections":[[1,"p",[[0,[0,1],2,"Hi"]]]]}"#,
    );
    assert_eq!(doc["root"]["children"][0]["children"][0]["format"], 3);
}

#[test]
fn test_link_wrapping() {
    let doc = convert_to_value(
        r#"{
            "markups": [["a", ["href", "https://example.com"]]],
            "sections": [[1, "p", [[0, [0], 1, "click"]]]]
        }"#,
    );
    let children = &doc["root"]["children"][0]["children"];
    assert_eq!(
        children,
        &json!([{
            "children": [text("click", 0)],
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "type": "link",
            "rel": null,
            "target": null,
            "title": null,
            "url": "https://example.com",
            "version": 1
        }])
    );
}

#[test]
fn test_soft_return_is_never_inside_link() {
    let doc = convert_to_value(
        r#"{
            "atoms": [["soft-return"]],
            "markups": [["a", ["href", "https://example.com"]]],
            "sections": [[1, "p", [
                [0, [0], 0, "before"],
                [1, [], 0, 0],
                [0, [], 1, "after"]
            ]]]
        }"#,
    );
    let children = doc["root"]["children"][0]["children"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(children[0], json!({"type": "linebreak", "version": 1}));
    assert_eq!(children[1]["type"], "link");
    assert_eq!(
        children[1]["children"],
        json!([text("before", 0), text("after", 0)])
    );
}

#[test]
fn test_unsupported_sections_are_skipped() {
    let doc = convert_to_value(
        r#"{
            "cards": [["html", {"html": "<p>x</p>"}]],
            "sections": [
                [2, "https://example.com/a.png"],
                [3, "ul", [[[0, [], 0, "item"]]]],
                [10, 0],
                [7, "mystery"]
            ]
        }"#,
    );
    assert_eq!(doc, blank());
}

#[test]
fn test_section_without_text_leaves_direction_null() {
    let doc = convert_to_value(
        r#"{"markups":[["b"]],"sections":[[1,"p",[[0,[0],1,""]]]]}"#,
    );
    assert_eq!(doc["root"]["direction"], Value::Null);
    assert_eq!(doc["root"]["children"][0]["children"], json!([]));
}

#[test]
fn test_root_direction_follows_first_section_by_default() {
    let source = r#"{"sections":[[1,"p",[]],[1,"p",[[0,[],0,"text"]]]]}"#;
    assert_eq!(convert_to_value(source)["root"]["direction"], Value::Null);

    let rules = ConversionRules {
        root_direction: RootDirectionRule::AppendedSection,
    };
    let out = mobiledoc_to_lexical_with_rules(Some(source), rules).unwrap();
    let doc: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["root"]["direction"], "ltr");
}

#[test]
fn test_malformed_json_fails() {
    assert!(matches!(
        mobiledoc_to_lexical(Some(r#"{"sections": [[1, "p""#)),
        Err(FormatError::MalformedInput(_))
    ));
}

#[test]
fn test_out_of_range_indexes_fail() {
    assert_eq!(
        mobiledoc_to_lexical(Some(r#"{"sections":[[1,"p",[[0,[0],1,"x"]]]]}"#)),
        Err(FormatError::IndexOutOfRange {
            kind: "markup",
            index: 0,
            len: 0
        })
    );
    assert_eq!(
        mobiledoc_to_lexical(Some(r#"{"atoms":[],"sections":[[1,"p",[[1,[],0,2]]]]}"#)),
        Err(FormatError::IndexOutOfRange {
            kind: "atom",
            index: 2,
            len: 0
        })
    );
}

#[test]
fn test_kitchensink() {
    let doc = convert_to_value(&read_fixture("kitchensink.mobiledoc"));
    let expected: Value = serde_json::from_str(&read_fixture("kitchensink.lexical")).unwrap();
    assert_eq!(doc, expected);
}
