//! Export tests for the lexical format

use insta::assert_snapshot;
use mobilex_babel::format::Format;
use mobilex_babel::formats::MobiledocFormat;
use mobilex_babel::FormatRegistry;
use std::collections::HashMap;

#[test]
fn test_pretty_export_snapshot() {
    let registry = FormatRegistry::default();
    let doc = MobiledocFormat::default()
        .parse(r#"{"markups":[["b"]],"sections":[[1,"p",[[0,[0],1,"Hi"]]]]}"#)
        .unwrap();

    let mut options = HashMap::new();
    options.insert("pretty".to_string(), "true".to_string());
    let out = registry
        .serialize_with_options(&doc, "lexical", &options)
        .unwrap();

    assert_snapshot!(out, @r#"
    {
      "root": {
        "children": [
          {
            "children": [
              {
                "detail": 0,
                "format": 1,
                "mode": "normal",
                "style": "",
                "text": "Hi",
                "type": "text",
                "version": 1
              }
            ],
            "direction": "ltr",
            "format": "",
            "indent": 0,
            "type": "paragraph",
            "version": 1
          }
        ],
        "direction": "ltr",
        "format": "",
        "indent": 0,
        "type": "root",
        "version": 1
      }
    }
    "#);
}

#[test]
fn test_compact_export_is_single_line() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(r#"{"sections":[[1,"h2",[[0,[],0,"Title"]]]]}"#, "mobiledoc")
        .unwrap();
    let out = registry.serialize(&doc, "lexical").unwrap();
    assert!(!out.contains('\n'));
    assert!(out.contains(r#""type":"heading","tag":"h2""#));
}
