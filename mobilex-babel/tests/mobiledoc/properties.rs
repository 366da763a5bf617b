//! Property tests over generated markup sections.

use mobilex_babel::mobiledoc_to_lexical;
use proptest::prelude::*;
use serde_json::{json, Value};

const MARKUPS: &[&str] = &["strong", "b", "em", "i", "s", "code", "sub", "sup", "u"];

/// A well-nested paragraph: each marker opens some markups and closes them all.
fn paragraph() -> impl Strategy<Value = String> {
    let marker = (
        proptest::collection::vec(0..MARKUPS.len(), 0..4),
        "[a-z ]{0,8}",
    );
    proptest::collection::vec(marker, 0..6).prop_map(|markers| {
        let markers: Vec<Value> = markers
            .into_iter()
            .map(|(open, text)| {
                let close = open.len();
                json!([0, open, close, text])
            })
            .collect();
        let markups: Vec<Value> = MARKUPS.iter().map(|tag| json!([tag])).collect();
        json!({"markups": markups, "sections": [[1, "p", markers]]}).to_string()
    })
}

proptest! {
    #[test]
    fn conversion_is_deterministic(source in paragraph()) {
        let first = mobiledoc_to_lexical(Some(source.as_str())).unwrap();
        let second = mobiledoc_to_lexical(Some(source.as_str())).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn text_is_preserved_in_order(source in paragraph()) {
        let input: Value = serde_json::from_str(&source).unwrap();
        let expected: String = input["sections"][0][2]
            .as_array()
            .unwrap()
            .iter()
            .map(|marker| marker[3].as_str().unwrap().to_string())
            .collect();

        let output: Value =
            serde_json::from_str(&mobiledoc_to_lexical(Some(source.as_str())).unwrap()).unwrap();
        let leaves = output["root"]["children"][0]["children"].as_array().unwrap();
        let actual: String = leaves
            .iter()
            .map(|leaf| leaf["text"].as_str().unwrap().to_string())
            .collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(leaves.iter().all(|leaf| leaf["text"] != ""));
    }
}
