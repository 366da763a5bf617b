//! Shared helpers for format integration tests.

use serde_json::Value;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Convert mobiledoc source and reparse the lexical output as JSON.
pub fn convert_to_value(source: &str) -> Value {
    let lexical =
        mobilex_babel::mobiledoc_to_lexical(Some(source)).expect("conversion should succeed");
    serde_json::from_str(&lexical).expect("lexical output should be JSON")
}
