//! Lexical format implementation
//!
//! Serializes the document tree as the JSON the lexical editor runtime loads:
//! `{"root": {"children": [...], "direction": ..., "type": "root", ...}}`.
//!
//! Output is compact by default. Pass `pretty=true` through
//! [`Format::serialize_with_options`] for indented output.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::nodes::Document;
use std::collections::HashMap;

pub mod serializer;

pub use serializer::{to_lexical_string, LexicalOptions};

#[derive(Debug, Default)]
pub struct LexicalFormat;

impl Format for LexicalFormat {
    fn name(&self) -> &str {
        "lexical"
    }

    fn description(&self) -> &str {
        "Lexical editor state JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["lexical"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_lexical_string(doc, &LexicalOptions::default())
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = LexicalOptions::from_params(options)?;
        to_lexical_string(doc, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_format_name() {
        let format = LexicalFormat;
        assert_eq!(format.name(), "lexical");
        assert!(!format.supports_parsing());
        assert!(format.supports_serialization());
    }

    #[test]
    fn test_lexical_serialize_empty() {
        let out = LexicalFormat.serialize(&Document::empty()).unwrap();
        assert_eq!(
            out,
            r#"{"root":{"children":[],"direction":null,"format":"","indent":0,"type":"root","version":1}}"#
        );
    }

    #[test]
    fn test_lexical_rejects_unknown_option() {
        let mut options = HashMap::new();
        options.insert("theme".to_string(), "dark".to_string());
        let result = LexicalFormat.serialize_with_options(&Document::empty(), &options);
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }
}
