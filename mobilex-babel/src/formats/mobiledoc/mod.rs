//! Mobiledoc format implementation
//!
//! Parses serialized mobiledoc (the array-encoded document format of the
//! legacy editor) into the lexical document tree. Serialization back to
//! mobiledoc is not supported.
//!
//! # Section Mapping
//!
//! | Mobiledoc section      | Lexical node                        |
//! |------------------------|-------------------------------------|
//! | `[1, "p", ...]`        | `paragraph`                         |
//! | `[1, "h2" / "h3", ...]`| `heading` with `tag`                |
//! | `[1, "blockquote", ...]`| `quote`                            |
//! | `[2, ...]` image       | not converted                       |
//! | `[3, ...]` list        | not converted                       |
//! | `[10, ...]` card       | not converted                       |
//!
//! Inline markups become text format bits (see [`crate::tree::text_format`]),
//! `a` markups become `link` containers and `soft-return` atoms become
//! `linebreak` nodes.

use crate::common::sections::build_document;
use crate::error::FormatError;
use crate::format::Format;
use crate::tree::nodes::Document;

pub mod conversion_rules;
pub mod model;
pub mod parser;

use conversion_rules::ConversionRules;

#[derive(Debug, Default)]
pub struct MobiledocFormat {
    rules: ConversionRules,
}

impl MobiledocFormat {
    pub fn new(rules: ConversionRules) -> Self {
        Self { rules }
    }

    /// Convert optional source text, treating `None` like empty input.
    pub fn convert(&self, source: Option<&str>) -> Result<Document, FormatError> {
        match parser::load(source)? {
            Some(mobiledoc) => build_document(&mobiledoc, &self.rules),
            None => Ok(Document::empty()),
        }
    }
}

impl Format for MobiledocFormat {
    fn name(&self) -> &str {
        "mobiledoc"
    }

    fn description(&self) -> &str {
        "Mobiledoc JSON document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mobiledoc"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        self.convert(Some(source))
    }
}
