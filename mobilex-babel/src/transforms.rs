//! String-in, string-out conversion entry points.
//!
//! These wrap the mobiledoc parser and the lexical serializer for callers that
//! only hold serialized documents, such as database migrations.
//!
//! # Example
//!
//! ```
//! use mobilex_babel::transforms::mobiledoc_to_lexical;
//!
//! let lexical = mobiledoc_to_lexical(Some(r#"{"sections":[]}"#)).unwrap();
//! assert!(lexical.starts_with(r#"{"root":"#));
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::lexical::LexicalFormat;
use crate::formats::mobiledoc::conversion_rules::ConversionRules;
use crate::formats::mobiledoc::MobiledocFormat;

/// Convert serialized mobiledoc to serialized lexical with default rules.
///
/// `None` and empty input yield the empty lexical document.
pub fn mobiledoc_to_lexical(source: Option<&str>) -> Result<String, FormatError> {
    mobiledoc_to_lexical_with_rules(source, ConversionRules::default())
}

/// Convert serialized mobiledoc to serialized lexical with custom rules.
pub fn mobiledoc_to_lexical_with_rules(
    source: Option<&str>,
    rules: ConversionRules,
) -> Result<String, FormatError> {
    let doc = MobiledocFormat::new(rules).convert(source)?;
    LexicalFormat.serialize(&doc)
}
