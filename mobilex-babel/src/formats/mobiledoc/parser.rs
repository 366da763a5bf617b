//! Mobiledoc document loading.
//!
//! Absent input, empty input, and documents without `sections` all load as
//! `None`, which callers turn into the canonical empty lexical document.
//! Anything that is not valid JSON fails with [`FormatError::MalformedInput`].

use crate::error::FormatError;
use crate::formats::mobiledoc::model::MobiledocSource;
use serde_json::Value;

pub fn load(input: Option<&str>) -> Result<Option<MobiledocSource>, FormatError> {
    let source = match input {
        None => return Ok(None),
        Some(source) if source.is_empty() => return Ok(None),
        Some(source) => source,
    };

    let value: Value = serde_json::from_str(source)?;

    match value.get("sections") {
        None | Some(Value::Null) => {
            log::debug!("mobiledoc has no sections; using the empty document");
            Ok(None)
        }
        Some(_) => Ok(Some(serde_json::from_value(value)?)),
    }
}
