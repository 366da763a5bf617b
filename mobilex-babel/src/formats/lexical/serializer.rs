use crate::error::FormatError;
use crate::tree::nodes::Document;
use std::collections::HashMap;

/// Output knobs for lexical JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalOptions {
    pub pretty: bool,
}

impl LexicalOptions {
    /// Read options from `--extra-*` style string parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut options = LexicalOptions::default();
        for (key, value) in params {
            match key.as_str() {
                "pretty" => options.pretty = parse_bool("pretty", value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'lexical' has no option '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, FormatError> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(FormatError::NotSupported(format!(
            "Option '{key}' expects true or false, found '{other}'"
        ))),
    }
}

pub fn to_lexical_string(doc: &Document, options: &LexicalOptions) -> Result<String, FormatError> {
    let result = if options.pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    result.map_err(|e| FormatError::SerializationError(e.to_string()))
}
