//! Typed view of a serialized mobiledoc.
//!
//! Mobiledoc encodes everything positionally: sections, markers, markups and
//! atoms are JSON arrays whose meaning depends on their index. Each type here
//! deserializes from its raw array form through `TryFrom`, so the rest of the
//! crate works with named fields.
//!
//! ```text
//! section  [1, "p", [marker, ...]]       markup section
//!          [2, src] / [3, ...] / [10, ...] image / list / card (payload ignored)
//! marker   [0, [open...], close, "text"]  text run
//!          [1, [open...], close, atomIndex]
//! markup   ["a", ["href", "https://..."]]
//! atom     ["soft-return", "", {}]
//! ```

use serde::Deserialize;
use serde_json::Value;

/// A parsed mobiledoc document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MobiledocSource {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub atoms: Vec<Atom>,
    #[serde(default)]
    pub cards: Vec<Value>,
    #[serde(default)]
    pub markups: Vec<Markup>,
    pub sections: Vec<Section>,
}

/// An inline formatting or link annotation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Value>")]
pub struct Markup {
    pub tag_name: String,
    /// Flat `[name, value, name, value, ...]` attribute list.
    pub attributes: Vec<String>,
}

impl Markup {
    pub fn is_link(&self) -> bool {
        self.tag_name == "a"
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .chunks(2)
            .find(|pair| pair[0] == name)
            .and_then(|pair| pair.get(1))
            .map(String::as_str)
    }
}

impl TryFrom<Vec<Value>> for Markup {
    type Error = String;

    fn try_from(raw: Vec<Value>) -> Result<Self, Self::Error> {
        let mut items = raw.into_iter();
        let tag_name = match items.next() {
            Some(Value::String(tag)) => tag,
            other => return Err(format!("markup tag must be a string, found {other:?}")),
        };
        let attributes = match items.next() {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(values)) => values
                .into_iter()
                .map(|value| match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            Some(other) => return Err(format!("markup attributes must be a list, found {other}")),
        };
        Ok(Markup {
            tag_name,
            attributes,
        })
    }
}

/// An inline non-text unit. Only `name` drives conversion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Value>")]
pub struct Atom {
    pub name: String,
    pub text: String,
    pub payload: Value,
}

impl TryFrom<Vec<Value>> for Atom {
    type Error = String;

    fn try_from(raw: Vec<Value>) -> Result<Self, Self::Error> {
        let mut items = raw.into_iter();
        let name = match items.next() {
            Some(Value::String(name)) => name,
            other => return Err(format!("atom name must be a string, found {other:?}")),
        };
        let text = match items.next() {
            Some(Value::String(text)) => text,
            _ => String::new(),
        };
        let payload = items.next().unwrap_or(Value::Null);
        Ok(Atom {
            name,
            text,
            payload,
        })
    }
}

/// One run inside a markup section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawMarker")]
pub enum Marker {
    Text {
        open: Vec<usize>,
        close: usize,
        text: String,
    },
    Atom {
        open: Vec<usize>,
        close: usize,
        atom: usize,
    },
}

#[derive(Deserialize)]
struct RawMarker(u64, Vec<usize>, usize, Value);

impl TryFrom<RawMarker> for Marker {
    type Error = String;

    fn try_from(RawMarker(kind, open, close, value): RawMarker) -> Result<Self, Self::Error> {
        match (kind, value) {
            (0, Value::String(text)) => Ok(Marker::Text { open, close, text }),
            (0, other) => Err(format!("text marker value must be a string, found {other}")),
            (_, Value::Number(n)) => match n.as_u64() {
                Some(atom) => Ok(Marker::Atom {
                    open,
                    close,
                    atom: atom as usize,
                }),
                None => Err(format!("atom marker index must be non-negative, found {n}")),
            },
            (_, other) => Err(format!("atom marker value must be an index, found {other}")),
        }
    }
}

/// Section kind tags.
pub const MARKUP_SECTION: u64 = 1;
pub const IMAGE_SECTION: u64 = 2;
pub const LIST_SECTION: u64 = 3;
pub const CARD_SECTION: u64 = 10;

/// A top-level block of the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Value>")]
pub enum Section {
    Markup {
        tag_name: String,
        markers: Vec<Marker>,
    },
    Image,
    List,
    Card,
    /// A kind tag this converter does not know; carries the raw tag.
    Unknown(Value),
}

impl Section {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Section::Markup { .. } => "markup",
            Section::Image => "image",
            Section::List => "list",
            Section::Card => "card",
            Section::Unknown(_) => "unknown",
        }
    }
}

impl TryFrom<Vec<Value>> for Section {
    type Error = String;

    fn try_from(raw: Vec<Value>) -> Result<Self, Self::Error> {
        let mut items = raw.into_iter();
        let tag = items.next().unwrap_or(Value::Null);
        match tag.as_u64() {
            Some(MARKUP_SECTION) => {
                let tag_name = match items.next() {
                    Some(Value::String(name)) => name.to_lowercase(),
                    other => {
                        return Err(format!(
                            "markup section tag name must be a string, found {other:?}"
                        ))
                    }
                };
                let markers = match items.next() {
                    Some(value) => {
                        serde_json::from_value(value).map_err(|err| err.to_string())?
                    }
                    None => Vec::new(),
                };
                Ok(Section::Markup { tag_name, markers })
            }
            Some(IMAGE_SECTION) => Ok(Section::Image),
            Some(LIST_SECTION) => Ok(Section::List),
            Some(CARD_SECTION) => Ok(Section::Card),
            _ => Ok(Section::Unknown(tag)),
        }
    }
}
