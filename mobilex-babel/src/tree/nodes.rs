//! Core data structures for the lexical document tree.

use crate::tree::text_format::TextFormat;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Schema version stamped on every node.
pub const SCHEMA_VERSION: u32 = 1;

/// Text direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
}

/// Heading tag carried by heading nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H2,
    H3,
}

impl HeadingTag {
    pub fn level(self) -> usize {
        match self {
            HeadingTag::H2 => 2,
            HeadingTag::H3 => 3,
        }
    }
}

/// The kind-specific part of a container, serialized inline with its `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Root,
    Paragraph,
    Heading {
        tag: HeadingTag,
    },
    Quote,
    Link {
        rel: Option<String>,
        target: Option<String>,
        title: Option<String>,
        url: Option<String>,
    },
}

impl ElementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::Root => "root",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Heading { .. } => "heading",
            ElementKind::Quote => "quote",
            ElementKind::Link { .. } => "link",
        }
    }
}

/// A node that owns children: the root, block containers and links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementNode {
    pub children: Vec<Node>,
    pub direction: Option<Direction>,
    /// Block alignment. Always empty for converted documents.
    pub format: String,
    pub indent: u32,
    #[serde(flatten)]
    pub kind: ElementKind,
    pub version: u32,
}

impl ElementNode {
    /// Concatenated text of all descendant text leaves.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// How a text leaf is edited. Converted text is always `normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    #[default]
    Normal,
}

/// A run of text with a single format bitmask.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub detail: u32,
    pub format: TextFormat,
    pub mode: TextMode,
    pub style: String,
    pub text: String,
    pub version: u32,
}

impl Serialize for TextNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TextNode", 7)?;
        s.serialize_field("detail", &self.detail)?;
        s.serialize_field("format", &self.format)?;
        s.serialize_field("mode", &self.mode)?;
        s.serialize_field("style", &self.style)?;
        s.serialize_field("text", &self.text)?;
        s.serialize_field("type", "text")?;
        s.serialize_field("version", &self.version)?;
        s.end()
    }
}

/// A forced line break inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBreakNode {
    pub version: u32,
}

impl Serialize for LineBreakNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LineBreakNode", 2)?;
        s.serialize_field("type", "linebreak")?;
        s.serialize_field("version", &self.version)?;
        s.end()
    }
}

/// Any node that can appear as a child of a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
    LineBreak(LineBreakNode),
}

impl Node {
    /// The serialized `type` of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Element(element) => element.kind.type_name(),
            Node::Text(_) => "text",
            Node::LineBreak(_) => "linebreak",
        }
    }

    /// True for text leaves with non-empty text.
    pub fn carries_text(&self) -> bool {
        matches!(self, Node::Text(text) if !text.text.is_empty())
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Text(text) => out.push_str(&text.text),
            Node::LineBreak(_) => out.push('\n'),
        }
    }
}

/// A complete lexical document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub root: ElementNode,
}

impl Document {
    /// The canonical empty document: a root with no children and no direction.
    pub fn empty() -> Self {
        Document {
            root: ElementNode {
                children: Vec::new(),
                direction: None,
                format: String::new(),
                indent: 0,
                kind: ElementKind::Root,
                version: SCHEMA_VERSION,
            },
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
