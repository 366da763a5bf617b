//! Node construction.
//!
//! Containers are built from three layers applied in order: the universal
//! defaults every container shares, the fixed template of the container kind,
//! and the caller's overrides. Each call produces a fresh node; the templates
//! are plain `match` arms and are never mutated.

use crate::tree::nodes::{
    Direction, ElementKind, ElementNode, HeadingTag, LineBreakNode, Node, TextMode, TextNode,
    SCHEMA_VERSION,
};
use crate::tree::text_format::TextFormat;

/// Container kinds the converter can produce below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Paragraph,
    Heading(HeadingTag),
    Quote,
    Link,
}

impl ContainerKind {
    /// Map a markup section tag name to its container kind.
    pub fn for_section_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(ContainerKind::Paragraph),
            "h2" => Some(ContainerKind::Heading(HeadingTag::H2)),
            "h3" => Some(ContainerKind::Heading(HeadingTag::H3)),
            "blockquote" => Some(ContainerKind::Quote),
            _ => None,
        }
    }

    fn template(self) -> ElementKind {
        match self {
            ContainerKind::Paragraph => ElementKind::Paragraph,
            ContainerKind::Heading(tag) => ElementKind::Heading { tag },
            ContainerKind::Quote => ElementKind::Quote,
            ContainerKind::Link => ElementKind::Link {
                rel: None,
                target: None,
                title: None,
                url: None,
            },
        }
    }
}

/// Explicit values layered over a container's defaults and template.
///
/// Link attributes are ignored for non-link containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub url: Option<String>,
    pub rel: Option<String>,
    pub target: Option<String>,
    pub title: Option<String>,
    pub indent: Option<u32>,
    pub direction: Option<Direction>,
}

impl Overrides {
    pub fn url(url: impl Into<String>) -> Self {
        Overrides {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    fn apply(self, node: &mut ElementNode) {
        if let Some(indent) = self.indent {
            node.indent = indent;
        }
        if self.direction.is_some() {
            node.direction = self.direction;
        }
        if let ElementKind::Link {
            rel,
            target,
            title,
            url,
        } = &mut node.kind
        {
            for (slot, value) in [
                (rel, self.rel),
                (target, self.target),
                (title, self.title),
                (url, self.url),
            ] {
                if value.is_some() {
                    *slot = value;
                }
            }
        }
    }
}

/// Build an empty container of `kind` with `overrides` applied.
pub fn make_container(kind: ContainerKind, overrides: Overrides) -> ElementNode {
    let mut node = ElementNode {
        children: Vec::new(),
        direction: None,
        format: String::new(),
        indent: 0,
        kind: kind.template(),
        version: SCHEMA_VERSION,
    };
    overrides.apply(&mut node);
    node
}

/// Build a text leaf.
pub fn make_text_leaf(text: impl Into<String>, format: TextFormat) -> Node {
    Node::Text(TextNode {
        detail: 0,
        format,
        mode: TextMode::Normal,
        style: String::new(),
        text: text.into(),
        version: SCHEMA_VERSION,
    })
}

/// Map an atom name to the node that replaces it, if any.
pub fn atom_node(name: &str) -> Option<Node> {
    match name {
        "soft-return" => Some(Node::LineBreak(LineBreakNode {
            version: SCHEMA_VERSION,
        })),
        _ => None,
    }
}

/// Append `child` to `parent`.
///
/// A child carrying non-empty text marks `parent` as left-to-right. Only the
/// immediate parent is touched; ancestors keep their direction.
pub fn append(parent: &mut ElementNode, child: Node) {
    if child.carries_text() {
        parent.direction = Some(Direction::Ltr);
    }
    parent.children.push(child);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_tags_map_to_kinds() {
        assert_eq!(
            ContainerKind::for_section_tag("p"),
            Some(ContainerKind::Paragraph)
        );
        assert_eq!(
            ContainerKind::for_section_tag("h2"),
            Some(ContainerKind::Heading(HeadingTag::H2))
        );
        assert_eq!(
            ContainerKind::for_section_tag("h3"),
            Some(ContainerKind::Heading(HeadingTag::H3))
        );
        assert_eq!(
            ContainerKind::for_section_tag("blockquote"),
            Some(ContainerKind::Quote)
        );
        assert_eq!(ContainerKind::for_section_tag("a"), None);
        assert_eq!(ContainerKind::for_section_tag("h1"), None);
    }

    #[test]
    fn link_template_has_null_placeholders() {
        let link = make_container(ContainerKind::Link, Overrides::default());
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(
            value,
            json!({
                "children": [],
                "direction": null,
                "format": "",
                "indent": 0,
                "type": "link",
                "rel": null,
                "target": null,
                "title": null,
                "url": null,
                "version": 1
            })
        );
    }

    #[test]
    fn overrides_win_over_template() {
        let link = make_container(ContainerKind::Link, Overrides::url("https://example.com"));
        match link.kind {
            ElementKind::Link { url, rel, .. } => {
                assert_eq!(url.as_deref(), Some("https://example.com"));
                assert_eq!(rel, None);
            }
            other => panic!("Expected link, found {other:?}"),
        }
    }

    #[test]
    fn link_overrides_are_ignored_on_paragraphs() {
        let para = make_container(ContainerKind::Paragraph, Overrides::url("https://x.y"));
        assert_eq!(para.kind, ElementKind::Paragraph);
    }

    #[test]
    fn text_leaf_has_lexical_defaults() {
        let leaf = make_text_leaf("Hi", TextFormat::BOLD);
        assert_eq!(
            serde_json::to_value(&leaf).unwrap(),
            json!({
                "detail": 0,
                "format": 1,
                "mode": "normal",
                "style": "",
                "text": "Hi",
                "type": "text",
                "version": 1
            })
        );
    }

    #[test]
    fn only_soft_return_atoms_have_nodes() {
        assert_eq!(atom_node("soft-return").map(|n| n.type_name()), Some("linebreak"));
        assert!(atom_node("mention").is_none());
    }

    #[test]
    fn append_marks_direction_for_text_only() {
        let mut para = make_container(ContainerKind::Paragraph, Overrides::default());
        append(&mut para, atom_node("soft-return").unwrap());
        assert_eq!(para.direction, None);
        append(&mut para, make_text_leaf("", TextFormat::PLAIN));
        assert_eq!(para.direction, None);
        append(&mut para, make_text_leaf("x", TextFormat::PLAIN));
        assert_eq!(para.direction, Some(Direction::Ltr));
        assert_eq!(para.children.len(), 3);
    }

    #[test]
    fn append_does_not_propagate_past_parent() {
        let mut para = make_container(ContainerKind::Paragraph, Overrides::default());
        let mut link = make_container(ContainerKind::Link, Overrides::url("https://a.b"));
        append(&mut link, make_text_leaf("click", TextFormat::PLAIN));
        assert_eq!(link.direction, Some(Direction::Ltr));
        append(&mut para, Node::Element(link));
        assert_eq!(para.direction, None);
    }
}
