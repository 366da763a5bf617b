//! Converts one mobiledoc markup section into a lexical block container.
//!
//! # The High-Level Concept
//!
//! Mobiledoc never nests inline formatting. A markup section is a flat list of
//! markers, and each text marker says which markups open before its text and
//! how many close after it. Lexical instead wants every text leaf to carry the
//! complete set of formats that apply to it, and wants link text wrapped in a
//! link container. The converter replays the open/close bookkeeping with a
//! stack so that, at every text marker, it knows exactly which markups are
//! active.
//!
//! # The Algorithm
//!
//! 1. **Initialization:**
//!    - Create the block container from the section tag (`p`, `h2`, `h3`,
//!      `blockquote`)
//!    - Start with an empty markup stack and no active link
//!
//! 2. **Atom Markers:**
//!    - Resolve the atom and append its node (a `linebreak` for
//!      `soft-return`) directly to the block, even while a link is open
//!    - The markup stack is left untouched
//!
//! 3. **Text Markers:**
//!    - Push every newly opened markup onto the stack; opening an `a` markup
//!      starts a link span with its `href`
//!    - If the text is non-empty, fold the tags on the stack into a format
//!      bitmask and append a text leaf, to the link container when a span is
//!      active (creating it on first use) or to the block otherwise
//!    - Pop `close` markups off the stack; popping an `a` markup appends the
//!      finished link container to the block and ends the span
//!
//! Markup spans are assumed to be well nested (last opened, first closed) and
//! links never nest. Neither is verified. A marker closing more markups than
//! are open is rejected.

use crate::error::FormatError;
use crate::formats::mobiledoc::model::{Atom, Marker, Markup};
use crate::tree::factory::{
    append, atom_node, make_container, make_text_leaf, ContainerKind, Overrides,
};
use crate::tree::nodes::{ElementNode, Node};
use crate::tree::text_format::TextFormat;

/// Markups open at the current marker, most recently opened last.
#[derive(Debug, Default)]
struct MarkupStack<'a> {
    open: Vec<&'a Markup>,
}

impl<'a> MarkupStack<'a> {
    fn push(&mut self, markup: &'a Markup) {
        self.open.push(markup);
    }

    fn pop(&mut self) -> Option<&'a Markup> {
        self.open.pop()
    }

    fn format(&self) -> TextFormat {
        TextFormat::from_tags(self.open.iter().map(|markup| markup.tag_name.as_str()))
    }

    fn len(&self) -> usize {
        self.open.len()
    }
}

/// The link span currently collecting text.
#[derive(Debug)]
struct ActiveLink {
    href: String,
    node: Option<ElementNode>,
}

impl ActiveLink {
    fn new(href: &str) -> Self {
        ActiveLink {
            href: href.to_string(),
            node: None,
        }
    }

    fn push(&mut self, leaf: Node) {
        let href = &self.href;
        let node = self
            .node
            .get_or_insert_with(|| make_container(ContainerKind::Link, Overrides::url(href)));
        append(node, leaf);
    }
}

fn lookup<'a, T>(table: &'a [T], index: usize, kind: &'static str) -> Result<&'a T, FormatError> {
    table.get(index).ok_or(FormatError::IndexOutOfRange {
        kind,
        index,
        len: table.len(),
    })
}

/// Build the lexical container for a markup section.
pub fn convert_markup_section(
    tag_name: &str,
    markers: &[Marker],
    markups: &[Markup],
    atoms: &[Atom],
) -> Result<ElementNode, FormatError> {
    let kind = ContainerKind::for_section_tag(tag_name)
        .ok_or_else(|| FormatError::UnsupportedSectionTag(tag_name.to_string()))?;
    let mut section = make_container(kind, Overrides::default());

    let mut stack = MarkupStack::default();
    let mut link: Option<ActiveLink> = None;

    for marker in markers {
        match marker {
            Marker::Atom { atom, .. } => {
                let atom = lookup(atoms, *atom, "atom")?;
                match atom_node(&atom.name) {
                    Some(node) => append(&mut section, node),
                    None => log::warn!("dropping atom '{}' with no lexical node", atom.name),
                }
            }
            Marker::Text { open, close, text } => {
                for &index in open {
                    let markup = lookup(markups, index, "markup")?;
                    if markup.is_link() {
                        link = markup
                            .attribute("href")
                            .filter(|href| !href.is_empty())
                            .map(ActiveLink::new);
                    }
                    stack.push(markup);
                }

                if !text.is_empty() {
                    let leaf = make_text_leaf(text.as_str(), stack.format());
                    match link.as_mut() {
                        Some(active) => active.push(leaf),
                        None => append(&mut section, leaf),
                    }
                }

                for _ in 0..*close {
                    let markup = stack.pop().ok_or_else(|| {
                        FormatError::MalformedInput(format!(
                            "marker closes {close} markups but only {} are open",
                            stack.len()
                        ))
                    })?;
                    if markup.is_link() {
                        if let Some(node) = link.take().and_then(|active| active.node) {
                            append(&mut section, Node::Element(node));
                        }
                    }
                }
            }
        }
    }

    Ok(section)
}
