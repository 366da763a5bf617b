//! Assembles the lexical root from a mobiledoc's top-level sections.
//!
//! Markup sections are converted by [`convert_markup_section`] and appended to
//! the root in document order. Image, list and card sections are not converted
//! yet and contribute nothing; sections with an unknown kind tag are skipped
//! with a warning.

use crate::common::markup_section::convert_markup_section;
use crate::error::FormatError;
use crate::formats::mobiledoc::conversion_rules::{ConversionRules, RootDirectionRule};
use crate::formats::mobiledoc::model::{MobiledocSource, Section};
use crate::tree::nodes::{Direction, Document, ElementNode, Node};

pub fn build_document(
    source: &MobiledocSource,
    rules: &ConversionRules,
) -> Result<Document, FormatError> {
    let mut doc = Document::empty();

    for (index, section) in source.sections.iter().enumerate() {
        match section {
            Section::Markup { tag_name, markers } => {
                let node =
                    convert_markup_section(tag_name, markers, &source.markups, &source.atoms)?;
                doc.root.children.push(Node::Element(node));
                update_root_direction(&mut doc.root, rules.root_direction);
            }
            Section::Image | Section::List | Section::Card => {
                log::debug!(
                    "section {index}: {} sections are not converted",
                    section.kind_name()
                );
            }
            Section::Unknown(tag) => {
                log::warn!("section {index}: skipping unknown section kind {tag}");
            }
        }
    }

    Ok(doc)
}

fn update_root_direction(root: &mut ElementNode, rule: RootDirectionRule) {
    let inspected = match rule {
        RootDirectionRule::FirstSection => root.children.first(),
        RootDirectionRule::AppendedSection => root.children.last(),
    };
    let has_children = inspected
        .and_then(Node::as_element)
        .is_some_and(|section| !section.children.is_empty());
    if has_children {
        root.direction = Some(Direction::Ltr);
    }
}
