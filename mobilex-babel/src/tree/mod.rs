//! The lexical document tree produced by conversion.
//!
//! This is the target side of the conversion: a root container owning block
//! containers (paragraphs, headings, quotes), which in turn own inline nodes
//! (text leaves, links and line breaks). The types serialize to the exact JSON
//! shape the lexical editor runtime loads.

pub mod factory;
pub mod nodes;
pub mod text_format;
