//! The mobiledoc to lexical conversion core.

pub mod markup_section;
pub mod sections;
