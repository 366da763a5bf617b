//! Format implementations
//!
//! This module contains the format implementations that convert between
//! text representations and the lexical document tree.

pub mod lexical;
pub mod mobiledoc;

pub use lexical::LexicalFormat;
pub use mobiledoc::MobiledocFormat;
