//! Mobiledoc to lexical document conversion
//!
//!     This crate converts documents stored in mobiledoc, the compact array-encoded format of the
//!     legacy editor, into the nested node tree loaded by the lexical editor runtime.
//!
//!     This is a pure lib, that is, it powers mobilex-cli but is shell agnostic: no code should
//!     be written that supposes a shell environment, be it std print, env vars etc. Diagnostics go
//!     through the `log` facade and are silent unless the application installs a logger.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # String in, string out entry points
//!     ├── formats
//!     │   ├── mobiledoc           # Source model, loader, conversion rules
//!     │   └── lexical             # JSON serializer
//!     ├── tree                    # Lexical node types and node construction
//!     └── common                  # The conversion core
//!
//! Core Algorithms
//!
//!     Mobiledoc is flat: a section is a list of markers, and inline formatting is expressed as
//!     markups opened before and closed after marker text. Lexical is nested: each text leaf
//!     carries its full format bitmask and link text lives inside link containers. Rebuilding the
//!     nesting from the open/close bookkeeping is the heart of the crate, see
//!     ./common/markup_section.rs. ./common/sections.rs assembles converted sections under the
//!     root.
//!
//!     The conversion is a pure function of its input: every call builds a fresh tree and no
//!     state survives between calls, so concurrent callers need no coordination.
//!
//! Coverage
//!
//!     Markup sections (`p`, `h2`, `h3`, `blockquote`) are converted. Image, list and card sections
//!     are skipped, as are sections with unknown kind tags.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub mod common;
pub mod tree;

pub use error::FormatError;
pub use format::Format;
pub use formats::mobiledoc::conversion_rules::{ConversionRules, RootDirectionRule};
pub use registry::FormatRegistry;
pub use transforms::{mobiledoc_to_lexical, mobiledoc_to_lexical_with_rules};
pub use tree::nodes::Document;
