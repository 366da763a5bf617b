//! Text format bitmask
//!
//! Lexical stores inline formatting as a bitmask on each text leaf, while
//! mobiledoc keeps a list of open markup tags. [`TextFormat::from_tags`] folds
//! the tags of the currently open markups into that bitmask.
//!
//! | Markup tag        | Bit | Meaning       |
//! |-------------------|-----|---------------|
//! | `strong`, `b`     | 0   | bold          |
//! | `em`, `i`         | 1   | italic        |
//! | `s`               | 2   | strikethrough |
//! | (none)            | 3   | underline     |
//! | `code`            | 4   | code          |
//! | `sub`             | 5   | subscript     |
//! | `sup`             | 6   | superscript   |
//!
//! Bit 3 is reserved by the lexical schema; no mobiledoc markup maps to it.
//! Tags outside the table (including `a`) contribute nothing.

use serde::Serialize;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextFormat(u32);

impl TextFormat {
    pub const PLAIN: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const ITALIC: Self = Self(1 << 1);
    pub const STRIKETHROUGH: Self = Self(1 << 2);
    pub const CODE: Self = Self(1 << 4);
    pub const SUBSCRIPT: Self = Self(1 << 5);
    pub const SUPERSCRIPT: Self = Self(1 << 6);

    /// The bit contributed by a single markup tag.
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "strong" | "b" => Self::BOLD,
            "em" | "i" => Self::ITALIC,
            "s" => Self::STRIKETHROUGH,
            "code" => Self::CODE,
            "sub" => Self::SUBSCRIPT,
            "sup" => Self::SUPERSCRIPT,
            _ => Self::PLAIN,
        }
    }

    /// OR together the bits of every tag. Order and repetition do not matter.
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter()
            .fold(Self::PLAIN, |format, tag| format | Self::for_tag(tag))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for TextFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TextFormat {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
