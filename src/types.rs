//! Core type definitions for parsed song output.
//!
//! A parsed song is an ordered list of [`OutputLine`] records. Each record pairs
//! a semantic [`LineKind`] with the text that should be displayed for it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::classes;

/// The semantic class of a produced line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum LineKind {
    /// Chord line paired with the lyric line that follows it.
    Chords,
    /// Lyric text, plain or aligned under a chord line.
    Lyrics,
    /// Keyed directive such as `{title: ...}`; carries the directive name.
    Directive(String),
    /// Opening wrapper of a block directive such as `{chorus}`.
    BlockOpen(String),
    /// Closing wrapper of the currently open block.
    BlockClose,
}

impl LineKind {
    /// Returns the class name used by renderers, if the kind has one.
    ///
    /// A block close has no class of its own.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Chords => Some(classes::CHORDS),
            Self::Lyrics => Some(classes::LYRICS),
            Self::Directive(name) | Self::BlockOpen(name) => Some(name),
            Self::BlockClose => None,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockOpen(name) => write!(f, "{name} (open)"),
            Self::BlockClose => write!(f, "(close)"),
            other => write!(f, "{}", other.class().unwrap_or_default()),
        }
    }
}

/// One classified, aligned line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Semantic class of the line.
    pub kind: LineKind,
    /// Text to display. Empty for block wrappers.
    pub text: String,
}

impl OutputLine {
    /// Create a chord line.
    pub fn chords(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Chords, text: text.into() }
    }

    /// Create a lyric line.
    pub fn lyrics(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Lyrics, text: text.into() }
    }

    /// Create a keyed directive line.
    pub fn directive(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { kind: LineKind::Directive(name.into()), text: text.into() }
    }

    /// Create a block opening wrapper.
    pub fn block_open(name: impl Into<String>) -> Self {
        Self { kind: LineKind::BlockOpen(name.into()), text: String::new() }
    }

    /// Create a block closing wrapper.
    pub const fn block_close() -> Self {
        Self { kind: LineKind::BlockClose, text: String::new() }
    }
}
