//! `ChordPro` parsing, transposition and rendering.
//!
//! [`transform`] is the entry point used by display layers: it never fails,
//! and falls back to the original text when something goes wrong.
//! [`try_transform`] exposes the failure instead, and [`SongParser::parse`]
//! returns the line records for renderers other than HTML.

pub mod align;
pub mod chord;
pub mod classify;
pub mod directive;
pub mod keys;
pub mod parser;
pub mod render;

use std::borrow::Cow;

pub use chord::{transpose_chord, Chord};
pub use keys::{KeyTable, Note};
pub use parser::SongParser;
pub use render::{render_html, render_html_with};

use crate::error::Result;

/// Parse and render a song, propagating any internal failure.
pub fn try_transform(song: &str, half_steps: i32) -> Result<String> {
    let lines = SongParser::parse(song, half_steps)?;
    Ok(render_html(&lines))
}

/// Parse and render a song as HTML fragments.
///
/// Empty input is returned unchanged. On an internal failure the error is
/// logged and the original text is returned.
pub fn transform_song(song: &str, half_steps: i32) -> Cow<'_, str> {
    transform_with(song, |text| try_transform(text, half_steps))
}

/// Run `render` over a non-empty song, masking failures with the original text.
pub fn transform_with(song: &str, render: impl FnOnce(&str) -> Result<String>) -> Cow<'_, str> {
    if song.is_empty() {
        return Cow::Borrowed(song);
    }

    match render(song) {
        Ok(html) => Cow::Owned(html),
        Err(e) => {
            tracing::warn!("chordpro translation error: {e}");
            Cow::Borrowed(song)
        }
    }
}

/// [`transform_song`] for an optional song; `None` passes through.
pub fn transform(song: Option<&str>, half_steps: i32) -> Option<Cow<'_, str>> {
    song.map(|text| transform_song(text, half_steps))
}
