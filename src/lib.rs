//! `chordflow` - `ChordPro` song rendering with chord transposition.
//!
//! Turns a `ChordPro` song into classified, column-aligned lines: chord lines
//! sit above their lyric lines, directives become titled lines, and block
//! directives wrap the lines between them.

// Re-export public modules for use in integration tests and as a library
pub mod chordpro;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use chordpro::{transform, transform_song, try_transform};
