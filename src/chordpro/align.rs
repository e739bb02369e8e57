//! Chord/lyric segmentation and column alignment.
//!
//! A chord-annotated line such as `Amaz[D]ing [G]grace` is split into
//! alternating lyric and chord segments and rebuilt as two lines:
//!
//! ```text
//!     D   G
//! Amazing grace
//! ```
//!
//! After every lyric segment both accumulators end on the same column, so each
//! chord starts exactly above the lyric text that follows it. This holds
//! whatever length a chord has after transposition.

use std::cmp::Ordering;

use super::chord::transpose_chord;
use super::classify::RE_CHORD;
use crate::constants::markers::HYPHEN;
use crate::error::{Error, Result};

/// A slice of a chord-annotated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Lyric text between chords, possibly empty.
    Lyric(&'a str),
    /// Chord name with the brackets stripped.
    Chord(&'a str),
}

/// Split a line at every `[chord]` annotation.
///
/// The result alternates lyric, chord, lyric, ... and always starts and ends
/// with a lyric segment, which may be empty.
#[must_use]
pub fn split_segments(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in RE_CHORD.captures_iter(line) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        segments.push(Segment::Lyric(&line[last..whole.start()]));
        segments.push(Segment::Chord(name.as_str()));
        last = whole.end();
    }
    segments.push(Segment::Lyric(&line[last..]));

    segments
}

/// A chord line and the lyric line it sits above.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedLine {
    /// Chords, spaced so each starts above its lyric anchor.
    pub chords: String,
    /// Lyrics, with hyphens or spaces inserted where chords are wider.
    pub lyrics: String,
}

impl AlignedLine {
    /// Append a lyric segment and pad both lines back into step.
    ///
    /// `chord_len` is the printed length of the chord that precedes the
    /// segment (0 at the start of the line). The last segment of a line has
    /// no chord after it, so its lyrics are never padded or hyphenated.
    fn push_lyric(&mut self, text: &str, chord_len: usize, chord_follows: bool) {
        self.lyrics.push_str(text);

        let len = text.chars().count();
        if !chord_follows {
            if len > chord_len {
                push_spaces(&mut self.chords, len - chord_len);
            }
            return;
        }

        let mid_word = text.chars().last().is_some_and(|c| c.is_ascii_lowercase());

        match len.cmp(&chord_len) {
            Ordering::Less => {
                self.chords.push(' ');
                self.lyrics.push(if mid_word { HYPHEN } else { ' ' });
                self.lyrics.push(' ');
                push_spaces(&mut self.lyrics, chord_len - len - 1);
            }
            Ordering::Equal => {
                self.chords.push(' ');
                self.lyrics.push(if mid_word { HYPHEN } else { ' ' });
            }
            Ordering::Greater => push_spaces(&mut self.chords, len - chord_len),
        }
    }
}

fn push_spaces(buf: &mut String, count: usize) {
    buf.push_str(&" ".repeat(count));
}

/// Build the aligned chord and lyric lines for a chord-annotated line.
///
/// Chords are transposed by `half_steps` when it is nonzero. `line_no` is only
/// used for error context.
pub fn align(line: &str, line_no: usize, half_steps: i32) -> Result<AlignedLine> {
    let segments = split_segments(line);
    if segments.len() % 2 == 0 {
        return Err(Error::parse(line_no, "line does not end on a lyric segment"));
    }
    let last = segments.len() - 1;

    let mut aligned = AlignedLine::default();
    let mut chord_len = 0;

    for (idx, segment) in segments.iter().enumerate() {
        match (idx % 2, segment) {
            (0, Segment::Lyric(text)) => {
                // Empty edges have nothing to sit under a chord
                if text.is_empty() && (idx == 0 || idx == last) {
                    continue;
                }
                aligned.push_lyric(text, chord_len, idx != last);
            }
            (1, Segment::Chord(name)) => {
                let chord = if half_steps == 0 {
                    (*name).to_string()
                } else {
                    transpose_chord(name, half_steps)
                };
                chord_len = chord.chars().count();
                aligned.chords.push_str(&chord);
            }
            _ => {
                return Err(Error::parse(line_no, format!("segment {idx} out of order: {segment:?}")));
            }
        }
    }

    Ok(aligned)
}
