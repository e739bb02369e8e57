//! Line-by-line song parser.

use super::align::align;
use super::classify::{classify, LineClass};
use super::directive::Directive;
use crate::error::Result;
use crate::types::OutputLine;

/// Per-call parse state. Created fresh for every song.
#[derive(Debug, Default)]
pub struct ParserState {
    /// Lines produced so far, in input order.
    pub lines: Vec<OutputLine>,
    /// True while a bare block directive such as `{chorus}` is open.
    pub in_block: bool,
}

impl ParserState {
    /// Apply a directive, toggling block state for the bare form.
    pub fn push_directive(&mut self, directive: Directive<'_>) {
        let line = match directive {
            Directive::Keyed { name, value } => OutputLine::directive(name, value),
            Directive::Bare(name) if self.in_block => {
                tracing::trace!("Closing block at {{{name}}}");
                OutputLine::block_close()
            }
            Directive::Bare(name) => OutputLine::block_open(name),
        };
        if matches!(directive, Directive::Bare(_)) {
            self.in_block = !self.in_block;
        }
        self.lines.push(line);
    }
}

/// Parses ChordPro text into classified output lines.
///
/// The parser holds no state between calls, so one instance can be shared
/// freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct SongParser;

impl SongParser {
    /// Parse a whole song, transposing chords by `half_steps`.
    pub fn parse(song: &str, half_steps: i32) -> Result<Vec<OutputLine>> {
        let mut state = ParserState::default();

        for (idx, raw) in song.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let line_no = idx + 1;

            let class = classify(line);
            tracing::trace!("line {line_no}: {class:?}");

            match class {
                LineClass::Comment => {}
                LineClass::Directive(body) => state.push_directive(Directive::parse(body)),
                LineClass::Chords => {
                    let aligned = align(line, line_no, half_steps)?;
                    state.lines.push(OutputLine::chords(aligned.chords));
                    state.lines.push(OutputLine::lyrics(aligned.lyrics));
                }
                LineClass::Plain => state.lines.push(OutputLine::lyrics(line)),
            }
        }

        if state.in_block {
            tracing::debug!("Song ended inside an open block");
        }

        Ok(state.lines)
    }
}
