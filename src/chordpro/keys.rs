//! Note-name lookup table and semitone arithmetic.
//!
//! The table is a fixed list of spellings in declared order. Several spellings
//! share a position (`A#`/`Bb`, `C#`/`Db`, ...); reverse lookups return the
//! first spelling declared for a position.

use crate::constants::keys::{MAX_HALF_STEPS, OCTAVE};

/// A pitch-class spelling paired with its semitone position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// Spelling, e.g. `"C#"`.
    pub name: &'static str,
    /// Semitone position in `0..=11`.
    pub position: i32,
}

/// Spellings in lookup order. Position 0 is `Ab`.
const NOTES: [Note; 17] = [
    Note { name: "Ab", position: 0 },
    Note { name: "A", position: 1 },
    Note { name: "A#", position: 2 },
    Note { name: "Bb", position: 2 },
    Note { name: "B", position: 3 },
    Note { name: "C", position: 4 },
    Note { name: "C#", position: 5 },
    Note { name: "Db", position: 5 },
    Note { name: "D", position: 6 },
    Note { name: "D#", position: 7 },
    Note { name: "Eb", position: 7 },
    Note { name: "E", position: 8 },
    Note { name: "F", position: 9 },
    Note { name: "F#", position: 10 },
    Note { name: "Gb", position: 10 },
    Note { name: "G", position: 11 },
    Note { name: "G#", position: 0 },
];

/// Stateless lookup over the fixed note table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTable;

impl KeyTable {
    /// All notes in declared order.
    #[must_use]
    pub const fn notes() -> &'static [Note] {
        &NOTES
    }

    /// Semitone position of a spelling, or `None` for an unknown spelling.
    #[must_use]
    pub fn position_of(name: &str) -> Option<i32> {
        NOTES.iter().find(|note| note.name == name).map(|note| note.position)
    }

    /// Canonical spelling for a position: the first declared entry wins.
    #[must_use]
    pub fn name_of(position: i32) -> Option<&'static str> {
        NOTES.iter().find(|note| note.position == position).map(|note| note.name)
    }

    /// Transpose a chord root by `half_steps`.
    ///
    /// Unknown roots come back unchanged. The shifted position is corrected by
    /// at most one octave, so offsets are expected within `-12..=12`; anything
    /// further lands outside the table and the root is returned unchanged.
    #[must_use]
    pub fn transpose(root: &str, half_steps: i32) -> String {
        let Some(position) = Self::position_of(root) else {
            tracing::debug!("Unknown chord root {root:?}, leaving as is");
            return root.to_string();
        };

        let mut shifted = position.saturating_add(half_steps);
        if shifted < 0 {
            shifted += OCTAVE;
        } else if shifted > MAX_HALF_STEPS {
            shifted -= OCTAVE;
        }

        Self::name_of(shifted).map_or_else(
            || {
                tracing::debug!("Transposing {root:?} by {half_steps} left the octave, leaving as is");
                root.to_string()
            },
            str::to_string,
        )
    }
}
