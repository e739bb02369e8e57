//! Application constants.
//!
//! Centralizes magic numbers and markup markers for better maintainability.

/// Key table and semitone arithmetic constants.
pub mod keys {
    /// Highest valid semitone position (positions run `0..=MAX_HALF_STEPS`).
    pub const MAX_HALF_STEPS: i32 = 11;

    /// Number of distinct pitch classes in one octave.
    pub const OCTAVE: i32 = MAX_HALF_STEPS + 1;
}

/// Output line class names.
pub mod classes {
    /// Class of the chord line emitted for a chord-annotated input line.
    pub const CHORDS: &str = "chords";

    /// Class of lyric lines, both plain and chord-paired.
    pub const LYRICS: &str = "lyrics";
}

/// Song text markers.
pub mod markers {
    /// Lines starting with this prefix are comments.
    pub const COMMENT_PREFIX: char = '#';

    /// Separator between a directive's name and its value.
    pub const DIRECTIVE_SEPARATOR: char = ':';

    /// Continuation marker written under a chord that splits a word.
    pub const HYPHEN: char = '-';
}

/// Rendering constants.
pub mod render {
    /// Default separator placed between rendered output lines.
    pub const DEFAULT_SEPARATOR: &str = " ";
}
