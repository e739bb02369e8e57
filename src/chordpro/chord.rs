//! Chord names split into a transposable root and a verbatim suffix.

use std::fmt;

use super::keys::KeyTable;

/// A chord name such as `C#m7`: root `C#`, suffix `m7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord<'a> {
    /// Letter plus an optional `#` or `b`.
    pub root: &'a str,
    /// Quality or extension, never transposed.
    pub suffix: &'a str,
}

impl<'a> Chord<'a> {
    /// Split a chord name into root and suffix.
    ///
    /// The root is the first character, plus the second one only when it is
    /// literally `#` or `b`. An empty name yields an empty root and suffix.
    #[must_use]
    pub fn parse(name: &'a str) -> Self {
        let mut chars = name.char_indices();
        let root_end = match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some(_), Some((idx, '#' | 'b'))) => idx + 1,
            (Some((_, first)), _) => first.len_utf8(),
        };
        let (root, suffix) = name.split_at(root_end);
        Self { root, suffix }
    }

    /// Transposed chord name. The suffix is reattached unchanged.
    #[must_use]
    pub fn transposed(&self, half_steps: i32) -> String {
        let mut name = KeyTable::transpose(self.root, half_steps);
        name.push_str(self.suffix);
        name
    }
}

impl fmt::Display for Chord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)
    }
}

/// Transpose a full chord name, e.g. `Bbm7` by 2 gives `Cm7`.
#[must_use]
pub fn transpose_chord(name: &str, half_steps: i32) -> String {
    Chord::parse(name).transposed(half_steps)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_root_and_suffix() {
        assert_eq!(Chord::parse("C"), Chord { root: "C", suffix: "" });
        assert_eq!(Chord::parse("C#m7"), Chord { root: "C#", suffix: "m7" });
        assert_eq!(Chord::parse("Bbsus4"), Chord { root: "Bb", suffix: "sus4" });
        assert_eq!(Chord::parse("Am"), Chord { root: "A", suffix: "m" });
        assert_eq!(Chord::parse(""), Chord { root: "", suffix: "" });
    }

    #[test]
    fn test_parse_lowercase_b_is_flat() {
        // Second char `b` always counts as a flat
        assert_eq!(Chord::parse("Cb"), Chord { root: "Cb", suffix: "" });
    }

    #[test]
    fn test_transpose_keeps_suffix() {
        assert_eq!(transpose_chord("Bbm7", 2), "Cm7");
        assert_eq!(transpose_chord("Dsus4", -2), "Csus4");
        assert_eq!(transpose_chord("G/B", 2), "A/B");
    }

    #[test]
    fn test_transpose_unknown_root_keeps_chord() {
        assert_eq!(transpose_chord("N.C.", 5), "N.C.");
        assert_eq!(transpose_chord("Cb", 1), "Cb");
    }

    #[test]
    fn test_display() {
        assert_eq!(Chord::parse("F#dim").to_string(), "F#dim");
    }
}
