//! Line classification.
//!
//! Each line is tested against a fixed priority order: comment, directive,
//! chord-annotated, plain lyric. Delimiters match the first literal pair; they
//! are not nesting-aware.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::markers::COMMENT_PREFIX;

/// Regex matching the first `{...}` directive and capturing its body.
#[allow(clippy::expect_used)]
static RE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^}]*)\}").expect("valid regex: RE_DIRECTIVE")
});

/// Regex matching a `[chord]` annotation and capturing the chord name.
#[allow(clippy::expect_used)]
pub(crate) static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]").expect("valid regex: RE_CHORD")
});

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Starts with `#`; produces no output.
    Comment,
    /// Contains a `{...}` directive; carries the text between the braces.
    Directive(&'a str),
    /// Contains at least one complete `[chord]` annotation.
    Chords,
    /// Anything else, emitted unchanged as lyrics.
    Plain,
}

/// Classify a line. Directives take precedence over chord annotations.
#[must_use]
pub fn classify(line: &str) -> LineClass<'_> {
    if line.starts_with(COMMENT_PREFIX) {
        return LineClass::Comment;
    }

    if let Some(body) = RE_DIRECTIVE.captures(line).and_then(|caps| caps.get(1)) {
        return LineClass::Directive(body.as_str());
    }

    if RE_CHORD.is_match(line) {
        LineClass::Chords
    } else {
        LineClass::Plain
    }
}
