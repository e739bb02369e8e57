//! End-to-end tests for song transformation through the public API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chordflow::chordpro::{KeyTable, SongParser};
use chordflow::types::{LineKind, OutputLine};
use chordflow::{transform, transform_song, try_transform};

const SONG: &str = "\
{title: Amazing Grace}
{subtitle: John Newton}
# capo 2
A[D]maz[D7]ing [G]grace, how [D]sweet the sound
{chorus}
That [D]saved a [A]wretch like [D]me
{chorus}
I once was lost";

#[test]
fn test_full_song_structure() {
    let lines = SongParser::parse(SONG, 0).unwrap();
    let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Directive("title".into()),
            LineKind::Directive("subtitle".into()),
            LineKind::Chords,
            LineKind::Lyrics,
            LineKind::BlockOpen("chorus".into()),
            LineKind::Chords,
            LineKind::Lyrics,
            LineKind::BlockClose,
            LineKind::Lyrics,
        ]
    );
    assert_eq!(lines[0].text, "Amazing Grace");
    assert_eq!(lines[8], OutputLine::lyrics("I once was lost"));
}

#[test]
fn test_lyrics_keep_their_words() {
    let lines = SongParser::parse(SONG, 0).unwrap();
    assert!(lines[3].text.starts_with("Amaz"));
    assert!(lines[3].text.contains("grace, how"));
    assert!(lines[3].text.ends_with("sweet the sound"));
}

#[test]
fn test_chords_stay_over_their_anchor_after_transposition() {
    let line = "That [D]saved a [A]wretch like [D]me";
    let anchors = ["saved", "wretch", "me"];

    for half_steps in -12..=12 {
        let lines = SongParser::parse(line, half_steps).unwrap();
        let chords: Vec<char> = lines[0].text.chars().collect();
        let lyrics = &lines[1].text;
        assert_eq!(lyrics, "That saved a wretch like me", "offset {half_steps}");

        let starts: Vec<usize> = (0..chords.len())
            .filter(|&i| chords[i] != ' ' && (i == 0 || chords[i - 1] == ' '))
            .collect();
        assert_eq!(starts.len(), anchors.len(), "offset {half_steps}: {:?}", lines[0].text);

        for (col, anchor) in starts.iter().zip(anchors) {
            let rest: String = lyrics.chars().skip(*col).collect();
            assert!(rest.starts_with(anchor), "offset {half_steps}: {anchor} not at column {col}");
        }
    }
}

#[test]
fn test_transposed_chord_names() {
    let lines = SongParser::parse("[C]Hello [G]world", 2).unwrap();
    assert_eq!(lines[0].text.split_whitespace().collect::<Vec<_>>(), vec!["D", "A"]);
    assert_eq!(lines[1].text, "Hello world");
}

#[test]
fn test_html_output() {
    let html = transform_song("{chorus}\n[C]Hello [G]world\n{chorus}", 0);
    assert_eq!(
        html,
        concat!(
            r#"<div class="chorus"> "#,
            r#"<div class="chords">C     G    </div> "#,
            r#"<div class="lyrics">Hello world</div> "#,
            "</div>"
        )
    );
}

#[test]
fn test_comments_vanish() {
    assert_eq!(transform_song("# only a comment", 0), "");
    assert_eq!(try_transform("# one\n# two", 5).unwrap(), "");
}

#[test]
fn test_empty_and_missing_input() {
    assert_eq!(transform(None, 1), None);
    assert_eq!(transform(Some(""), 1).as_deref(), Some(""));
}

#[test]
fn test_unknown_roots_survive() {
    let lines = SongParser::parse("[N.C.]Stop [H7]here", 3).unwrap();
    assert_eq!(lines[0].text.split_whitespace().collect::<Vec<_>>(), vec!["N.C.", "H7"]);
}

#[test]
fn test_key_table_round_trip() {
    for note in KeyTable::notes() {
        let canonical = KeyTable::transpose(note.name, 0);
        for k in -12..=12 {
            let there = KeyTable::transpose(note.name, k);
            assert_eq!(KeyTable::transpose(&there, -k), canonical);
        }
    }
}
