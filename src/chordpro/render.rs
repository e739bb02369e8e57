//! HTML fragment rendering of parsed lines.
//!
//! Each line becomes `<div class="CLASS">TEXT</div>`. A block opening emits
//! only its start tag and the matching close emits a bare `</div>`, so the
//! lines inside a block end up nested in it.

use std::fmt::Write;

use crate::constants::render::DEFAULT_SEPARATOR;
use crate::types::{LineKind, OutputLine};

/// Render a single line as an HTML fragment.
#[must_use]
pub fn render_line(line: &OutputLine) -> String {
    let mut out = String::new();
    match &line.kind {
        LineKind::BlockOpen(name) => {
            let _ = write!(out, r#"<div class="{name}">"#);
        }
        LineKind::BlockClose => out.push_str("</div>"),
        kind => {
            let class = kind.class().unwrap_or_default();
            let _ = write!(out, r#"<div class="{class}">{}</div>"#, line.text);
        }
    }
    out
}

/// Render all lines, joined by `separator`.
#[must_use]
pub fn render_html_with(lines: &[OutputLine], separator: &str) -> String {
    lines.iter().map(render_line).collect::<Vec<_>>().join(separator)
}

/// Render all lines joined by a single space.
#[must_use]
pub fn render_html(lines: &[OutputLine]) -> String {
    render_html_with(lines, DEFAULT_SEPARATOR)
}
