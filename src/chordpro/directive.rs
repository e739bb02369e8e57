//! Directive parsing: `{name:value}` and bare `{name}` forms.

use crate::constants::markers::DIRECTIVE_SEPARATOR;

/// A directive body taken from between the braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `{name:value}`, emitted as a single line of class `name`.
    Keyed {
        /// Directive name, used as the output class.
        name: &'a str,
        /// Trimmed value, used as the output text.
        value: &'a str,
    },
    /// `{name}`, toggling a block open or closed.
    Bare(&'a str),
}

impl<'a> Directive<'a> {
    /// Parse a directive body, splitting on the first colon.
    #[must_use]
    pub fn parse(body: &'a str) -> Self {
        match body.split_once(DIRECTIVE_SEPARATOR) {
            Some((name, value)) => Self::Keyed { name: name.trim(), value: value.trim() },
            None => Self::Bare(body.trim()),
        }
    }
}
