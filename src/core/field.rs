//! Field arguments: positions, ranges and literal text

use std::fmt;

use crate::error::{PkError, Result};

const RANGE_MARKER: &str = "..";

/// One FIELD argument from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// The n-th token, counting from 1.
    Position(usize),
    /// Tokens `start..=end`; an `end` of `None` runs to the last token.
    Range { start: usize, end: Option<usize> },
    /// Text printed as given.
    Literal(String),
}

impl FieldSpec {
    /// Parses `N`, `N..M`, `N..`, `..M` or `..`; anything else is a literal.
    ///
    /// A range end of `0` means "to the last token". A position or range
    /// start of `0` is rejected.
    pub fn parse(arg: &str) -> Result<Self> {
        let Some((head, tail)) = arg.split_once(RANGE_MARKER) else {
            if !is_number(arg) {
                return Ok(Self::Literal(arg.to_string()));
            }
            return Ok(Self::Position(parse_position(arg, arg)?));
        };

        let head_ok = head.is_empty() || is_number(head);
        let tail_ok = tail.is_empty() || is_number(tail);
        if !head_ok || !tail_ok {
            return Ok(Self::Literal(arg.to_string()));
        }

        let start = if head.is_empty() {
            1
        } else {
            parse_position(arg, head)?
        };
        let end = if tail.is_empty() {
            None
        } else {
            match parse_number(arg, tail)? {
                0 => None,
                n => Some(n),
            }
        };

        Ok(Self::Range { start, end })
    }

    pub fn parse_all<S: AsRef<str>>(args: &[S]) -> Result<Vec<Self>> {
        args.iter().map(|arg| Self::parse(arg.as_ref())).collect()
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(n) => write!(f, "{n}"),
            Self::Range { start, end: Some(end) } => write!(f, "{start}..{end}"),
            Self::Range { start, end: None } => write!(f, "{start}.."),
            Self::Literal(text) => write!(f, "{text:?}"),
        }
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(arg: &str, digits: &str) -> Result<usize> {
    digits
        .parse::<usize>()
        .map_err(|_| PkError::invalid_field(arg, "field position is too large"))
}

fn parse_position(arg: &str, digits: &str) -> Result<usize> {
    match parse_number(arg, digits)? {
        0 => Err(PkError::invalid_field(arg, "field positions start at 1")),
        n => Ok(n),
    }
}
