//! Field printer
//!
//! Turns the tokens of one line into one output line according to the
//! requested fields.

use std::io::{self, Write};

use super::field::FieldSpec;

pub const DEFAULT_SEPARATOR: &str = " ";
pub const DEFAULT_NULL_TEXT: &str = "NULL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPrinter {
    fields: Vec<FieldSpec>,
    separator: String,
    null_text: Option<String>,
}

impl FieldPrinter {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            separator: DEFAULT_SEPARATOR.to_string(),
            null_text: Some(DEFAULT_NULL_TEXT.to_string()),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Text printed for missing or empty tokens. `None` omits them.
    pub fn with_null_text(mut self, null_text: Option<String>) -> Self {
        self.null_text = null_text;
        self
    }

    /// Renders one output line, including its trailing newline.
    pub fn render<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut line = String::new();
        let mut at_start = true;

        for value in self.values(tokens) {
            if !at_start {
                line.push_str(&self.separator);
            }
            line.push_str(value);
            at_start = false;
        }

        line.push('\n');
        line
    }

    pub fn print<S: AsRef<str>, W: Write>(&self, out: &mut W, tokens: &[S]) -> io::Result<()> {
        out.write_all(self.render(tokens).as_bytes())
    }

    /// The values to print for a line, with null text already substituted.
    fn values<'a, S: AsRef<str>>(&'a self, tokens: &'a [S]) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .flat_map(move |field| self.expand(field, tokens))
            .filter_map(move |value| match value {
                Some(text) if !text.is_empty() => Some(text),
                _ => self.null_text.as_deref(),
            })
    }

    /// Resolves one field to raw values; `None` marks a missing token.
    fn expand<'a, S: AsRef<str>>(
        &'a self,
        field: &'a FieldSpec,
        tokens: &'a [S],
    ) -> Box<dyn Iterator<Item = Option<&'a str>> + 'a> {
        let token = move |position: usize| -> Option<&'a str> {
            position
                .checked_sub(1)
                .and_then(|index| tokens.get(index))
                .map(|t| t.as_ref())
        };

        match field {
            FieldSpec::Literal(text) => Box::new(std::iter::once(Some(text.as_str()))),
            FieldSpec::Position(position) => Box::new(std::iter::once(token(*position))),
            FieldSpec::Range { start, end } => {
                let mut end = end.unwrap_or(tokens.len());
                // Positions past the last token print nothing without null text.
                if self.null_text.is_none() {
                    end = end.min(tokens.len());
                }
                Box::new((*start..=end).map(token))
            }
        }
    }
}
