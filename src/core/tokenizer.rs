//! Line tokenizer
//!
//! Splits one input line into tokens on a set of delimiter characters.
//! A backslash protects the following character from being treated as a
//! delimiter, and text between quote characters is never split. Each token
//! can then be cleaned up: escape characters stripped, excluded substrings
//! removed and non-alphanumeric edges trimmed.

/// Delimiters used when none are configured: space and tab.
pub const DEFAULT_DELIMITERS: &str = " \t";

const ESCAPE: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    delimiters: String,
    allow_empty_tokens: bool,
    strip_escapes: bool,
    trim: bool,
    excludes: Vec<String>,
    quotes: Option<(char, char)>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
            allow_empty_tokens: false,
            strip_escapes: false,
            trim: false,
            excludes: Vec::new(),
            quotes: Some(('\'', '\'')),
        }
    }

    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Every delimiter ends a token, so adjacent delimiters yield empty tokens.
    pub fn allow_empty_tokens(mut self, yes: bool) -> Self {
        self.allow_empty_tokens = yes;
        self
    }

    pub fn strip_escapes(mut self, yes: bool) -> Self {
        self.strip_escapes = yes;
        self
    }

    pub fn trim(mut self, yes: bool) -> Self {
        self.trim = yes;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    /// Sets the quote characters, or disables quoting with `None`.
    pub fn with_quotes(mut self, quotes: Option<(char, char)>) -> Self {
        self.quotes = quotes;
        self
    }

    pub fn delimiters(&self) -> &str {
        &self.delimiters
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Splits a line into tokens. Trailing `\n` and `\r` characters are
    /// ignored.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let mut tokens = Vec::new();
        let mut current: Option<String> = None;
        let mut inside_quote = false;
        let mut previous_escape = false;

        for c in line.chars() {
            let is_delimiter = self.delimiters.contains(c) && !previous_escape && !inside_quote;

            if is_delimiter {
                match current.take() {
                    Some(token) => tokens.push(self.finish(token)),
                    None if self.allow_empty_tokens => tokens.push(self.finish(String::new())),
                    None => {}
                }
            } else {
                current.get_or_insert_with(String::new).push(c);
                if let Some((open, close)) = self.quotes {
                    if !inside_quote && c == open {
                        inside_quote = true;
                    } else if inside_quote && c == close {
                        inside_quote = false;
                    }
                }
            }

            previous_escape = c == ESCAPE && !previous_escape;
        }

        match current {
            Some(token) => tokens.push(self.finish(token)),
            None if self.allow_empty_tokens => tokens.push(self.finish(String::new())),
            None => {}
        }

        tokens
    }

    fn finish(&self, token: String) -> String {
        let mut token = if self.strip_escapes {
            strip_escape_characters(&token)
        } else {
            token
        };

        for exclude in self.excludes.iter().filter(|e| !e.is_empty()) {
            remove_all(&mut token, exclude);
        }

        if self.trim {
            trim_non_alphanumeric(&token)
        } else {
            token
        }
    }
}

/// Parses a `:` separated exclude list. `\:` is a literal colon.
pub fn split_excludes(list: &str) -> Vec<String> {
    Tokenizer::new()
        .with_delimiters(":")
        .strip_escapes(true)
        .tokenize(list)
}

/// Removes unescaped backslashes: `\x` becomes `x` and `\\` becomes `\`.
pub fn strip_escape_characters(token: &str) -> String {
    let mut output = String::with_capacity(token.len());
    let mut escaped = false;
    for c in token.chars() {
        if c == ESCAPE && !escaped {
            escaped = true;
        } else {
            output.push(c);
            escaped = false;
        }
    }
    output
}

/// Removes `pattern` until it no longer occurs, including occurrences that
/// only appear after an earlier removal.
fn remove_all(token: &mut String, pattern: &str) {
    while let Some(pos) = token.find(pattern) {
        token.replace_range(pos..pos + pattern.len(), "");
    }
}

/// Trims everything before the first and after the last ASCII alphanumeric.
/// A token with no alphanumeric characters keeps its first character.
pub fn trim_non_alphanumeric(token: &str) -> String {
    let is_alnum = |c: char| c.is_ascii_alphanumeric();
    match (token.find(is_alnum), token.rfind(is_alnum)) {
        (Some(start), Some(end)) => token[start..=end].to_string(),
        _ => token.chars().next().map(String::from).unwrap_or_default(),
    }
}
