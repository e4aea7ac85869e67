//! Resolved run configuration
//!
//! Settings are layered: built-in defaults, then the defaults file, then the
//! exclude list from the environment, then command-line flags.

use std::path::PathBuf;

use super::manager::ConfigFile;
use crate::core::escapes::convert_escapes;
use crate::core::printer::{DEFAULT_NULL_TEXT, DEFAULT_SEPARATOR};
use crate::core::tokenizer::{split_excludes, DEFAULT_DELIMITERS};
use crate::core::{FieldPrinter, FieldSpec, Tokenizer};
use crate::error::Result;

/// Exclude list variable, `:` separated.
pub const EXCLUDES_ENV: &str = "PK_EXCLUDES";
/// Older name of [`EXCLUDES_ENV`], read when the new one is unset.
pub const LEGACY_EXCLUDES_ENV: &str = "FIELDX_EXCLUDES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub delimiters: String,
    pub separator: String,
    pub null_text: Option<String>,
    pub excludes: Vec<String>,
    pub allow_empty_tokens: bool,
    pub strip_escapes: bool,
    pub trim: bool,
    pub input: Option<PathBuf>,
    pub fields: Vec<FieldSpec>,
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub delimiters: Option<String>,
    pub separator: Option<String>,
    /// `Some(None)` means the flag was given without a value.
    pub null_text: Option<Option<String>>,
    /// `Some(None)` means the flag was given without a value.
    pub excludes: Option<Option<String>>,
    pub allow_empty_tokens: bool,
    pub strip_escapes: bool,
    pub trim: bool,
    pub input: Option<PathBuf>,
    pub fields: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            null_text: Some(DEFAULT_NULL_TEXT.to_string()),
            excludes: Vec::new(),
            allow_empty_tokens: false,
            strip_escapes: false,
            trim: false,
            input: None,
            fields: Vec::new(),
        }
    }
}

impl Settings {
    /// Builds settings from every layer, lowest precedence first.
    pub fn resolve(
        file: Option<&ConfigFile>,
        env_excludes: Option<Vec<String>>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(file) = file {
            settings.apply_file(file);
        }
        if let Some(excludes) = env_excludes {
            settings.excludes = excludes;
        }
        settings.apply_overrides(overrides)?;
        Ok(settings)
    }

    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(delimiters) = &file.delimiters {
            self.delimiters = delimiters.clone();
        }
        if let Some(separator) = &file.separator {
            self.separator = separator.clone();
        }
        if let Some(null_text) = &file.null {
            self.null_text = null_text.clone();
        }
        if let Some(excludes) = &file.excludes {
            self.excludes = excludes.clone();
        }
        self.allow_empty_tokens = file.empty.unwrap_or(self.allow_empty_tokens);
        self.strip_escapes = file.backslash.unwrap_or(self.strip_escapes);
        self.trim = file.trim.unwrap_or(self.trim);
    }

    /// Applies command-line values. Flags can only switch options on.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> Result<()> {
        if let Some(delimiters) = &overrides.delimiters {
            self.delimiters = convert_escapes(delimiters);
        }
        if let Some(separator) = &overrides.separator {
            self.separator = convert_escapes(separator);
        }
        if let Some(null_text) = &overrides.null_text {
            self.null_text = null_text.clone();
        }
        if let Some(excludes) = &overrides.excludes {
            self.excludes = excludes.as_deref().map(split_excludes).unwrap_or_default();
        }
        self.allow_empty_tokens |= overrides.allow_empty_tokens;
        self.strip_escapes |= overrides.strip_escapes;
        self.trim |= overrides.trim;
        if overrides.input.is_some() {
            self.input = overrides.input.clone();
        }
        self.fields = FieldSpec::parse_all(overrides.fields.as_slice())?;
        Ok(())
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new()
            .with_delimiters(self.delimiters.clone())
            .allow_empty_tokens(self.allow_empty_tokens)
            .strip_escapes(self.strip_escapes)
            .trim(self.trim)
            .with_excludes(self.excludes.clone())
    }

    pub fn printer(&self) -> FieldPrinter {
        FieldPrinter::new(self.fields.clone())
            .with_separator(self.separator.clone())
            .with_null_text(self.null_text.clone())
    }
}

/// Reads the exclude list from `PK_EXCLUDES`, falling back to
/// `FIELDX_EXCLUDES`.
pub fn excludes_from_env() -> Option<Vec<String>> {
    excludes_from(|name| std::env::var(name).ok())
}

pub fn excludes_from(lookup: impl Fn(&str) -> Option<String>) -> Option<Vec<String>> {
    lookup(EXCLUDES_ENV)
        .or_else(|| lookup(LEGACY_EXCLUDES_ENV))
        .map(|list| split_excludes(&list))
}
