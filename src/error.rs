use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum PkError {
    InvalidField {
        field: String,
        reason: String,
    },
    Config {
        path: String,
        message: String,
    },
    Io {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl PkError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(operation: impl Into<String>, path: Option<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for PkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField { field, reason } => {
                writeln!(f, "{} Invalid field: {}", "✗".red().bold(), field.yellow())?;
                writeln!(f, "  {} {}", "→".blue(), reason)?;
                Ok(())
            }
            Self::Config { path, message } => {
                writeln!(f, "{} Configuration error", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::Io {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for PkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for PkError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, PkError>;
