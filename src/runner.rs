use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::config::Settings;
use crate::core::{FieldPrinter, Tokenizer};
use crate::error::{PkError, Result};

/// Outcome of one pass over an input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    /// The reader of our output went away before the input was exhausted.
    pub broken_pipe: bool,
}

/// Streams input lines through the tokenizer and field printer.
pub struct Runner {
    tokenizer: Tokenizer,
    printer: FieldPrinter,
}

impl Runner {
    pub fn new(tokenizer: Tokenizer, printer: FieldPrinter) -> Self {
        Self { tokenizer, printer }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tokenizer(), settings.printer())
    }

    /// Processes `input` one line at a time, writing one line per input line.
    ///
    /// Lines are decoded as UTF-8, replacing invalid sequences. A closed
    /// output pipe stops the run without an error.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .map_err(|e| PkError::io("read input", None, e))?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let tokens = self.tokenizer.tokenize(&line);
            tracing::trace!(line = summary.lines + 1, tokens = tokens.len(), "Tokenized line");

            match self.printer.print(&mut output, tokens.as_slice()) {
                Ok(()) => summary.lines += 1,
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    summary.broken_pipe = true;
                    return Ok(summary);
                }
                Err(e) => return Err(PkError::io("write output", None, e)),
            }
        }

        match output.flush() {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => summary.broken_pipe = true,
            other => other.map_err(|e| PkError::io("write output", None, e))?,
        }

        Ok(summary)
    }
}

/// Opens the input file, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                PkError::io("open input file", Some(path.display().to_string()), e)
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
