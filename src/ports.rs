//! Boundaries between the fixer and the outside world.
//!
//! File access and the confirmation prompt sit behind traits so the batch
//! logic runs against in-memory fakes in tests.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::FixError;

/// Reads and writes source files as UTF-8 text.
pub trait FileStore {
    /// # Errors
    ///
    /// Returns `FixError::Io` if the file is missing or not valid UTF-8.
    fn read(&self, path: &Path) -> Result<String, FixError>;

    /// # Errors
    ///
    /// Returns `FixError::Io` if the write fails.
    fn write(&self, path: &Path, contents: &str) -> Result<(), FixError>;
}

/// Yes/no gate in front of destructive writes.
pub trait UserInteraction {
    /// # Errors
    ///
    /// Returns `FixError::Prompt` if the answer cannot be read.
    fn confirm(&mut self, question: &str) -> Result<bool, FixError>;
}

/// Live file store backed by `std::fs`.
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> Result<String, FixError> {
        std::fs::read_to_string(path).map_err(|e| FixError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FixError> {
        std::fs::write(path, contents).map_err(|e| FixError::io(path, e))
    }
}

/// Asks on `writer`, reads one line from `reader`.
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> UserInteraction for TerminalPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, FixError> {
        write!(self.writer, "{question} [y/N] ").map_err(FixError::Prompt)?;
        self.writer.flush().map_err(FixError::Prompt)?;

        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(FixError::Prompt)?;
        Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

/// Agrees to everything; backs `--yes`.
pub struct AutoConfirm;

impl UserInteraction for AutoConfirm {
    fn confirm(&mut self, _question: &str) -> Result<bool, FixError> {
        Ok(true)
    }
}
