use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::FixError;
use crate::model::{FileChange, Indented};
use crate::util::display_relative;

/// A file that could not be read or written.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: FixError,
}

/// Totals for one batch run.
#[derive(Debug, Default)]
pub struct FixSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub imports_fixed: usize,
    pub written: usize,
    pub failures: Vec<FileFailure>,
}

impl FixSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl fmt::Display for FixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} import{} in {} of {} file{}",
            self.imports_fixed,
            plural(self.imports_fixed),
            self.files_changed,
            self.files_scanned,
            plural(self.files_scanned)
        )?;
        if self.has_failures() {
            write!(f, ", {} failed", self.failures.len())?;
        }
        Ok(())
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Receives progress from the batch fixer.
pub trait Reporter {
    fn file_fixed(&self, change: &FileChange);
    fn file_failed(&self, path: &Path, error: &FixError);
    fn finished(&self, summary: &FixSummary, dry_run: bool);
}

/// Human-readable report on stdout; failures on stderr.
pub struct ConsoleReporter {
    pub root: PathBuf,
    pub verbose: bool,
}

impl Reporter for ConsoleReporter {
    fn file_fixed(&self, change: &FileChange) {
        let n = change.rewrites.len();
        println!(
            "  {}  ({n} import{})",
            display_relative(&change.path, &self.root),
            plural(n)
        );
        if self.verbose {
            for rewrite in &change.rewrites {
                println!("{}", Indented("      ", rewrite));
            }
        }
    }

    fn file_failed(&self, path: &Path, error: &FixError) {
        tracing::debug!(path = %path.display(), "skipping file");
        eprintln!("aliasfix: {error}");
    }

    fn finished(&self, summary: &FixSummary, dry_run: bool) {
        println!();
        if dry_run {
            println!("dry run: would fix {summary}");
        } else if summary.written < summary.files_changed {
            println!("found {summary}; wrote {} file{}", summary.written, plural(summary.written));
        } else {
            println!("fixed {summary}");
        }
    }
}
