//! Batch fixing: scan, rewrite, confirm, write.

use std::path::{Path, PathBuf};

use crate::error::FixError;
use crate::extract::scan_imports;
use crate::model::{FileChange, FileTask};
use crate::output::{FileFailure, FixSummary, Reporter};
use crate::ports::{FileStore, UserInteraction};
use crate::resolve::AliasTable;
use crate::rewrite::rewrite_file;

/// Run-wide options, passed in explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    pub dry_run: bool,
}

/// Applies an alias table to a batch of files.
pub struct Fixer<'a> {
    pub table: &'a AliasTable,
    pub store: &'a dyn FileStore,
    pub reporter: &'a dyn Reporter,
    pub options: FixOptions,
}

impl Fixer<'_> {
    /// Fix every file in `files`, in order.
    ///
    /// Files that cannot be read or written are reported and skipped. Files
    /// without aliased imports are never written. Writes happen only after
    /// `prompt` agrees, and never in dry-run mode.
    ///
    /// # Errors
    ///
    /// Only a failing confirmation prompt aborts the run; per-file errors are
    /// collected in the returned summary.
    pub fn run(
        &self,
        files: &[PathBuf],
        prompt: &mut dyn UserInteraction,
    ) -> Result<FixSummary, FixError> {
        let mut summary = FixSummary {
            files_scanned: files.len(),
            ..FixSummary::default()
        };

        let mut changes = Vec::new();
        for path in files {
            match self.fix_one(path) {
                Ok(Some(change)) => {
                    summary.files_changed += 1;
                    summary.imports_fixed += change.rewrites.len();
                    self.reporter.file_fixed(&change);
                    changes.push(change);
                }
                Ok(None) => {}
                Err(error) => self.fail(&mut summary, path, error),
            }
        }

        tracing::info!(
            files = summary.files_scanned,
            changed = summary.files_changed,
            imports = summary.imports_fixed,
            "scan complete"
        );

        if changes.is_empty() || self.options.dry_run {
            self.reporter.finished(&summary, self.options.dry_run);
            return Ok(summary);
        }

        let question = format!(
            "Rewrite {} import(s) in {} file(s)?",
            summary.imports_fixed, summary.files_changed
        );
        if !prompt.confirm(&question)? {
            tracing::info!("write declined");
            self.reporter.finished(&summary, false);
            return Ok(summary);
        }

        for change in &changes {
            match self.store.write(&change.path, &change.content) {
                Ok(()) => summary.written += 1,
                Err(error) => self.fail(&mut summary, &change.path, error),
            }
        }

        self.reporter.finished(&summary, false);
        Ok(summary)
    }

    fn fix_one(&self, path: &Path) -> Result<Option<FileChange>, FixError> {
        let content = self.store.read(path)?;
        let task = FileTask {
            path,
            content: &content,
            matches: scan_imports(&content, self.table),
        };
        if task.matches.is_empty() {
            return Ok(None);
        }
        Ok(Some(rewrite_file(&task)))
    }

    fn fail(&self, summary: &mut FixSummary, path: &Path, error: FixError) {
        self.reporter.file_failed(path, &error);
        summary.failures.push(FileFailure {
            path: path.to_path_buf(),
            error,
        });
    }
}
