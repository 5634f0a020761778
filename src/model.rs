use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::resolve::AliasRule;

/// An aliased `import ... from '...'` statement found in a file.
pub struct ImportMatch<'a> {
    /// Full statement text, `import { a } from '@app/a';`.
    pub statement: &'a str,
    /// Byte range of the statement in the file.
    pub span: Range<usize>,
    /// Module path as written, without quotes.
    pub literal: &'a str,
    /// Byte range of the module path in the file.
    pub literal_span: Range<usize>,
    pub rule: &'a AliasRule,
}

/// A scanned file waiting to be rewritten.
pub struct FileTask<'a> {
    pub path: &'a Path,
    pub content: &'a str,
    pub matches: Vec<ImportMatch<'a>>,
}

/// One module path replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub alias: String,
    pub from: String,
    pub to: String,
}

impl fmt::Display for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}  ({})", self.from, self.to, self.alias)
    }
}

/// Rewritten file content, ready for the write boundary.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub content: String,
    pub rewrites: Vec<Rewrite>,
}

/// Wrapper for indented display of a value.
pub struct Indented<'a, T>(pub &'a str, pub &'a T);

impl fmt::Display for Indented<'_, Rewrite> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Indented(indent, rewrite) = self;
        write!(f, "{indent}{rewrite}")
    }
}
