//! Turn aliased module paths into relative ones.

use std::path::Path;

use crate::model::{FileChange, FileTask, ImportMatch, Rewrite};
use crate::resolve::AliasRule;
use crate::util::{join_slash, relative_to};

/// Relative module path that replaces `literal` when imported from `file_path`.
///
/// Only the leading alias prefix is removed from `literal`; the remainder is
/// appended to the path from the file's directory to the alias target.
pub fn relative_import(literal: &str, rule: &AliasRule, file_path: &Path) -> String {
    let suffix = literal.strip_prefix(rule.prefix.as_str()).unwrap_or_else(|| {
        tracing::debug!(literal, alias = %rule.pattern, "alias prefix not at start of literal");
        literal
    });
    let from_dir = file_path.parent().unwrap_or(Path::new(""));
    let rel_base = relative_to(from_dir, &rule.target_dir);

    let mut joined = join_slash(&rel_base, suffix);
    if literal.ends_with('/') && !joined.is_empty() {
        joined.push('/');
    }
    if joined.is_empty() {
        "./".to_string()
    } else if joined.starts_with('.') {
        joined
    } else {
        format!("./{joined}")
    }
}

/// Statement text with only its module path replaced.
pub fn rewrite_statement(m: &ImportMatch<'_>, new_path: &str) -> String {
    let start = m.literal_span.start - m.span.start;
    let end = m.literal_span.end - m.span.start;
    format!("{}{}{}", &m.statement[..start], new_path, &m.statement[end..])
}

/// Apply every match in `task`, leaving all other text byte-for-byte intact.
pub fn rewrite_file(task: &FileTask<'_>) -> FileChange {
    let mut content = String::with_capacity(task.content.len());
    let mut rewrites = Vec::with_capacity(task.matches.len());
    let mut cursor = 0;

    for m in &task.matches {
        let new_path = relative_import(m.literal, m.rule, task.path);
        content.push_str(&task.content[cursor..m.span.start]);
        content.push_str(&rewrite_statement(m, &new_path));
        cursor = m.span.end;

        tracing::debug!(
            file = %task.path.display(),
            from = m.literal,
            to = %new_path,
            "rewrote import"
        );
        rewrites.push(Rewrite {
            alias: m.rule.pattern.clone(),
            from: m.literal.to_string(),
            to: new_path,
        });
    }
    content.push_str(&task.content[cursor..]);

    FileChange {
        path: task.path.to_path_buf(),
        content,
        rewrites,
    }
}
