use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::FixError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Expand `targets` under `root`, minus anything matching `excludes`.
///
/// Relative patterns are anchored at `root`, whose own characters are taken
/// literally even when they look like glob syntax. Excludes are tested against the
/// root-relative path and the full path. Order follows the targets, then glob
/// order within each; duplicates keep their first position.
///
/// # Errors
///
/// Returns `FixError::Pattern` for any invalid target or exclude pattern.
pub fn discover(
    root: &Path,
    targets: &[String],
    excludes: &[String],
) -> Result<Vec<PathBuf>, FixError> {
    let excludes = excludes
        .iter()
        .map(|p| compile(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for target in targets {
        let anchored = if Path::new(target).is_absolute() {
            target.clone()
        } else {
            let escaped = Pattern::escape(&root.to_string_lossy());
            Path::new(&escaped).join(target).to_string_lossy().into_owned()
        };
        let entries = glob::glob_with(&anchored, MATCH_OPTIONS).map_err(|source| {
            FixError::Pattern {
                pattern: target.clone(),
                source,
            }
        })?;

        for entry in entries {
            let path = match entry {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e.error(), "unreadable while expanding glob");
                    continue;
                }
            };
            if !path.is_file() || is_excluded(&path, root, &excludes) {
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    tracing::info!(files = files.len(), "collected target files");
    Ok(files)
}

fn compile(pattern: &str) -> Result<Pattern, FixError> {
    Pattern::new(pattern).map_err(|source| FixError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn is_excluded(path: &Path, root: &Path, excludes: &[Pattern]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    excludes.iter().any(|p| {
        p.matches_path_with(relative, MATCH_OPTIONS) || p.matches_path_with(path, MATCH_OPTIONS)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path
    }

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn expands_relative_targets_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "src/a.ts");
        let b = touch(dir.path(), "src/deep/b.ts");
        touch(dir.path(), "src/c.js");

        let files = discover(dir.path(), &s(&["src/**/*.ts"]), &[]).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn root_with_glob_characters_is_literal() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("web[app]");
        let a = touch(&root, "src/a.ts");
        let b = touch(&root, "src/lib/b.ts");

        let files = discover(&root, &s(&["src/**/*.ts"]), &s(&["**/node_modules/**"])).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn applies_excludes() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "src/a.ts");
        touch(dir.path(), "src/a.test.ts");
        touch(dir.path(), "src/node_modules/pkg/index.ts");

        let files = discover(
            dir.path(),
            &s(&["src/**/*.ts"]),
            &s(&["**/*.test.ts", "**/node_modules/**"]),
        )
        .unwrap();
        assert_eq!(files, vec![a]);
    }

    #[test]
    fn overlapping_targets_are_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "src/a.ts");
        let b = touch(dir.path(), "src/b.tsx");

        let files = discover(dir.path(), &s(&["src/**/*.tsx", "src/**/*", "src/a.ts"]), &[]).unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/dir.ts")).unwrap();
        let files = discover(dir.path(), &s(&["src/*"]), &[]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn invalid_target_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(dir.path(), &s(&["src/***/x"]), &[]).err().unwrap();
        assert!(matches!(err, FixError::Pattern { .. }));
    }

    #[test]
    fn invalid_exclude_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(dir.path(), &s(&["src/*.ts"]), &s(&["[unclosed"])).err().unwrap();
        assert!(matches!(err, FixError::Pattern { .. }));
    }
}
