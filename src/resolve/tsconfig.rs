use std::path::{Path, PathBuf};

use crate::error::FixError;

use super::PathConfig;

/// Read a tsconfig file and pull out `baseUrl` + `paths`.
///
/// The file may contain comments and trailing commas. A missing
/// `compilerOptions.paths` is an error rather than an empty config.
pub(crate) fn load_path_config(tsconfig_path: &Path) -> Result<PathConfig, FixError> {
    let shown = tsconfig_path.display().to_string();
    let content =
        std::fs::read_to_string(tsconfig_path).map_err(|e| FixError::io(tsconfig_path, e))?;
    let cleaned = strip_trailing_commas(&strip_jsonc_comments(&content));

    let val: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|source| FixError::ConfigParse {
            path: shown.clone(),
            source,
        })?;

    let compiler = val
        .get("compilerOptions")
        .ok_or_else(|| FixError::MissingPaths {
            path: shown.clone(),
        })?;
    let tsconfig_dir = tsconfig_path.parent().unwrap_or(Path::new("."));

    let base_url = compiler
        .get("baseUrl")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| tsconfig_dir.to_path_buf(), |b| tsconfig_dir.join(b));

    let paths = compiler
        .get("paths")
        .ok_or_else(|| FixError::MissingPaths {
            path: shown.clone(),
        })?
        .as_object()
        .ok_or_else(|| FixError::ConfigShape {
            path: shown.clone(),
            reason: "compilerOptions.paths must be an object".to_string(),
        })?;

    let mut aliases = Vec::with_capacity(paths.len());
    for (pattern, targets) in paths {
        let targets = targets.as_array().ok_or_else(|| FixError::ConfigShape {
            path: shown.clone(),
            reason: format!("paths['{pattern}'] must be an array"),
        })?;
        let replacements = targets
            .iter()
            .map(|v| {
                v.as_str().map(String::from).ok_or_else(|| FixError::ConfigShape {
                    path: shown.clone(),
                    reason: format!("paths['{pattern}'] entries must be strings"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        aliases.push((pattern.clone(), replacements));
    }

    tracing::debug!(path = %shown, aliases = aliases.len(), "loaded path aliases");
    Ok(PathConfig { base_url, aliases })
}

/// Walk up directories from `start` looking for tsconfig.json.
pub(crate) fn find_tsconfig(start: &Path) -> Result<PathBuf, FixError> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join("tsconfig.json");
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(FixError::ConfigNotFound(start.to_path_buf()));
        }
    }
}

/// Strip JSONC comments (`//` line and `/* */` block) while respecting strings.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                copy_string_body(&mut chars, &mut out);
            }
            '/' if chars.peek() == Some(&'/') => {
                while chars.peek().is_some_and(|&c| c != '\n') {
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Drop commas that directly precede a closing `}` or `]`.
fn strip_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                copy_string_body(&mut chars, &mut out);
            }
            ',' => {
                let rest: String = chars.clone().take_while(|c| c.is_whitespace()).collect();
                let next = chars.clone().find(|c| !c.is_whitespace());
                if !matches!(next, Some('}' | ']')) {
                    out.push(',');
                }
                out.push_str(&rest);
                for _ in 0..rest.chars().count() {
                    chars.next();
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Copy a JSON string body (opening quote already consumed) through its closing quote.
fn copy_string_body(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if c == '"' {
            break;
        }
    }
}
