use std::path::PathBuf;

/// Errors produced by aliasfix while loading configuration or fixing files.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("tsconfig not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("{path}: invalid tsconfig: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("{path}: missing compilerOptions.paths")]
    MissingPaths { path: String },

    #[error("{path}: {reason}")]
    ConfigShape { path: String, reason: String },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("no target glob given")]
    NoTargets,

    #[error("prompt: {0}")]
    Prompt(std::io::Error),
}

impl FixError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
