//! `aliasfix`: rewrite tsconfig path-alias imports as relative imports.
//!
//! Reads `compilerOptions.paths` from tsconfig.json, finds
//! `import ... from '<alias>/...'` statements in the target files and
//! replaces each aliased module path with the equivalent relative path.

mod cli;
mod discover;
mod error;
mod extract;
mod fix;
mod model;
mod output;
mod ports;
mod resolve;
mod rewrite;
mod util;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::FixError;
use fix::{FixOptions, Fixer};
use output::ConsoleReporter;
use ports::{AutoConfirm, DiskStore, TerminalPrompt, UserInteraction};
use resolve::AliasTable;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("aliasfix: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr. `ALIASFIX_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ALIASFIX_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` when some files failed but the batch completed.
fn run(cli: &Cli) -> Result<bool, FixError> {
    let cwd = std::env::current_dir().map_err(|e| FixError::io(Path::new("."), e))?;
    let tsconfig = locate_tsconfig(cli.tsconfig.as_deref(), &cwd)?;
    let root = tsconfig.parent().unwrap_or(cwd.as_path()).to_path_buf();

    let config = resolve::load_path_config(&tsconfig)?;
    let table = AliasTable::build(&config, &cli.exclude_alias);
    if table.is_empty() {
        tracing::warn!(tsconfig = %tsconfig.display(), "no usable path aliases");
    }
    for rule in table.rules() {
        tracing::debug!(alias = %rule.pattern, target = %rule.target_dir.display(), "alias");
    }

    let targets: Vec<String> = cli
        .targets
        .iter()
        .filter(|t| !t.trim().is_empty())
        .cloned()
        .collect();
    if targets.is_empty() {
        return Err(FixError::NoTargets);
    }
    let files = discover::discover(&root, &targets, &cli.excludes)?;

    let reporter = ConsoleReporter {
        root,
        verbose: cli.verbose,
    };
    let fixer = Fixer {
        table: &table,
        store: &DiskStore,
        reporter: &reporter,
        options: FixOptions {
            dry_run: cli.dry_run,
        },
    };

    let mut prompt: Box<dyn UserInteraction> = if cli.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalPrompt::new(io::stdin().lock(), io::stdout()))
    };
    let summary = fixer.run(&files, prompt.as_mut())?;

    Ok(!summary.has_failures())
}

/// Explicit `--tsconfig` (a file or a directory holding one), else the
/// nearest tsconfig.json above `cwd`. Returned path is canonical.
fn locate_tsconfig(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf, FixError> {
    let path = match explicit {
        Some(p) if p.is_dir() => p.join("tsconfig.json"),
        Some(p) => p.to_path_buf(),
        None => resolve::find_tsconfig(cwd)?,
    };
    if !path.is_file() {
        return Err(FixError::ConfigNotFound(path));
    }
    std::fs::canonicalize(&path).map_err(|e| FixError::io(&path, e))
}
