//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Rewrite tsconfig path-alias imports into relative imports.
#[derive(Debug, Parser)]
#[command(name = "aliasfix", version, about)]
pub struct Cli {
    /// tsconfig.json to read `compilerOptions.paths` from.
    /// Defaults to the nearest tsconfig.json above the working directory.
    #[arg(short = 'p', long)]
    pub tsconfig: Option<PathBuf>,

    /// Glob of files to fix, relative to the tsconfig directory.
    #[arg(short, long = "target", default_values_t = [String::from("src/**/*.ts"), String::from("src/**/*.tsx")])]
    pub targets: Vec<String>,

    /// Glob of files to leave alone.
    #[arg(short, long = "exclude", default_values_t = [String::from("**/node_modules/**")])]
    pub excludes: Vec<String>,

    /// Comma-separated aliases to skip; an alias containing any entry is skipped.
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude_alias: Vec<String>,

    /// Print every rewritten import and debug logs.
    #[arg(short, long)]
    pub verbose: bool,

    /// Report what would change without writing.
    #[arg(short, long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}
