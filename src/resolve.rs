mod alias;
mod tsconfig;

use std::path::PathBuf;

/// Path alias configuration from tsconfig.json.
///
/// Raw `compilerOptions.paths` entries in file order, plus the directory
/// their targets are relative to. `AliasTable::build` turns this into the
/// ordered matching structure the scanner works against.
pub struct PathConfig {
    pub base_url: PathBuf,
    pub aliases: Vec<(String, Vec<String>)>,
}

pub(crate) use alias::{AliasRule, AliasTable};
pub(crate) use tsconfig::{find_tsconfig, load_path_config};
