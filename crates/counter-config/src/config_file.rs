use std::{
    env,
    path::{Path, PathBuf},
};

use crate::paths;

const CONFIG_FILE: &str = ".counter-lander.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.counter-lander.toml` in the current working directory
/// 2. `~/.counter-lander.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the content of the first readable file, None otherwise.
pub fn load_config_file() -> Option<String> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(home_config_path());
    if let Ok(path) = paths::app_config_path() {
        candidates.push(path);
    }

    read_first(&candidates)
}

/// Read the first candidate that exists and is readable
fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}

/// ~/.counter-lander.toml if HOME is set
fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
