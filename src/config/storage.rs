//! Locating and reading configuration files.

use super::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Preferred configuration filename.
pub const CONFIG_FILE: &str = "merge-status.toml";

/// Legacy JSON configuration filename.
pub const LEGACY_CONFIG_FILE: &str = "config.json";

/// Directory name under the user config dir.
const APP_DIR: &str = "merge-status";

/// Locate the configuration file.
///
/// An explicit path must exist. Otherwise the working directory is searched
/// for `merge-status.toml` then `config.json`, and finally
/// `<config dir>/merge-status/config.toml`.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::Config(format!(
            "cannot locate config file {}",
            path.display()
        )));
    }

    let user_config = dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"));
    [cwd.join(CONFIG_FILE), cwd.join(LEGACY_CONFIG_FILE)]
        .into_iter()
        .chain(user_config)
        .find(|p| p.is_file())
        .ok_or_else(|| {
            Error::Config(format!(
                "no {CONFIG_FILE} or {LEGACY_CONFIG_FILE} found in {}; pass --config",
                cwd.display()
            ))
        })
}

/// Parse configuration text; `.json` files use JSON, anything else TOML.
pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: Config = if is_json {
        serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?
    } else {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?
    };

    config.validate()
}

/// Read, parse, and validate a configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
    parse_config(&content, path)
}
