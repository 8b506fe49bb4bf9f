use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StripError};

use super::StripConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/tabstrip/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabstrip").join("config.ron"))
}

/// Reads and parses a config file, reporting what went wrong.
pub fn read_config(path: &Path) -> Result<StripConfig> {
    let contents = fs::read_to_string(path).map_err(|source| StripError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| StripError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the config from disk, falling back to defaults on any error.
pub fn load_config() -> StripConfig {
    let Some(path) = config_path() else {
        return StripConfig::default();
    };
    if !path.exists() {
        return StripConfig::default();
    }
    match read_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}, using defaults");
            StripConfig::default()
        }
    }
}

/// Writes `config` as pretty RON, creating parent directories.
pub fn write_config(path: &Path, config: &StripConfig) -> Result<()> {
    let io_err = |source| StripError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty).map_err(StripError::Serialize)?;
    fs::write(path, serialized).map_err(io_err)
}

/// Persists the config to disk. Errors are logged and otherwise ignored.
pub fn save_config(config: &StripConfig) {
    let Some(path) = config_path() else {
        return;
    };
    if let Err(err) = write_config(&path, config) {
        log::warn!("{err}");
    }
}
