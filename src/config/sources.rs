//! Config-file source discovery.
//!
//! Precedence: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub(super) const CONFIG_FILE_NAME: &str = "termframe.toml";
const CONFIG_DIR_NAME: &str = "termframe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./termframe.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; runtime defaults were used.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // Explicit path from the CLI must be readable.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(path) = default_global_config_path_in(config_root()) {
        if let Ok(text) = read_file(&path) {
            return Ok((text, ConfigSource::Global(path)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Per-user config path (`<root>/termframe/termframe.toml`).
fn default_global_config_path_in(root: Option<PathBuf>) -> Option<PathBuf> {
    root.map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve the user config root, honoring `XDG_CONFIG_HOME`.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
