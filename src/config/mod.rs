//! Configuration loading from TOML files.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. TOML file specified via --config CLI flag
//! 2. ./termframe.toml in the current directory
//! 3. $XDG_CONFIG_HOME/termframe/termframe.toml (or ~/.config/termframe/termframe.toml)
//! 4. Built-in defaults
//!
//! CLI flags are layered on top by the binary.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod sources;
mod types;

pub use sources::{config_root_dir, ConfigSource};
pub use types::{Config, LayoutSection, TerminalSection};

use sources::read_config_text_with_sources;

/// Parsed config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let config = parse_config(&text)?;
    tracing::debug!(source = ?source, "loaded configuration");
    Ok(LoadedConfig { config, source })
}

/// Parse and validate `termframe.toml` text. Empty text yields defaults.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    // Borders are framed onto a single terminal row.
    for (key, value) in config.layout.borders() {
        if value.contains(['\n', '\r']) {
            return Err(ConfigError::Invalid(format!(
                "layout.{key} must not contain line breaks"
            )));
        }
    }
    Ok(())
}
