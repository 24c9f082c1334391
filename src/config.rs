use std::fs;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::Deserialize;

use crate::error::AppError;
use crate::model::HiddenRootPolicy;

/// Defaults read from `config.toml`; command-line flags are layered on top.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub human: bool,
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub hidden_root: HiddenRootPolicy,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Self::parse(&contents)
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(contents: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("path-size").join("config.toml"))
}
