use std::path::Path;

use crate::error::PluginError;

use super::types::AppConfig;

const CONFIG_FILE: &str = "loglive.toml";

/// Load `./loglive.toml` when present, else built-in defaults.
pub fn load_default() -> Result<AppConfig, PluginError> {
    let local = Path::new(CONFIG_FILE);
    if local.exists() {
        load_from(local)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from(path: &Path) -> Result<AppConfig, PluginError> {
    let s = std::fs::read_to_string(path)?;
    toml::from_str(&s).map_err(|e| PluginError::Config(e.to_string()))
}
