use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WishConfig {
    /// Initial search path, in lookup order.
    pub path: Vec<String>,
    pub prompt: String,
}

impl Default for WishConfig {
    fn default() -> Self {
        Self {
            path: vec!["/bin".to_string()],
            prompt: "wish> ".to_string(),
        }
    }
}

pub fn load_config(file: Option<&Path>) -> Result<WishConfig> {
    let Some(file) = file else {
        return Ok(WishConfig::default());
    };

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read config file: {}", file.display()))?;
    let config: WishConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", file.display()))?;

    log::debug!("Loaded config from {}: {:?}", file.display(), config);
    Ok(config)
}
