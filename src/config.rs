use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::payload::TransformOptions;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub onecomme: OneCommeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OneCommeConfig {
    /// OneComme service (frame) that receives the comments
    pub service_id: String,
    #[serde(default)]
    pub prefix_res_no: bool,
    #[serde(default)]
    pub profile_image_path: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        if config.onecomme.service_id.is_empty() {
            anyhow::bail!("[onecomme] service_id must not be empty");
        }
        Ok(config)
    }

    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            service_id: self.onecomme.service_id.clone(),
            prefix_res_no: self.onecomme.prefix_res_no,
            profile_image_path: self.onecomme.profile_image_path.clone(),
        }
    }
}
