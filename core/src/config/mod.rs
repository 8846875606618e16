use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEEPLINE_DIR: &str = ".deepline";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://api.tavily.com";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
        }
    }
}

/// Settings for the plan-then-answer pipeline, which runs cooler and longer
/// than the research agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
    pub status_override: Option<String>,
    pub section_marker: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_output_tokens: Some(4096),
            status_override: Some("done".to_string()),
            section_marker: crate::todo::DEFAULT_SECTION_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub provider: Option<String>,
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
    pub max_iterations: usize,
    pub search: SearchConfig,
    pub pipeline: PipelineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: None,
            api_key: String::new(),
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_output_tokens: None,
            max_iterations: 20,
            search: SearchConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

/// Sampling knobs for one model client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSettings {
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        if config_exists() {
            load_config()
        } else {
            Ok(Config::default())
        }
    }

    pub fn agent_settings(&self) -> ModelSettings {
        ModelSettings {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }

    pub fn pipeline_settings(&self) -> ModelSettings {
        ModelSettings {
            temperature: self.pipeline.temperature,
            max_output_tokens: self.pipeline.max_output_tokens,
        }
    }
}

pub fn get_deepline_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(DEEPLINE_DIR)
}

pub fn get_config_path() -> PathBuf {
    get_deepline_dir().join("config.toml")
}

pub fn config_exists() -> bool {
    get_config_path().exists()
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!(
                "Config file not found. Run 'deepline onboard' to set up your configuration."
            )
        } else {
            anyhow::anyhow!("Failed to read config from {}: {}", config_path.display(), e)
        }
    })?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", config_path.display()))
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(config, &get_config_path())
}

pub fn save_config_to(config: &Config, config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let content =
        toml::to_string_pretty(config).with_context(|| "Failed to serialize config to TOML")?;

    std::fs::write(config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(())
}
