use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered language preference used when `-l` is not given
    pub default_languages: Vec<String>,

    /// Include timestamps in output unless overridden on the command line
    pub include_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_languages: vec!["en".to_string()],
            include_timestamps: false,
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub async fn load() -> Result<Self> {
        let config_path = Self::path()?;

        if config_path.exists() {
            let content =
                fs_err::read_to_string(&config_path).context("Failed to read config file")?;

            let config: Config =
                serde_yaml::from_str(&content).context("Failed to parse config file")?;

            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save().await?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::path()?;

        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        fs_err::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    pub fn path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("yt-transcript").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self
            .default_languages
            .iter()
            .any(|code| code.trim().is_empty())
        {
            anyhow::bail!("default_languages must not contain empty codes");
        }

        Ok(())
    }

    /// The effective language preference: CLI flags win over config defaults
    pub fn resolve_languages(&self, cli_languages: &[String]) -> Vec<String> {
        if cli_languages.is_empty() {
            self.default_languages.clone()
        } else {
            cli_languages.to_vec()
        }
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!("  Default Languages: {}", self.default_languages.join(", "));
        println!("  Include Timestamps: {}", self.include_timestamps);
    }
}
