use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::generator::Platform;

/// Overrides the base directory (config, logs, saved output)
pub const HOME_ENV: &str = "FORUMFMT_HOME";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForumfmtConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub defaults: RenderDefaults,
    /// File this config was loaded from; `save` writes back here
    #[serde(skip)]
    source: Option<PathBuf>,
}

/// Where the config file lives. `[paths] base_dir` only moves logs and
/// saved output, since it is read from this file.
pub fn config_file() -> PathBuf {
    PathsConfig::default().base_dir().join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub base_dir: Option<String>,
}

impl PathsConfig {
    pub fn base_dir(&self) -> PathBuf {
        if let Some(ref base) = self.base_dir {
            return PathBuf::from(base);
        }
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".forumfmt")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join("output")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir().join("logs")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderDefaults {
    /// Platform used when `--platform` is not given
    #[serde(default)]
    pub platform: Platform,
    /// Split chat output at the platform's message limit
    #[serde(default)]
    pub split: bool,
    /// Log parameter warnings before rendering
    #[serde(default = "default_true")]
    pub warn: bool,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            split: false,
            warn: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl ForumfmtConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file())
    }

    /// A missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str::<Self>(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            Self::default()
        };
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// The file `save` writes to
    pub fn file(&self) -> PathBuf {
        self.source.clone().unwrap_or_else(config_file)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = self.file();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
