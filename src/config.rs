//! Configuration management for the resume builder

use crate::error::{ResumeBuilderError, Result};
use crate::export::layout::PageMetrics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Page geometry used by the print-layout export, in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub line_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
            page: PageConfig {
                width: 210.0,
                height: 297.0,
                margin: 20.0,
                line_height: 7.0,
            },
        }
    }
}

impl From<&PageConfig> for PageMetrics {
    fn from(page: &PageConfig) -> Self {
        PageMetrics {
            width: page.width,
            height: page.height,
            margin: page.margin,
            line_height: page.line_height,
        }
    }
}

impl Config {
    /// Load the config file, creating it with defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeBuilderError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeBuilderError::Configuration(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-builder")
            .join("config.toml")
    }

    pub fn page_metrics(&self) -> PageMetrics {
        PageMetrics::from(&self.page)
    }
}
