use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::analysis::{AnalysisConfig, GeometryConfig, RiskThresholds, EARTH_RADIUS_KM};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

/// Geometry and classification settings from the config file. All fields are
/// optional and fall back to the standard model.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_earth_radius_km")]
    pub earth_radius_km: f64,
    #[serde(flatten)]
    pub thresholds: RiskThresholds,
}

fn default_earth_radius_km() -> f64 {
    EARTH_RADIUS_KM
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            thresholds: RiskThresholds::default(),
        }
    }
}

impl AnalysisSettings {
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            geometry: GeometryConfig {
                earth_radius_km: self.earth_radius_km,
            },
            thresholds: self.thresholds,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
