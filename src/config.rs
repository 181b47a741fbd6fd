use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::{MatchError, SkillEntry};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub taxonomy: TaxonomySettings,
    #[serde(default)]
    pub gap: GapSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl ScoringSettings {
    /// Validated weight table for the matcher
    pub fn to_weights(&self) -> Result<ScoringWeights, MatchError> {
        let w = &self.weights;
        ScoringWeights::new(w.skill, w.location, w.salary, w.experience, w.role)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_salary_weight")]
    pub salary: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_role_weight")]
    pub role: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            location: default_location_weight(),
            salary: default_salary_weight(),
            experience: default_experience_weight(),
            role: default_role_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 0.40 }
fn default_location_weight() -> f64 { 0.20 }
fn default_salary_weight() -> f64 { 0.15 }
fn default_experience_weight() -> f64 { 0.15 }
fn default_role_weight() -> f64 { 0.10 }

/// Extra taxonomy entries, merged over the built-in table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonomySettings {
    #[serde(default)]
    pub skills: HashMap<String, SkillEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GapSettings {
    #[serde(default = "default_phase_size")]
    pub phase_size: usize,
    #[serde(default = "default_base_salary")]
    pub base_salary: f64,
}

impl Default for GapSettings {
    fn default() -> Self {
        Self {
            phase_size: default_phase_size(),
            base_salary: default_base_salary(),
        }
    }
}

fn default_phase_size() -> usize { 2 }
fn default_base_salary() -> f64 { 800_000.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENT__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TALENT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
