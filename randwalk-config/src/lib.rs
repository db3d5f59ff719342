use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

// --- Error Type ---
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

// --- Enums for Choices ---
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SerializerType {
    #[default]
    Ascii,
    Json,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    #[default]
    Terminal,
    Stdio,
}

// --- Configuration Sections ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Largest accepted width or height.
pub const MAX_DIMENSION: i32 = 1024;

fn default_width() -> i32 { 10 }
fn default_height() -> i32 { 10 }
fn default_tick_ms() -> u64 { 500 }

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntitySpec {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
}

fn default_entities() -> Vec<EntitySpec> {
    vec![
        EntitySpec { x: 1, y: 1, glyph: 'A' },
        EntitySpec { x: 5, y: 5, glyph: 'B' },
    ]
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportSettings {
    #[serde(default)]
    pub serializer: SerializerType,
    #[serde(default)]
    pub sender: SenderType,
}

// --- Top-Level Config Struct ---

/// Scenario description. The defaults are the stock two-walker run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub field: FieldSettings,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Fixed RNG seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_entities")]
    pub entities: Vec<EntitySpec>,
    #[serde(default)]
    pub transport: TransportSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldSettings::default(),
            tick_ms: default_tick_ms(),
            seed: None,
            entities: default_entities(),
            transport: TransportSettings::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field.width <= 0 || self.field.height <= 0 {
            return Err(ConfigError::Validation(format!(
                "Field dimensions must be positive, got {}x{}",
                self.field.width, self.field.height
            )));
        }

        if self.field.width > MAX_DIMENSION || self.field.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "Field dimensions cannot exceed {}, got {}x{}",
                MAX_DIMENSION, self.field.width, self.field.height
            )));
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::Validation(
                "Tick interval cannot be zero.".to_string(),
            ));
        }

        if self.entities.is_empty() {
            return Err(ConfigError::Validation(
                "At least one entity is required.".to_string(),
            ));
        }

        if let Some(spec) = self.entities.iter().find(|e| e.glyph.is_control()) {
            return Err(ConfigError::Validation(format!(
                "Entity glyph {:?} at ({}, {}) is not printable",
                spec.glyph, spec.x, spec.y
            )));
        }

        Ok(())
    }
}

// --- Loading Function ---

/// Load and validate a config file. `.toml` files are parsed as TOML,
/// anything else as JSON.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));

    let config: Config = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    config.validate()?;
    debug!("Loaded config from {}: {:?}", path.display(), config);

    Ok(config)
}
