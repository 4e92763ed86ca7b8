use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::{Error, InternalResult};

/// How the pseudo-random values behind the mock statistics are produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationMode {
    /// Sine transform of the seed mixed with a fresh random draw on every
    /// call. Two requests for the same identifier return different numbers.
    #[default]
    Hybrid,

    /// Sine transform and an RNG both seeded from the identifier, so the
    /// same identifier on the same day always yields the same profile.
    Seeded,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyticsConfig {
    /// Number of similar memories returned when the request has no `limit`
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound applied to a requested `limit`
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    #[serde(default)]
    pub generation_mode: GenerationMode,

    /// Token symbol reported with value histories
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Categories a validator's work is broken down into
    #[serde(default = "default_distribution_categories")]
    pub distribution_categories: Vec<String>,

    /// JSON file with the memory catalog; the built-in sample is used when absent
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            generation_mode: GenerationMode::default(),
            currency: default_currency(),
            distribution_categories: default_distribution_categories(),
            catalog_path: None,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to open config file: {}", e)))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_str(s: &str) -> InternalResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> InternalResult<()> {
        if self.default_limit == 0 {
            return Err(Error::Config("default_limit must be positive".to_string()));
        }
        if self.max_limit < self.default_limit {
            return Err(Error::Config(format!(
                "max_limit ({}) is smaller than default_limit ({})",
                self.max_limit, self.default_limit
            )));
        }
        if self.distribution_categories.is_empty() {
            return Err(Error::Config(
                "distribution_categories must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_limit() -> usize {
    5
}

fn default_max_limit() -> usize {
    100
}

fn default_currency() -> String {
    "ETH".to_string()
}

fn default_distribution_categories() -> Vec<String> {
    ["Visual", "Emotional", "Procedural", "Semantic"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}
