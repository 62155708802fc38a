//! Configuration management for the Nutrition Coach backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: NC__)

use anyhow::Result;
use nutrition_coach_shared::{FeedbackBands, TargetPolicy};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Product constants of the target and feedback computations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Calorie factor applied for obesity
    pub obesity_factor: f64,
    /// Lower bound of the on-target band, percent of target
    pub on_target_low_pct: f64,
    /// Upper bound of the on-target band, percent of target
    pub on_target_high_pct: f64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        let policy = TargetPolicy::default();
        let bands = FeedbackBands::default();
        Self {
            obesity_factor: policy.obesity_factor,
            on_target_low_pct: bands.low_pct,
            on_target_high_pct: bands.high_pct,
        }
    }
}

impl NutritionConfig {
    pub fn policy(&self) -> TargetPolicy {
        TargetPolicy {
            obesity_factor: self.obesity_factor,
        }
    }

    pub fn bands(&self) -> FeedbackBands {
        FeedbackBands {
            low_pct: self.on_target_low_pct,
            high_pct: self.on_target_high_pct,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            nutrition: NutritionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with NC__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., NC__NUTRITION__OBESITY_FACTOR=0.8 sets nutrition.obesity_factor
            .add_source(config::Environment::with_prefix("NC").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject nutrition constants the core cannot work with
    pub fn validate(&self) -> Result<()> {
        self.nutrition.policy().validate()?;
        self.nutrition.bands().validate()?;
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
