use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    #[serde(default = "default_profiles_path")]
    pub profiles_path: String,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            profiles_path: default_profiles_path(),
        }
    }
}

fn default_profiles_path() -> String { "data/profiles.json".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and cap
    pub fn resolve_limit(&self, requested: Option<u16>) -> usize {
        let max = self.max_limit.unwrap_or(50);
        requested
            .unwrap_or_else(|| self.default_limit.unwrap_or(10))
            .min(max) as usize
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_expertise_weight")]
    pub expertise: f64,
    #[serde(default = "default_industry_weight")]
    pub industry: f64,
    #[serde(default = "default_timezone_weight")]
    pub timezone: f64,
    #[serde(default = "default_track_record_weight")]
    pub track_record: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            expertise: default_expertise_weight(),
            industry: default_industry_weight(),
            timezone: default_timezone_weight(),
            track_record: default_track_record_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            expertise: config.expertise,
            industry: config.industry,
            timezone: config.timezone,
            track_record: config.track_record,
        }
    }
}

fn default_expertise_weight() -> f64 { 50.0 }
fn default_industry_weight() -> f64 { 25.0 }
fn default_timezone_weight() -> f64 { 15.0 }
fn default_track_record_weight() -> f64 { 10.0 }

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
    /// 4. Environment variables (prefixed with INCUBATOR)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INCUBATOR__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("INCUBATOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("INCUBATOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Scoring weights must add up to 100 so scores stay within 0..=100,
    /// and matching limits must be positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = ScoringWeights::from(&self.scoring.weights);

        if [weights.expertise, weights.industry, weights.timezone, weights.track_record]
            .iter()
            .any(|w| *w < 0.0)
        {
            return Err(ConfigError::Message("scoring weights must not be negative".to_string()));
        }

        if (weights.total() - 100.0).abs() > 1e-9 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 100, got {}",
                weights.total()
            )));
        }

        if self.matching.default_limit == Some(0) || self.matching.max_limit == Some(0) {
            return Err(ConfigError::Message(
                "matching limits must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_from_toml(raw: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(raw, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.expertise, 50.0);
        assert_eq!(weights.industry, 25.0);
        assert_eq!(weights.timezone, 15.0);
        assert_eq!(weights.track_record, 10.0);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let settings = settings_from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.directory.profiles_path, "data/profiles.json");
        assert_eq!(settings.matching.resolve_limit(None), 10);
    }

    #[test]
    fn test_weights_must_sum_to_hundred() {
        let err = settings_from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [scoring.weights]
            expertise = 60.0
            "#,
        );

        assert!(err.is_err());
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        for section in ["default_limit = 0", "max_limit = 0"] {
            let raw = format!(
                "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[matching]\n{}\n",
                section
            );
            assert!(settings_from_toml(&raw).is_err(), "{} should be rejected", section);
        }
    }

    #[test]
    fn test_resolve_limit_caps_requests() {
        let matching = MatchingSettings {
            default_limit: Some(5),
            max_limit: Some(20),
        };

        assert_eq!(matching.resolve_limit(None), 5);
        assert_eq!(matching.resolve_limit(Some(12)), 12);
        assert_eq!(matching.resolve_limit(Some(500)), 20);
    }

    #[test]
    fn test_bundled_config_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
        let settings = Settings::load_from(path).unwrap();

        assert_eq!(settings.matching.max_limit, Some(50));
        assert_eq!(ScoringWeights::from(&settings.scoring.weights).total(), 100.0);
    }
}
