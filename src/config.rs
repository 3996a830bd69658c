use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Base URLs for the upstream read services
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    pub preferences_url: String,
    pub catalog_url: String,
    pub favorites_url: String,
    pub request_timeout_secs: Option<u64>,
}

/// Fallback-policy knobs
///
/// Observed behavior disagreed across iterations of this logic on the
/// fallback trigger and retention threshold, so all three are plain
/// configuration with documented defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_results")]
    pub min_results_before_fallback: usize,
    #[serde(default = "default_tier1_threshold")]
    pub tier1_score_threshold: u8,
    #[serde(default)]
    pub tier2_always_runs: bool,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_results_before_fallback: default_min_results(),
            tier1_score_threshold: default_tier1_threshold(),
            tier2_always_runs: false,
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_min_results() -> usize { 2 }
fn default_tier1_threshold() -> u8 { 2 }
fn default_limit() -> usize { 5 }
fn default_max_limit() -> usize { 100 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides
    /// earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with WHISKER__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. WHISKER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("WHISKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_service_url_overrides(settings)?;

        settings.try_deserialize()
    }

}

/// Honor the bare service-URL variables the deployment environment sets
/// (PREFERENCES_SERVICE_URL, CAT_DATABASE_URL, FAVORITES_SERVICE_URL)
/// alongside the WHISKER__-prefixed form.
fn apply_service_url_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("PREFERENCES_SERVICE_URL") {
        builder = builder.set_override("upstream.preferences_url", url)?;
    }
    if let Ok(url) = env::var("CAT_DATABASE_URL") {
        builder = builder.set_override("upstream.catalog_url", url)?;
    }
    if let Ok(url) = env::var("FAVORITES_SERVICE_URL") {
        builder = builder.set_override("upstream.favorites_url", url)?;
    }

    builder.build()
}
