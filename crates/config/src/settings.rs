//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{endpoints, extraction, server, timeouts};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Field extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_extraction()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.environment.is_strict() && !self.server.cors_enabled {
            tracing::warn!(
                environment = ?self.environment,
                "CORS is disabled outside development"
            );
        }

        Ok(())
    }

    fn validate_extraction(&self) -> Result<(), ConfigError> {
        let cutoff = self.extraction.dob_year_cutoff;
        if !(extraction::DOB_YEAR_CUTOFF_MIN..=extraction::DOB_YEAR_CUTOFF_MAX).contains(&cutoff) {
            return Err(ConfigError::InvalidValue {
                field: "extraction.dob_year_cutoff".to_string(),
                message: format!(
                    "Must be between {} and {}, got {}",
                    extraction::DOB_YEAR_CUTOFF_MIN,
                    extraction::DOB_YEAR_CUTOFF_MAX,
                    cutoff
                ),
            });
        }

        let ner = &self.extraction.ner;
        if ner.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extraction.ner.timeout_ms".to_string(),
                message: "Timeout must be greater than 0".to_string(),
            });
        }

        if ner.max_span_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extraction.ner.max_span_tokens".to_string(),
                message: "A person span needs at least one token".to_string(),
            });
        }

        if ner.provider == NerProvider::Http && ner.endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extraction.ner.endpoint".to_string(),
                message: "Required when provider is 'http'".to_string(),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    server::DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    server::DEFAULT_PORT
}
fn default_timeout() -> u64 {
    timeouts::HTTP_REQUEST_SECS
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Enable Prometheus metrics at /metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Field extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Fallback date detection only accepts years strictly before this
    #[serde(default = "default_dob_year_cutoff")]
    pub dob_year_cutoff: i32,

    /// Named-entity recognition used by the name fallback
    #[serde(default)]
    pub ner: NerConfig,
}

fn default_dob_year_cutoff() -> i32 {
    extraction::DOB_YEAR_CUTOFF
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dob_year_cutoff: default_dob_year_cutoff(),
            ner: NerConfig::default(),
        }
    }
}

/// Named-entity recognition providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NerProvider {
    /// In-process first-name gazetteer
    #[default]
    Gazetteer,
    /// NER model behind an HTTP sidecar
    #[serde(alias = "sidecar")]
    Http,
    /// Disabled (name fallback never matches)
    Disabled,
}

/// Named-entity recognition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: NerProvider,

    /// Sidecar endpoint for the http provider
    #[serde(default = "default_ner_endpoint")]
    pub endpoint: String,

    /// Sidecar request timeout in milliseconds
    #[serde(default = "default_ner_timeout_ms")]
    pub timeout_ms: u64,

    /// Answer from the gazetteer when the sidecar fails
    #[serde(default = "default_true")]
    pub fallback_to_gazetteer: bool,

    /// Extra first names for the gazetteer
    #[serde(default)]
    pub extra_names: Vec<String>,

    /// Longest person span the gazetteer emits, in tokens
    #[serde(default = "default_max_span_tokens")]
    pub max_span_tokens: usize,
}

fn default_ner_endpoint() -> String {
    endpoints::NER_SIDECAR_DEFAULT.to_string()
}
fn default_ner_timeout_ms() -> u64 {
    timeouts::NER_REQUEST_MS
}
fn default_max_span_tokens() -> usize {
    extraction::MAX_NAME_SPAN_TOKENS
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            provider: NerProvider::default(),
            endpoint: default_ner_endpoint(),
            timeout_ms: default_ner_timeout_ms(),
            fallback_to_gazetteer: true,
            extra_names: Vec::new(),
            max_span_tokens: default_max_span_tokens(),
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (VOICE_FORM__ prefix, e.g. VOICE_FORM__SERVER__PORT)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
/// 4. Built-in defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings with an explicit config directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::from(config_dir.join("default")).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder = builder.add_source(File::from(config_dir.join(env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("VOICE_FORM")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}
