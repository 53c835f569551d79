use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Pause before answering a match request
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
    /// Replaces the built-in roster when set
    pub roster: Option<Vec<String>>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            roster: None,
        }
    }
}

impl MatchingSettings {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

fn default_processing_delay_ms() -> u64 { 1500 }

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
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STUDYMATCH__)
    /// 5. `PORT`, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STUDYMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_platform_port(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_platform_port(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("STUDYMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        // STUDYMATCH__MATCHING__ROSTER="Ada,Grace,Linus,Barbara,Ken"
        .list_separator(",")
        .with_list_parse_key("matching.roster")
}

fn apply_platform_port(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("PORT") {
        Ok(port) => Config::builder()
            .add_source(settings)
            .set_override("server.port", port)?
            .build(),
        Err(_) => Ok(settings),
    }
}
