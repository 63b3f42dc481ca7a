use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::assessment::ScoringConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("INSIGHT_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("INSIGHT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("INSIGHT_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("INSIGHT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let diagnosis_threshold = match env::var("INSIGHT_DIAGNOSIS_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => ScoringConfig::default().diagnosis_threshold,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringSettings {
                diagnosis_threshold,
            },
        })
    }
}

fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    let invalid = || ConfigError::InvalidThreshold {
        value: raw.to_string(),
    };
    let threshold = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if !(0.0..=100.0).contains(&threshold) {
        return Err(invalid());
    }
    Ok(threshold)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Engine dials the deployment may override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringSettings {
    /// Probability percentage below which no diagnosis is produced.
    pub diagnosis_threshold: f64,
}

impl ScoringSettings {
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            diagnosis_threshold: self.diagnosis_threshold,
            ..ScoringConfig::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "INSIGHT_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "INSIGHT_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { value } => write!(
                f,
                "INSIGHT_DIAGNOSIS_THRESHOLD must be a percentage between 0 and 100 (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidThreshold { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
