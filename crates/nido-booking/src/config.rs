//! # Booking Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     NIDO_CLEANING_FEE=150                                              │
//! │     NIDO_REPOSITORY=sqlite                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/nido/nido.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.nido.booking/nido.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     150 / 100 fees, in-memory demo catalog                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # nido.toml
//! [pricing]
//! cleaning_fee = 150   # whole currency units, once per stay, at most 1000000
//! service_fee = 100
//!
//! [repository]
//! backend = "sqlite"   # memory | sqlite
//! database_path = "./data/nido.db"
//!
//! [logging]
//! filter = "info,nido=debug,sqlx=warn"
//! format = "pretty"    # pretty | compact | json
//! ```

use nido_core::{FeeSchedule, Money, DEFAULT_CLEANING_FEE, DEFAULT_SERVICE_FEE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{BookingError, BookingResult};

/// Default tracing directives when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,nido=debug,sqlx=warn";

/// Largest accepted platform fee, in whole currency units.
pub const MAX_PLATFORM_FEE: i64 = 1_000_000;

// =============================================================================
// Repository Backend
// =============================================================================

/// Where properties are resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryBackend {
    /// The built-in demo catalog, held in memory.
    #[default]
    Memory,

    /// A SQLite property store managed by nido-db.
    Sqlite,
}

impl std::fmt::Display for RepositoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryBackend::Memory => write!(f, "memory"),
            RepositoryBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for RepositoryBackend {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mock" | "demo" => Ok(RepositoryBackend::Memory),
            "sqlite" | "db" => Ok(RepositoryBackend::Sqlite),
            other => Err(BookingError::InvalidConfig(format!(
                "Unknown repository backend: '{}'. Valid options: memory, sqlite",
                other
            ))),
        }
    }
}

// =============================================================================
// Log Format
// =============================================================================

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Multi-line, human-oriented output.
    #[default]
    Pretty,

    /// One line per event.
    Compact,

    /// Newline-delimited JSON for log shippers.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(BookingError::InvalidConfig(format!(
                "Unknown log format: '{}'. Valid options: pretty, compact, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Platform fees, in whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "default_cleaning_fee")]
    pub cleaning_fee: i64,

    #[serde(default = "default_service_fee")]
    pub service_fee: i64,
}

fn default_cleaning_fee() -> i64 {
    DEFAULT_CLEANING_FEE
}

fn default_service_fee() -> i64 {
    DEFAULT_SERVICE_FEE
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            cleaning_fee: default_cleaning_fee(),
            service_fee: default_service_fee(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(default)]
    pub backend: RepositoryBackend,

    /// SQLite file. Required when `backend = "sqlite"`.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete booking configuration. See the module docs for the file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NidoConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub repository: RepositorySettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl NidoConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (nido.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> BookingResult<Self> {
        let mut config = match config_path {
            // An explicit path must exist
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> BookingResult<Self> {
        info!(?path, "Loading booking config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> BookingResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| BookingError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BookingError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| BookingError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Booking config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> BookingResult<()> {
        for (name, fee) in [
            ("cleaning_fee", self.pricing.cleaning_fee),
            ("service_fee", self.pricing.service_fee),
        ] {
            if !(0..=MAX_PLATFORM_FEE).contains(&fee) {
                return Err(BookingError::InvalidConfig(format!(
                    "{} must be between 0 and {}, got {}",
                    name, MAX_PLATFORM_FEE, fee
                )));
            }
        }

        if self.repository.backend == RepositoryBackend::Sqlite
            && self.repository.database_path.is_none()
        {
            return Err(BookingError::InvalidConfig(
                "database_path is required for the sqlite backend".into(),
            ));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(BookingError::InvalidConfig("logging.filter is empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `NIDO_*` overrides read through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(fee) = var("NIDO_CLEANING_FEE") {
            match fee.parse::<i64>() {
                Ok(value) => {
                    debug!(value, "Overriding cleaning fee from environment");
                    self.pricing.cleaning_fee = value;
                }
                Err(_) => warn!(fee = %fee, "Ignoring non-integer NIDO_CLEANING_FEE"),
            }
        }

        if let Some(fee) = var("NIDO_SERVICE_FEE") {
            match fee.parse::<i64>() {
                Ok(value) => {
                    debug!(value, "Overriding service fee from environment");
                    self.pricing.service_fee = value;
                }
                Err(_) => warn!(fee = %fee, "Ignoring non-integer NIDO_SERVICE_FEE"),
            }
        }

        if let Some(backend) = var("NIDO_REPOSITORY") {
            match backend.parse() {
                Ok(parsed) => {
                    debug!(backend = %backend, "Overriding repository backend from environment");
                    self.repository.backend = parsed;
                }
                Err(e) => warn!("{}", e),
            }
        }

        if let Some(path) = var("NIDO_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.repository.database_path = Some(PathBuf::from(path));
        }

        if let Some(format) = var("NIDO_LOG_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.logging.format = parsed,
                Err(e) => warn!("{}", e),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "nido", "booking")
            .map(|dirs| dirs.config_dir().join("nido.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the platform fees as money.
    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            cleaning_fee: Money::from_major(self.pricing.cleaning_fee),
            service_fee: Money::from_major(self.pricing.service_fee),
        }
    }

    pub fn backend(&self) -> RepositoryBackend {
        self.repository.backend
    }
}
