//! Configuration management for kona.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use chrono::{Duration, NaiveDate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KonaError, Result};

/// Command-line arguments for kona
#[derive(Parser, Debug)]
#[command(name = "kona")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database to serve
    #[arg(env = "KONA_DATABASE", default_value = "Resources/hawaii.sqlite")]
    pub database: PathBuf,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "KONA_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "KONA_PORT")]
    pub port: Option<u16>,

    /// Number of worker threads
    #[arg(short, long, env = "KONA_WORKERS")]
    pub workers: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "KONA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KONA_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads (None = number of CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Dataset and query window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the SQLite database
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Last day of the trailing observation window
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,

    /// Length of the trailing window in days
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Station whose temperature observations /api/v1.0/tobs returns
    #[serde(default = "default_tobs_station")]
    pub tobs_station: String,
}

impl DatasetConfig {
    /// First day of the trailing window, `window_days` before the reference date
    pub fn window_start(&self) -> Result<NaiveDate> {
        Duration::try_days(self.window_days)
            .and_then(|window| self.reference_date.checked_sub_signed(window))
            .ok_or_else(|| KonaError::Config {
                message: format!(
                    "Window of {} days before {} is out of range",
                    self.window_days, self.reference_date
                ),
            })
    }

    /// Inclusive `(start, end)` bounds of the trailing window
    pub fn window(&self) -> Result<(NaiveDate, NaiveDate)> {
        Ok((self.window_start()?, self.reference_date))
    }
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset configuration
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already-parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment variables
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if args.workers.is_some() {
            config.server.workers = args.workers;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        // Database path from command line takes precedence
        let database_path = args.database;
        config.dataset.database_path = Some(database_path.clone());

        Ok((config, database_path))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server.host = other.server.host;
        self.server.port = other.server.port;
        if other.server.workers.is_some() {
            self.server.workers = other.server.workers;
        }
        self.dataset = other.dataset;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(KonaError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // 0 would let the OS pick a port
        if self.server.port == 0 {
            return Err(KonaError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.workers == Some(0) {
            return Err(KonaError::Config {
                message: "Worker count must be at least 1".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(KonaError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.dataset.window_days <= 0 {
            return Err(KonaError::Config {
                message: format!(
                    "Window length must be positive, got {} days",
                    self.dataset.window_days
                ),
            });
        }

        if self.dataset.tobs_station.trim().is_empty() {
            return Err(KonaError::Config {
                message: "Temperature observation station cannot be empty".to_string(),
            });
        }

        self.dataset.window_start()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            reference_date: default_reference_date(),
            window_days: default_window_days(),
            tobs_station: default_tobs_station(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_reference_date() -> NaiveDate {
    // Last day in the Hawaii dataset
    NaiveDate::from_ymd_opt(2017, 8, 23).unwrap_or_default()
}

fn default_window_days() -> i64 {
    365
}

fn default_tobs_station() -> String {
    "USC00519281".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
