//! Application state management for kona.
//!
//! This module defines the shared state that is passed to all handlers:
//! the effective configuration and the handle on the SQLite dataset.

use std::sync::Arc;

use crate::config::Config;
use crate::database::Database;
use crate::error::Result;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Dataset handle
    pub database: Database,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, database: Database) -> Self {
        Self { config, database }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, database: Database) -> Arc<Self> {
        Arc::new(Self::new(config, database))
    }

    /// Inclusive `(start, end)` bounds of the trailing window as stored date strings
    pub fn window_bounds(&self) -> Result<(String, String)> {
        let (start, end) = self.config.dataset.window()?;
        Ok((start.to_string(), end.to_string()))
    }

    /// Station served by the temperature observation endpoint
    pub fn tobs_station(&self) -> &str {
        &self.config.dataset.tobs_station
    }
}
