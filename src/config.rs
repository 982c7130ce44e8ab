// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::AppContext;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Festival list location; defaults to `festivals.json` in the data dir.
    #[serde(default)]
    pub festival_file: Option<PathBuf>,
    /// BS calendar table; defaults to `bs_calendar.json` in the data dir.
    #[serde(default)]
    pub calendar_data: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            festival_file: None,
            calendar_data: None,
            // Match the serde default
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    ///
    /// A missing file yields the defaults; unreadable or malformed files are
    /// errors so a typo does not silently point the app at the wrong data.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    pub fn festival_path(&self, ctx: &dyn AppContext) -> Result<PathBuf> {
        match &self.festival_file {
            Some(p) => Ok(p.clone()),
            None => ctx.get_festival_path(),
        }
    }

    pub fn calendar_data_path(&self, ctx: &dyn AppContext) -> Result<PathBuf> {
        match &self.calendar_data {
            Some(p) => Ok(p.clone()),
            None => ctx.get_calendar_data_path(),
        }
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}
