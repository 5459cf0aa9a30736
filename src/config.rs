//! Configuration management for Clinidash
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_UPCOMING_WINDOW_DAYS, PATIENT_PANEL_DEFAULT_WIDTH, PATIENT_PANEL_MAX_WIDTH,
    PATIENT_PANEL_MIN_WIDTH, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub tasks: TasksConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Section to open on startup
    /// Options: "inbox", "today", "upcoming", "projects", "labels", "project-<id>", "label-<id>"
    pub default_section: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// To-do sidebar width in columns
    pub sidebar_width: u16,
    /// Patient panel width in columns
    pub patient_panel_width: u16,
    pub icon_theme: IconTheme,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for absolute dates in the detail view
    pub date_format: String,
    /// Show notes in the expanded task view
    pub show_notes: bool,
    /// Show label badges on task rows
    pub show_labels: bool,
    /// Show "(done/total)" subtask progress on task rows
    pub show_subtask_progress: bool,
}

/// Task filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// How many days ahead the "Due This Week" section reaches
    pub upcoming_window_days: i64,
}

/// Seed data configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// JSON fixture to load instead of the built-in sample caseload
    pub fixture_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_section: "today".to_string(),
            mouse_enabled: true,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            patient_panel_width: PATIENT_PANEL_DEFAULT_WIDTH,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DATE_FORMAT.to_string(),
            show_notes: true,
            show_labels: true,
            show_subtask_progress: true,
        }
    }
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level; `validate` guarantees this succeeds for loaded configs
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("clinidash.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("clinidash").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if self.ui.patient_panel_width < PATIENT_PANEL_MIN_WIDTH
            || self.ui.patient_panel_width > PATIENT_PANEL_MAX_WIDTH
        {
            anyhow::bail!(
                "patient_panel_width must be between {} and {} columns, got {}",
                PATIENT_PANEL_MIN_WIDTH,
                PATIENT_PANEL_MAX_WIDTH,
                self.ui.patient_panel_width
            );
        }

        // Any default_section is accepted: unknown ids open the unfiltered list

        if !(1..=31).contains(&self.tasks.upcoming_window_days) {
            anyhow::bail!(
                "upcoming_window_days must be between 1 and 31, got {}",
                self.tasks.upcoming_window_days
            );
        }

        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    pub fn upcoming_window(&self) -> chrono::Duration {
        chrono::Duration::days(self.tasks.upcoming_window_days)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Clinidash Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("clinidash"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
