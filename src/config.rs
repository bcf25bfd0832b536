//! Configuration management for taskdeck
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub shortcuts: ShortcutsConfig,
    pub display: DisplayConfig,
    pub user: UserConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Path opened on startup, e.g. "/", "/task" or "/work"
    pub start_path: String,
    /// Sidebar width in columns when expanded
    pub sidebar_width: u16,
    /// Start with the sidebar collapsed to icons
    pub sidebar_collapsed: bool,
    /// Touch context: keyboard shortcuts are not bound
    pub touch_mode: bool,
    /// Icon theme: "Ascii", "Unicode" or "Emoji"
    pub icon_theme: IconTheme,
}

/// Modifier that must be held for task shortcuts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Ctrl,
    Cmd,
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ctrl => f.write_str("Ctrl"),
            Self::Cmd => f.write_str("Cmd"),
        }
    }
}

/// Keyboard shortcut configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShortcutsConfig {
    /// Bind task shortcuts (Ctrl+E / Ctrl+D) at all
    pub enabled: bool,
    /// Preferred modifier for task shortcuts
    pub modifier: ModifierKey,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for due dates in task rows
    pub date_format: String,
    /// Show task descriptions in list view
    pub show_descriptions: bool,
    /// Open the editor with the JSON form preview visible
    pub show_form_preview: bool,
}

/// Identity stamped on created tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    pub id: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// Level filter: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_path: "/".to_string(),
            sidebar_width: crate::constants::SIDEBAR_DEFAULT_WIDTH,
            sidebar_collapsed: false,
            touch_mode: false,
            icon_theme: IconTheme::default(),
        }
    }
}

impl ShortcutsConfig {
    /// Modifier to bind with, given whether the terminal reports the Super key
    ///
    /// Without keyboard enhancement a Cmd press arrives as a bare key, so Cmd
    /// falls back to Ctrl.
    pub fn effective_modifier(&self, keyboard_enhanced: bool) -> ModifierKey {
        match self.modifier {
            ModifierKey::Cmd if !keyboard_enhanced => {
                log::warn!("Config: terminal does not report the Cmd key, using Ctrl for shortcuts");
                ModifierKey::Ctrl
            }
            modifier => modifier,
        }
    }
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            modifier: ModifierKey::Ctrl,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::ROW_DATE_FORMAT.to_string(),
            show_descriptions: true,
            show_form_preview: false,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: "user1".to_string(),
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
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
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
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
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

        if !self.ui.start_path.starts_with('/') {
            anyhow::bail!("start_path must begin with '/', got '{}'", self.ui.start_path);
        }

        if self.user.id.trim().is_empty() {
            anyhow::bail!("user.id cannot be empty");
        }

        // A format that cannot render a known date is rejected up front
        let probe = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).context("Invalid probe date")?;
        let mut rendered = String::new();
        if std::fmt::write(&mut rendered, format_args!("{}", probe.format(&self.display.date_format))).is_err() {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# taskdeck Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::FORM_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Render the active configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
