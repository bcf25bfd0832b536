use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for the logs dialog
const MAX_IN_MEMORY_LOGS: usize = 1000;

/// Shared in-memory log buffer shown by the logs dialog
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        self.push(format!("[{}] {}", timestamp, message));
    }

    fn push(&self, formatted_message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_IN_MEMORY_LOGS {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for log file"))
    }

    /// Build the fern dispatch that feeds this buffer and, when enabled, a log file
    pub fn dispatch(&self, config: &LoggingConfig) -> Result<fern::Dispatch> {
        let memory = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .level(config.level_filter()?)
            .chain(fern::Output::call(move |record| {
                memory.log(format!("{} {}", record.level(), record.args()));
            }));

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} {:<5} {}: {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Install this logger as the global `log` backend
    pub fn install(&self, config: &LoggingConfig) -> Result<()> {
        self.dispatch(config)?
            .apply()
            .context("A global logger is already installed")
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
