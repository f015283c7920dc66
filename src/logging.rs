//! File-based tracing setup. The terminal belongs to the UI, so nothing is
//! ever written to stdout or stderr while the console runs.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "STORENAV_LOG";
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_path: crate::config::config_dir().map(|dir| dir.join("storenav.log")),
        }
    }
}

impl LoggingConfig {
    /// Level from `STORENAV_LOG`, file from `file_override` or the default.
    pub fn from_env(file_override: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            level: std::env::var(LOG_ENV).unwrap_or(defaults.level),
            file_path: file_override.or(defaults.file_path),
        }
    }

    /// Installs the global subscriber. The returned guard flushes the log
    /// file on drop and must be held for the lifetime of the program.
    pub fn init(&self) -> Result<Option<WorkerGuard>> {
        let Some(path) = &self.file_path else {
            return Ok(None);
        };
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let file_name = path
            .file_name()
            .context("log file path has no file name")?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;

        let (writer, guard) = non_blocking(rolling::never(&dir, file_name));
        let file_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .with_writer(writer);

        tracing_subscriber::registry()
            .with(env_filter(&self.level))
            .with(file_layer)
            .try_init()
            .context("installing tracing subscriber")?;

        tracing::info!(level = %self.level, file = %path.display(), "logging initialized");
        Ok(Some(guard))
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
