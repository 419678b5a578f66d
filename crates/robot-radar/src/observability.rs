//! Logging setup for the binary.
//!
//! Two sinks:
//!
//! - stderr, human-readable, quiet by default (warnings and errors) and
//!   louder with `-v`;
//! - a JSON-lines file at the configured `log_level`, written off-thread
//!   through `tracing-appender`.
//!
//! `RUST_LOG` overrides both filters. If no log location is writable the
//! file sink is skipped rather than failing the command.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "ROBOT_RADAR_LOG_PATH";
const LOG_DIR_ENV: &str = "ROBOT_RADAR_LOG_DIR";
const LOG_FILE_PREFIX: &str = "robot-radar";

/// Where file logs go.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file (no rotation).
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated `robot-radar.<date>.jsonl` files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations: env path, env dir, config dir, platform dir.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                robot_radar_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }
}

/// Keeps the background log writer alive; drop it to flush.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Filter for the stderr sink from `-q` / `-v`.
pub fn console_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Filter for the file sink from the configured log level.
pub fn file_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    console: EnvFilter,
    file: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_filter(console);

    let (file_layer, guard) = match file_appender(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: guard })
}

fn file_appender(config: &ObservabilityConfig) -> Option<RollingFileAppender> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let name = path.file_name()?.to_string_lossy().into_owned();
        return build_appender(dir, Rotation::NEVER, &name, None);
    }
    let dir = config.log_dir.as_deref()?;
    build_appender(dir, Rotation::DAILY, LOG_FILE_PREFIX, Some("jsonl"))
}

fn build_appender(
    dir: &Path,
    rotation: Rotation,
    prefix: &str,
    suffix: Option<&str>,
) -> Option<RollingFileAppender> {
    std::fs::create_dir_all(dir).ok()?;
    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix);
    if let Some(suffix) = suffix {
        builder = builder.filename_suffix(suffix);
    }
    builder.build(dir).ok()
}
