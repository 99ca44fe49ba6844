// MMDVM Monitor - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. Runs before logging is initialised (the log
// level lives in this file), so problems are returned as warnings for the
// caller to log once tracing is up.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/mmdvmmonitor/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
            },
            None => Self {
                config_dir: PathBuf::from("."),
            },
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works with
/// an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[monitor]` section.
    pub monitor: MonitorSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[monitor]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct MonitorSection {
    /// Directory holding the daily MMDVM-YYYY-MM-DD.log files.
    pub log_dir: Option<String>,
    /// MMDVMHost configuration file with RXFrequency / TXFrequency.
    pub mmdvmhost_file: Option<String>,
    /// Seconds without activity before the screensaver starts.
    pub idle_timeout_secs: Option<u64>,
    /// Core ticks per second.
    pub tick_rate_hz: Option<u32>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Milliseconds between event-log rotations.
    pub scroll_interval_ms: Option<u64>,
    /// Start the window fullscreen.
    pub fullscreen: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub mmdvmhost_file: PathBuf,
    pub idle_timeout_secs: u64,
    pub tick_rate_hz: u32,
    pub scroll_interval_ms: u64,
    pub fullscreen: bool,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(constants::DEFAULT_LOG_DIR),
            mmdvmhost_file: PathBuf::from(constants::DEFAULT_MMDVMHOST_FILE),
            idle_timeout_secs: constants::DEFAULT_IDLE_TIMEOUT_SECS,
            tick_rate_hz: constants::DEFAULT_TICK_RATE_HZ,
            scroll_interval_ms: constants::DEFAULT_SCROLL_INTERVAL_MS,
            fullscreen: false,
            log_level: None,
        }
    }
}

impl AppConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    pub fn scroll_interval(&self) -> Duration {
        Duration::from_millis(self.scroll_interval_ms)
    }
}

/// Load and validate config.toml at `config_path`.
///
/// Returns the validated config plus non-fatal warnings. A missing file is
/// the normal first-run case and produces defaults with no warnings. An
/// unreadable or unparseable file produces defaults and one warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(config_path) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let config = validate(raw, &mut warnings);
    (config, warnings)
}

fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_CONFIG_FILE_SIZE,
        });
    }
    let content = std::fs::read_to_string(path).map_err(io_err)?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Check each field against its named bounds, accumulating warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    let mut out_of_range = |field: &str, value: String, expected: String| {
        warnings.push(
            ConfigError::ValueOutOfRange {
                field: field.to_string(),
                value,
                expected,
            }
            .to_string(),
        );
    };

    if let Some(dir) = raw.monitor.log_dir.filter(|d| !d.trim().is_empty()) {
        config.log_dir = PathBuf::from(dir);
    }

    if let Some(file) = raw.monitor.mmdvmhost_file.filter(|f| !f.trim().is_empty()) {
        config.mmdvmhost_file = PathBuf::from(file);
    }

    if let Some(secs) = raw.monitor.idle_timeout_secs {
        if (constants::MIN_IDLE_TIMEOUT_SECS..=constants::MAX_IDLE_TIMEOUT_SECS).contains(&secs) {
            config.idle_timeout_secs = secs;
        } else {
            out_of_range(
                "[monitor] idle_timeout_secs",
                secs.to_string(),
                format!(
                    "{}-{} (using default {})",
                    constants::MIN_IDLE_TIMEOUT_SECS,
                    constants::MAX_IDLE_TIMEOUT_SECS,
                    constants::DEFAULT_IDLE_TIMEOUT_SECS
                ),
            );
        }
    }

    if let Some(hz) = raw.monitor.tick_rate_hz {
        if (constants::MIN_TICK_RATE_HZ..=constants::MAX_TICK_RATE_HZ).contains(&hz) {
            config.tick_rate_hz = hz;
        } else {
            out_of_range(
                "[monitor] tick_rate_hz",
                hz.to_string(),
                format!(
                    "{}-{} (using default {})",
                    constants::MIN_TICK_RATE_HZ,
                    constants::MAX_TICK_RATE_HZ,
                    constants::DEFAULT_TICK_RATE_HZ
                ),
            );
        }
    }

    if let Some(ms) = raw.ui.scroll_interval_ms {
        if (constants::MIN_SCROLL_INTERVAL_MS..=constants::MAX_SCROLL_INTERVAL_MS).contains(&ms) {
            config.scroll_interval_ms = ms;
        } else {
            out_of_range(
                "[ui] scroll_interval_ms",
                ms.to_string(),
                format!(
                    "{}-{} (using default {})",
                    constants::MIN_SCROLL_INTERVAL_MS,
                    constants::MAX_SCROLL_INTERVAL_MS,
                    constants::DEFAULT_SCROLL_INTERVAL_MS
                ),
            );
        }
    }

    if let Some(fullscreen) = raw.ui.fullscreen {
        config.fullscreen = fullscreen;
    }

    if let Some(level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            out_of_range(
                "[logging] level",
                level,
                "one of error, warn, info, debug, trace (using default info)".to_string(),
            );
        }
    }

    config
}
