// MMDVM Monitor - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "MMDVM Monitor";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "MMDVMMonitor";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log source
// =============================================================================

/// Directory Pi-Star writes the daily MMDVMHost logs into.
pub const DEFAULT_LOG_DIR: &str = "/var/log/pi-star";

/// File name prefix of a daily MMDVMHost log (`MMDVM-YYYY-MM-DD.log`).
pub const LOG_FILE_PREFIX: &str = "MMDVM-";

/// File name suffix of a daily MMDVMHost log.
pub const LOG_FILE_SUFFIX: &str = ".log";

/// chrono format of the date embedded in the daily log file name.
pub const LOG_FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum bytes read from the log file in one poll.
/// Keeps a burst of writes from stalling a single tick.
pub const MAX_TAIL_READ_BYTES_PER_TICK: usize = 256 * 1_024; // 256 KiB

/// Longest line the tail will deliver. A line still unterminated at this size
/// is dropped up to and including its newline.
pub const MAX_TAIL_PARTIAL_BYTES: usize = MAX_TAIL_READ_BYTES_PER_TICK * 4; // 1 MiB

// =============================================================================
// MMDVMHost configuration
// =============================================================================

/// Path of the MMDVMHost configuration file holding the RF frequencies.
pub const DEFAULT_MMDVMHOST_FILE: &str = "/etc/mmdvmhost";

/// Maximum size of the MMDVMHost config file we are willing to read.
pub const MAX_MMDVMHOST_FILE_SIZE: u64 = 256 * 1_024;

/// Display string used when the frequencies cannot be determined.
pub const FREQUENCIES_NOT_FOUND: &str = "Frequencies not found";

// =============================================================================
// Event extraction
// =============================================================================

/// chrono format of the timestamp captured from a log line.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// chrono format used to render a history entry timestamp.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%d.%m.%Y / %H:%M:%S";

/// Case-insensitive marker MMDVMHost writes when a voice transmission ends.
pub const END_OF_TRANSMISSION_MARKER: &str = "end of voice transmission";

// =============================================================================
// History
// =============================================================================

/// Maximum number of distinct entries retained in the last-heard history.
pub const HISTORY_CAPACITY: usize = 25;

/// Number of history entries exposed to the renderer.
pub const HISTORY_VISIBLE_ROWS: usize = 10;

// =============================================================================
// Session / scheduling
// =============================================================================

/// Seconds without activity before the screensaver is shown.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 120;

/// Minimum user-configurable idle timeout (seconds).
pub const MIN_IDLE_TIMEOUT_SECS: u64 = 10;

/// Maximum user-configurable idle timeout (seconds).
pub const MAX_IDLE_TIMEOUT_SECS: u64 = 86_400; // 24 h

/// Core tick rate (ticks per second).
pub const DEFAULT_TICK_RATE_HZ: u32 = 10;

/// Minimum user-configurable tick rate.
pub const MIN_TICK_RATE_HZ: u32 = 1;

/// Maximum user-configurable tick rate.
pub const MAX_TICK_RATE_HZ: u32 = 60;

/// How often the cancel flag is checked while the headless scheduler sleeps (ms).
pub const CANCEL_CHECK_INTERVAL_MS: u64 = 25;

/// Interval between history rotations in the event log view (ms).
/// 30 frames at 10 Hz in the classic LCARS display.
pub const DEFAULT_SCROLL_INTERVAL_MS: u64 = 3_000;

/// Minimum user-configurable scroll interval (ms).
pub const MIN_SCROLL_INTERVAL_MS: u64 = 250;

/// Maximum user-configurable scroll interval (ms).
pub const MAX_SCROLL_INTERVAL_MS: u64 = 60_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum size of config.toml in bytes.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1_024;
