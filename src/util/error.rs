// MMDVM Monitor - util/error.rs
//
// Typed errors with context-preserving error chains, one enum per subsystem.
// None of these are fatal inside the tick loop: the component that hits one
// logs it and degrades (no lines, default config, "not found" display).

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Tail errors
// ---------------------------------------------------------------------------

/// Errors raised while following the daily log file.
#[derive(Debug)]
pub enum TailError {
    /// The log file for the current day could not be opened.
    Open { path: PathBuf, source: io::Error },

    /// File metadata could not be read.
    Stat { path: PathBuf, source: io::Error },

    /// Seeking to the stored read offset failed.
    Seek {
        path: PathBuf,
        offset: u64,
        source: io::Error,
    },

    /// Reading new bytes failed.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for TailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open '{}': {source}", path.display())
            }
            Self::Stat { path, source } => {
                write!(f, "cannot stat '{}': {source}", path.display())
            }
            Self::Seek {
                path,
                offset,
                source,
            } => write!(
                f,
                "cannot seek '{}' to offset {offset}: {source}",
                path.display()
            ),
            Self::Read { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for TailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. }
            | Self::Stat { source, .. }
            | Self::Seek { source, .. }
            | Self::Read { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading (config.toml and /etc/mmdvmhost).
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// A required key was not present in a key=value file.
    MissingKey { path: PathBuf, key: &'static str },

    /// A frequency value was not an integer number of Hz.
    InvalidFrequency {
        path: PathBuf,
        key: &'static str,
        value: String,
    },

    /// Config file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::MissingKey { path, key } => {
                write!(f, "'{}': missing key '{key}'", path.display())
            }
            Self::InvalidFrequency { path, key, value } => write!(
                f,
                "'{}': {key} = '{value}' is not a frequency in Hz",
                path.display()
            ),
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
