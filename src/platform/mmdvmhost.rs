// MMDVM Monitor - platform/mmdvmhost.rs
//
// Reads the RF frequencies out of the MMDVMHost configuration file
// (`/etc/mmdvmhost`, INI-style `Key=Value` lines). Read once at startup; the
// result only feeds a display string, so every failure degrades to
// FREQUENCIES_NOT_FOUND.

use crate::util::constants::{FREQUENCIES_NOT_FOUND, MAX_MMDVMHOST_FILE_SIZE};
use crate::util::error::ConfigError;
use std::path::Path;

const RX_KEY: &str = "RXFrequency";
const TX_KEY: &str = "TXFrequency";

/// Receive and transmit frequencies in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequencies {
    pub rx_hz: u64,
    pub tx_hz: u64,
}

impl Frequencies {
    /// `"RX: 438.800 MHz  |  TX: 430.200 MHz"`
    pub fn display(&self) -> String {
        format!(
            "RX: {:.3} MHz  |  TX: {:.3} MHz",
            hz_to_mhz(self.rx_hz),
            hz_to_mhz(self.tx_hz)
        )
    }
}

fn hz_to_mhz(hz: u64) -> f64 {
    hz as f64 / 1_000_000.0
}

/// Extract both frequencies from the file content.
///
/// Keys are matched exactly; if a key repeats the last value wins. Zero is
/// rejected since MMDVMHost uses it for "not configured".
pub fn parse_frequencies(content: &str, path: &Path) -> Result<Frequencies, ConfigError> {
    let mut rx = None;
    let mut tx = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let slot = if key == RX_KEY {
            (&mut rx, RX_KEY)
        } else if key == TX_KEY {
            (&mut tx, TX_KEY)
        } else {
            continue;
        };

        let value = value.trim();
        match value.parse::<u64>() {
            Ok(hz) if hz > 0 => *slot.0 = Some(hz),
            _ => {
                return Err(ConfigError::InvalidFrequency {
                    path: path.to_path_buf(),
                    key: slot.1,
                    value: value.to_string(),
                })
            }
        }
    }

    let rx_hz = rx.ok_or_else(|| ConfigError::MissingKey {
        path: path.to_path_buf(),
        key: RX_KEY,
    })?;
    let tx_hz = tx.ok_or_else(|| ConfigError::MissingKey {
        path: path.to_path_buf(),
        key: TX_KEY,
    })?;
    Ok(Frequencies { rx_hz, tx_hz })
}

/// Read and parse the MMDVMHost config file.
pub fn load_frequencies(path: &Path) -> Result<Frequencies, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_MMDVMHOST_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: MAX_MMDVMHOST_FILE_SIZE,
        });
    }
    let bytes = std::fs::read(path).map_err(io_err)?;
    parse_frequencies(&String::from_utf8_lossy(&bytes), path)
}

/// Display string for the frequency panel; never fails.
pub fn frequency_display(path: &Path) -> String {
    match load_frequencies(path) {
        Ok(freqs) => {
            tracing::info!(rx_hz = freqs.rx_hz, tx_hz = freqs.tx_hz, "Frequencies loaded");
            freqs.display()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Frequencies unavailable");
            FREQUENCIES_NOT_FOUND.to_string()
        }
    }
}
