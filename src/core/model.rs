// MMDVM Monitor - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::{DISPLAY_TIMESTAMP_FORMAT, LOG_TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;

// =============================================================================
// Mode
// =============================================================================

/// Radio protocols MMDVMHost reports traffic for.
///
/// The declaration order is the matcher priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    #[serde(rename = "DMR")]
    Dmr,
    #[serde(rename = "D-Star")]
    DStar,
    #[serde(rename = "YSF")]
    Ysf,
    #[serde(rename = "NXDN")]
    Nxdn,
    #[serde(rename = "P25")]
    P25,
}

impl Mode {
    /// Returns all variants in priority order.
    pub fn all() -> &'static [Mode] {
        &[Mode::Dmr, Mode::DStar, Mode::Ysf, Mode::Nxdn, Mode::P25]
    }

    /// Human-readable label, as MMDVMHost spells it.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Dmr => "DMR",
            Mode::DStar => "D-Star",
            Mode::Ysf => "YSF",
            Mode::Nxdn => "NXDN",
            Mode::P25 => "P25",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label shown when no mode has been seen yet.
pub const IDLE_LABEL: &str = "Idle";

/// Label for an optional session mode (`None` is the idle sentinel).
pub fn mode_label(mode: Option<Mode>) -> &'static str {
    mode.map_or(IDLE_LABEL, |m| m.label())
}

// =============================================================================
// Event timestamp
// =============================================================================

/// Timestamp captured from a log line.
///
/// Parsing never fails hard: anything chrono rejects is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    Parsed(NaiveDateTime),
    Raw(String),
}

impl EventTime {
    /// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn parse(raw: &str) -> Self {
        match NaiveDateTime::parse_from_str(raw, LOG_TIMESTAMP_FORMAT) {
            Ok(dt) => EventTime::Parsed(dt),
            Err(_) => EventTime::Raw(raw.to_string()),
        }
    }

    /// Render as `DD.MM.YYYY / HH:MM:SS`, or the raw text if unparsed.
    pub fn formatted(&self) -> String {
        match self {
            EventTime::Parsed(dt) => dt.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
            EventTime::Raw(raw) => raw.clone(),
        }
    }
}

// =============================================================================
// Transmission events (output of extraction)
// =============================================================================

/// A station heard on the repeater, normalised across all protocols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionEvent {
    pub mode: Mode,

    pub timestamp: EventTime,

    /// Source station identifier.
    pub callsign: String,

    /// Talkgroup number, reflector, or room depending on `mode`.
    pub destination: String,

    /// Auxiliary description for the info panel, e.g. "TG 91 (S1)".
    pub info: String,

    /// `"callsign - destination"` summary. Duplicate key for history.
    pub display_line: String,
}

/// Outcome of running one log line through the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Transmission(TransmissionEvent),
    TransmissionEnd,
    NoMatch,
}

// =============================================================================
// History
// =============================================================================

/// One row of the last-heard list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub display_line: String,
    pub mode: Mode,
    /// Timestamp already rendered for display.
    pub timestamp: String,
}

impl From<&TransmissionEvent> for HistoryEntry {
    fn from(event: &TransmissionEvent) -> Self {
        Self {
            display_line: event.display_line.clone(),
            mode: event.mode,
            timestamp: event.timestamp.formatted(),
        }
    }
}

// =============================================================================
// Snapshot (core -> renderer)
// =============================================================================

/// Point-in-time view of the monitor handed to the renderer each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// `None` while idle.
    pub current_mode: Option<Mode>,
    pub current_info: String,
    pub transmit_active: bool,
    pub screensaver_active: bool,

    /// Whether today's log file is currently open.
    pub log_available: bool,
    pub log_path: Option<PathBuf>,

    /// RX/TX frequency display string.
    pub frequencies: String,

    /// Visible history rows, post-rotation.
    pub visible: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_time_formats_parsed_timestamp() {
        let ts = EventTime::parse("2024-01-01 10:00:00");
        assert!(matches!(ts, EventTime::Parsed(_)));
        assert_eq!(ts.formatted(), "01.01.2024 / 10:00:00");
    }

    #[test]
    fn test_event_time_keeps_unparseable_text_verbatim() {
        let ts = EventTime::parse("2024-13-45 99:00:00");
        assert_eq!(ts, EventTime::Raw("2024-13-45 99:00:00".to_string()));
        assert_eq!(ts.formatted(), "2024-13-45 99:00:00");
    }

    #[test]
    fn test_mode_labels_and_idle_sentinel() {
        assert_eq!(Mode::DStar.to_string(), "D-Star");
        assert_eq!(mode_label(None), "Idle");
        assert_eq!(mode_label(Some(Mode::P25)), "P25");
        assert_eq!(Mode::all().len(), 5);
    }

    #[test]
    fn test_history_entry_serialises_mode_label() {
        let entry = HistoryEntry {
            display_line: "W1ABC - TG 91".to_string(),
            mode: Mode::DStar,
            timestamp: "01.01.2024 / 10:00:00".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"mode\":\"D-Star\""), "{json}");
    }
}
