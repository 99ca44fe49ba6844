// MMDVM Monitor - core/extractor.rs
//
// Classifies MMDVMHost log lines. One matcher per protocol, tried in a fixed
// priority order (DMR, D-Star, YSF, NXDN, P25); the first pattern that hits
// decides the outcome. Lines no matcher claims are checked for the
// end-of-transmission marker.

use crate::core::model::{EventTime, MatchResult, Mode, TransmissionEvent};
use crate::util::constants::END_OF_TRANSMISSION_MARKER;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Origin tag, timestamp (fractional seconds discarded), then the keyword.
const LINE_PREFIX: &str =
    r"^[MDI]:\s+(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2})(?:\.\d+)?\s+";

/// Protocol-specific tails, appended to `LINE_PREFIX`.
fn mode_pattern(mode: Mode) -> &'static str {
    match mode {
        Mode::Dmr => r"DMR\s+Slot\s+(\d+),.*?from\s+([A-Z0-9/-]+)\s+to\s+TG\s+(\d+)",
        Mode::DStar => r"D-?Star.*?from\s+([A-Z0-9/-]+).*?(?:via|to)\s+([A-Z0-9/-]+)",
        Mode::Ysf => r"YSF.*?from\s+([A-Z0-9/-]+).*?to\s+([^,]+)",
        Mode::Nxdn => r"NXDN.*?from\s+([A-Z0-9/-]+).*?TG\s+(\d+)",
        Mode::P25 => r"P25.*?from\s+([A-Z0-9/-]+).*?TG\s+(\d+)",
    }
}

// =============================================================================
// Matcher
// =============================================================================

/// Pattern for a single protocol.
#[derive(Debug)]
pub struct Matcher {
    mode: Mode,
    pattern: Regex,
}

impl Matcher {
    fn new(mode: Mode) -> Self {
        let source = format!("(?i){LINE_PREFIX}{}", mode_pattern(mode));
        // Patterns are constants covered by the unit tests below, so a typo
        // shows up as a failing test rather than a runtime panic.
        let pattern = Regex::new(&source).expect("built-in matcher pattern must compile");
        Self { mode, pattern }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn captures<'l>(&self, line: &'l str) -> Option<Captures<'l>> {
        self.pattern.captures(line)
    }

    /// Extract a normalised event from `line`, if this protocol claims it.
    pub fn try_match(&self, line: &str) -> Option<TransmissionEvent> {
        self.captures(line).and_then(|caps| self.build_event(&caps))
    }

    fn build_event(&self, caps: &Captures<'_>) -> Option<TransmissionEvent> {
        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        let timestamp = EventTime::parse(group(1)?);

        let (callsign, destination, info, display_line) = match self.mode {
            Mode::Dmr => {
                let (slot, callsign, tg) = (group(2)?, group(3)?, group(4)?);
                (
                    callsign,
                    tg,
                    format!("TG {tg} (S{slot})"),
                    format!("{callsign} - TG {tg}"),
                )
            }
            Mode::DStar => {
                let (callsign, reflector) = (group(2)?, group(3)?);
                (
                    callsign,
                    reflector,
                    format!("via {reflector}"),
                    format!("{callsign} - {reflector}"),
                )
            }
            Mode::Ysf => {
                let (callsign, room) = (group(2)?, group(3)?);
                (
                    callsign,
                    room,
                    format!("Room {room}"),
                    format!("{callsign} - {room}"),
                )
            }
            Mode::Nxdn | Mode::P25 => {
                let (callsign, tg) = (group(2)?, group(3)?);
                (
                    callsign,
                    tg,
                    format!("TG {tg}"),
                    format!("{callsign} - TG {tg}"),
                )
            }
        };

        Some(TransmissionEvent {
            mode: self.mode,
            timestamp,
            callsign: callsign.to_string(),
            destination: destination.to_string(),
            info,
            display_line,
        })
    }
}

fn builtin_matchers() -> &'static [Matcher] {
    static MATCHERS: OnceLock<Vec<Matcher>> = OnceLock::new();
    MATCHERS.get_or_init(|| Mode::all().iter().map(|&mode| Matcher::new(mode)).collect())
}

// =============================================================================
// EventExtractor
// =============================================================================

/// Stateless line classifier over the built-in protocol matchers.
#[derive(Debug, Clone, Copy)]
pub struct EventExtractor {
    matchers: &'static [Matcher],
}

impl EventExtractor {
    pub fn new() -> Self {
        Self {
            matchers: builtin_matchers(),
        }
    }

    /// Matchers in priority order.
    pub fn matchers(&self) -> &[Matcher] {
        self.matchers
    }

    /// Classify a single log line.
    pub fn extract(&self, line: &str) -> MatchResult {
        for matcher in self.matchers {
            if let Some(caps) = matcher.captures(line) {
                match matcher.build_event(&caps) {
                    Some(event) => return MatchResult::Transmission(event),
                    // The first pattern hit decides; an incomplete hit is
                    // not retried against lower-priority protocols.
                    None => break,
                }
            }
        }

        if line.to_lowercase().contains(END_OF_TRANSMISSION_MARKER) {
            MatchResult::TransmissionEnd
        } else {
            MatchResult::NoMatch
        }
    }
}

impl Default for EventExtractor {
    fn default() -> Self {
        Self::new()
    }
}
