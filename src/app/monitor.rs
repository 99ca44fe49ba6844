// MMDVM Monitor - app/monitor.rs
//
// The tick: drain new log lines, classify each, fold matches into the history
// and session state, then advance the idle timer. Nothing in here sleeps or
// retries; scheduling belongs to the caller (GUI frame loop or Scheduler).
//
// Each line is applied completely before the next is looked at, so stopping
// between lines or ticks never leaves a half-applied line behind.

use crate::app::tail::LineSource;
use crate::core::extractor::EventExtractor;
use crate::core::history::HistoryStore;
use crate::core::model::{HistoryEntry, MatchResult, Mode, Snapshot};
use crate::core::session::SessionState;
use crate::util::logging::preview;
use chrono::NaiveDate;
use std::time::{Duration, Instant};

/// What a single tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub lines_read: usize,
    pub transmissions: usize,
    pub transmission_ends: usize,
    /// Entries that were new to the history, in log order.
    pub recorded: Vec<HistoryEntry>,
    pub screensaver_started: bool,
}

/// Owns every piece of core state. The tick loop is its only writer.
#[derive(Debug)]
pub struct Monitor {
    source: LineSource,
    extractor: EventExtractor,
    history: HistoryStore,
    session: SessionState,
    frequencies: String,
}

impl Monitor {
    pub fn new(
        source: LineSource,
        idle_timeout: Duration,
        frequencies: String,
        now: Instant,
    ) -> Self {
        Self {
            source,
            extractor: EventExtractor::new(),
            history: HistoryStore::new(),
            session: SessionState::with_idle_timeout(now, idle_timeout),
            frequencies,
        }
    }

    /// Run one tick against the real local date.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let lines = self.source.poll();
        self.apply_lines(lines, now)
    }

    /// Run one tick treating `today` as the current date.
    pub fn tick_on(&mut self, now: Instant, today: NaiveDate) -> TickReport {
        let lines = self.source.poll_on(today);
        self.apply_lines(lines, now)
    }

    fn apply_lines(&mut self, lines: Vec<String>, now: Instant) -> TickReport {
        let mut report = TickReport {
            lines_read: lines.len(),
            ..TickReport::default()
        };

        for line in &lines {
            match self.process_line(line, now) {
                LineOutcome::Recorded(entry) => {
                    report.transmissions += 1;
                    report.recorded.push(entry);
                }
                LineOutcome::Repeated => report.transmissions += 1,
                LineOutcome::Ended => report.transmission_ends += 1,
                LineOutcome::Ignored => {}
            }
        }

        report.screensaver_started = self.session.tick(now);
        if report.screensaver_started {
            tracing::info!(
                idle_timeout_secs = self.session.idle_timeout().as_secs(),
                "Screensaver on"
            );
        }
        report
    }

    /// Apply a single log line to history and session state.
    pub fn process_line(&mut self, line: &str, now: Instant) -> LineOutcome {
        match self.extractor.extract(line) {
            MatchResult::Transmission(event) => {
                let newly_recorded = self.history.record(&event);
                self.session.on_transmission(&event, newly_recorded, now);
                tracing::debug!(
                    mode = %event.mode,
                    callsign = %event.callsign,
                    destination = %event.destination,
                    newly_recorded,
                    "Transmission"
                );
                if newly_recorded {
                    LineOutcome::Recorded(HistoryEntry::from(&event))
                } else {
                    LineOutcome::Repeated
                }
            }
            MatchResult::TransmissionEnd => {
                self.session.on_transmission_end();
                tracing::debug!(line = preview(line), "End of transmission");
                LineOutcome::Ended
            }
            MatchResult::NoMatch => {
                tracing::trace!(line = preview(line), "Ignored line");
                LineOutcome::Ignored
            }
        }
    }

    /// Key press or pointer activity reported by the renderer.
    pub fn note_activity(&mut self, now: Instant) {
        self.session.on_activity(now);
    }

    /// The user selected a protocol panel. History is not touched.
    pub fn override_mode(&mut self, mode: Mode) {
        tracing::debug!(mode = %mode, "Mode override");
        self.session.override_mode(mode);
    }

    /// Advance the event-log marquee by one row.
    pub fn rotate_history(&mut self) {
        self.history.rotate();
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Point-in-time copy for the renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_mode: self.session.current_mode(),
            current_info: self.session.current_info().to_string(),
            transmit_active: self.session.transmit_active(),
            screensaver_active: self.session.screensaver_active(),
            log_available: self.source.is_available(),
            log_path: self.source.current_path().map(|p| p.to_path_buf()),
            frequencies: self.frequencies.clone(),
            visible: self.history.window(),
        }
    }
}

/// Effect of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// New station added to the history.
    Recorded(HistoryEntry),
    /// Transmission from a station already in the history.
    Repeated,
    Ended,
    Ignored,
}
