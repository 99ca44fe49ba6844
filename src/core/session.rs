// MMDVM Monitor - core/session.rs
//
// Derived session state: current mode/info, transmit flag, and the idle timer
// that gates the screensaver. Time is always passed in by the caller so the
// state machine can be driven by a simulated clock in tests.
//
// The screensaver is purely a display gate. Extraction keeps running while it
// is shown and any newly recorded transmission clears it.

use crate::core::model::{Mode, TransmissionEvent};
use crate::util::constants::DEFAULT_IDLE_TIMEOUT_SECS;
use std::time::{Duration, Instant};

/// Info text shown before any transmission has been heard.
pub const NO_INFO: &str = "N/A";

#[derive(Debug, Clone)]
pub struct SessionState {
    current_mode: Option<Mode>,
    current_info: String,
    transmit_active: bool,
    idle_since: Instant,
    screensaver_active: bool,
    idle_timeout: Duration,
}

impl SessionState {
    pub fn new(now: Instant) -> Self {
        Self::with_idle_timeout(now, Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS))
    }

    pub fn with_idle_timeout(now: Instant, idle_timeout: Duration) -> Self {
        Self {
            current_mode: None,
            current_info: NO_INFO.to_string(),
            transmit_active: false,
            idle_since: now,
            screensaver_active: false,
            idle_timeout,
        }
    }

    /// A station keyed up.
    ///
    /// `newly_recorded` is false when the history suppressed the event as a
    /// duplicate; such repeats update the display but do not count as
    /// activity for the idle timer.
    pub fn on_transmission(&mut self, event: &TransmissionEvent, newly_recorded: bool, now: Instant) {
        self.current_mode = Some(event.mode);
        self.current_info.clone_from(&event.info);
        self.transmit_active = true;
        if newly_recorded {
            self.mark_active(now);
        }
    }

    /// Mode and info stay on the last transmission until the next one.
    pub fn on_transmission_end(&mut self) {
        self.transmit_active = false;
    }

    /// Key press or pointer activity from the renderer.
    pub fn on_activity(&mut self, now: Instant) {
        self.mark_active(now);
    }

    /// The user picked a protocol panel directly.
    pub fn override_mode(&mut self, mode: Mode) {
        self.current_mode = Some(mode);
    }

    /// Advance the idle timer. Returns true when this call switched the
    /// screensaver on.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.screensaver_active {
            return false;
        }
        if now.saturating_duration_since(self.idle_since) > self.idle_timeout {
            self.screensaver_active = true;
            return true;
        }
        false
    }

    fn mark_active(&mut self, now: Instant) {
        self.idle_since = now;
        self.screensaver_active = false;
    }

    pub fn current_mode(&self) -> Option<Mode> {
        self.current_mode
    }

    pub fn current_info(&self) -> &str {
        &self.current_info
    }

    pub fn transmit_active(&self) -> bool {
        self.transmit_active
    }

    pub fn screensaver_active(&self) -> bool {
        self.screensaver_active
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::EventTime;

    fn event(mode: Mode, info: &str) -> TransmissionEvent {
        TransmissionEvent {
            mode,
            timestamp: EventTime::parse("2024-01-01 10:00:00"),
            callsign: "W1ABC".to_string(),
            destination: "91".to_string(),
            info: info.to_string(),
            display_line: "W1ABC - TG 91".to_string(),
        }
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = SessionState::new(Instant::now());
        assert_eq!(state.current_mode(), None);
        assert_eq!(state.current_info(), "N/A");
        assert!(!state.transmit_active());
        assert!(!state.screensaver_active());
        assert_eq!(state.idle_timeout(), secs(120));
    }

    #[test]
    fn test_screensaver_only_after_strictly_more_than_timeout() {
        let t0 = Instant::now();
        let mut state = SessionState::new(t0);

        assert!(!state.tick(t0 + secs(119)));
        assert!(!state.tick(t0 + secs(120)));
        assert!(!state.screensaver_active());

        assert!(state.tick(t0 + secs(120) + Duration::from_millis(1)));
        assert!(state.screensaver_active());
        // Already on: later ticks do not report another transition.
        assert!(!state.tick(t0 + secs(200)));
        assert!(state.screensaver_active());
    }

    #[test]
    fn test_new_transmission_clears_screensaver() {
        let t0 = Instant::now();
        let mut state = SessionState::new(t0);
        state.tick(t0 + secs(121));
        assert!(state.screensaver_active());

        state.on_transmission(&event(Mode::Dmr, "TG 91 (S1)"), true, t0 + secs(121));
        assert!(!state.screensaver_active());
        assert!(state.transmit_active());
        assert_eq!(state.current_mode(), Some(Mode::Dmr));
        assert_eq!(state.current_info(), "TG 91 (S1)");

        // Idle timer restarted at 121 s.
        assert!(!state.tick(t0 + secs(241)));
        assert!(state.tick(t0 + secs(242)));
    }

    #[test]
    fn test_duplicate_transmission_does_not_reset_idle_timer() {
        let t0 = Instant::now();
        let mut state = SessionState::new(t0);
        state.tick(t0 + secs(130));
        assert!(state.screensaver_active());

        state.on_transmission(&event(Mode::Ysf, "Room ALL"), false, t0 + secs(130));
        assert!(state.screensaver_active());
        assert!(state.transmit_active());
        assert_eq!(state.current_mode(), Some(Mode::Ysf));
        assert_eq!(state.current_info(), "Room ALL");
    }

    #[test]
    fn test_end_of_transmission_keeps_mode_and_info() {
        let t0 = Instant::now();
        let mut state = SessionState::new(t0);
        state.on_transmission(&event(Mode::P25, "TG 10200"), true, t0);
        state.on_transmission_end();
        assert!(!state.transmit_active());
        assert_eq!(state.current_mode(), Some(Mode::P25));
        assert_eq!(state.current_info(), "TG 10200");
    }

    #[test]
    fn test_activity_resets_idle_regardless_of_transmit_state() {
        let t0 = Instant::now();
        let mut state = SessionState::new(t0);
        state.on_transmission(&event(Mode::Dmr, "TG 91 (S1)"), true, t0);
        state.tick(t0 + secs(150));
        assert!(state.screensaver_active());

        state.on_activity(t0 + secs(150));
        assert!(!state.screensaver_active());
        assert!(state.transmit_active());
        assert!(!state.tick(t0 + secs(270)));
    }

    #[test]
    fn test_override_mode_keeps_info_and_flags() {
        let t0 = Instant::now();
        let mut state = SessionState::new(t0);
        state.override_mode(Mode::Nxdn);
        assert_eq!(state.current_mode(), Some(Mode::Nxdn));
        assert_eq!(state.current_info(), "N/A");
        assert!(!state.transmit_active());
    }

    #[test]
    fn test_custom_idle_timeout() {
        let t0 = Instant::now();
        let mut state = SessionState::with_idle_timeout(t0, secs(10));
        assert!(!state.tick(t0 + secs(10)));
        assert!(state.tick(t0 + secs(11)));
    }
}
