// MMDVM Monitor - app/state.rs
//
// Renderer-side state. Holds the latest snapshot from the core and the
// requests panels raise while drawing; the GUI applies those at the start of
// the next frame. Owned by the eframe::App implementation.

use crate::core::model::{Mode, Snapshot};

/// Blink half-period for the TX highlight.
pub const BLINK_HALF_PERIOD_MS: u128 = 400;

#[derive(Debug)]
pub struct AppState {
    /// Snapshot taken after the most recent tick.
    pub snapshot: Snapshot,

    /// Mode panel the user clicked this frame, applied next frame.
    pub requested_mode: Option<Mode>,

    /// Current phase of the TX blink (toggles every BLINK_HALF_PERIOD_MS).
    pub blink_on: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    pub fn new(snapshot: Snapshot, debug_mode: bool) -> Self {
        Self {
            snapshot,
            requested_mode: None,
            blink_on: false,
            debug_mode,
        }
    }

    /// Update the blink phase from milliseconds since start.
    pub fn set_blink_from_elapsed(&mut self, elapsed_ms: u128) {
        self.blink_on = (elapsed_ms / BLINK_HALF_PERIOD_MS) % 2 == 0;
    }

    /// Whether a history row of `mode` should flash this frame: a
    /// transmission is in progress on that mode and the blink is on.
    pub fn row_flashing(&self, mode: Mode) -> bool {
        self.blink_on
            && self.snapshot.transmit_active
            && self.snapshot.current_mode == Some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(mode: Option<Mode>, transmit_active: bool) -> Snapshot {
        Snapshot {
            current_mode: mode,
            current_info: "TG 91 (S1)".to_string(),
            transmit_active,
            screensaver_active: false,
            log_available: true,
            log_path: None,
            frequencies: String::new(),
            visible: Vec::new(),
        }
    }

    #[test]
    fn test_blink_phase_toggles_every_half_period() {
        let mut state = AppState::new(snapshot(None, false), false);
        state.set_blink_from_elapsed(0);
        assert!(state.blink_on);
        state.set_blink_from_elapsed(399);
        assert!(state.blink_on);
        state.set_blink_from_elapsed(400);
        assert!(!state.blink_on);
        state.set_blink_from_elapsed(800);
        assert!(state.blink_on);
    }

    #[test]
    fn test_rows_flash_only_for_active_mode_while_transmitting() {
        let mut state = AppState::new(snapshot(Some(Mode::Dmr), true), false);
        state.blink_on = true;
        assert!(state.row_flashing(Mode::Dmr));
        assert!(!state.row_flashing(Mode::Ysf));

        state.snapshot.transmit_active = false;
        assert!(!state.row_flashing(Mode::Dmr));
    }
}
