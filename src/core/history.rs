// MMDVM Monitor - core/history.rs
//
// Last-heard list: bounded, newest-first, one row per distinct display line.
// Rotation is a display concern driven by the renderer's scroll timer; it
// cycles rows without reordering them by recency.

use crate::core::model::{HistoryEntry, TransmissionEvent};
use crate::util::constants::{HISTORY_CAPACITY, HISTORY_VISIBLE_ROWS};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Record a transmission.
    ///
    /// Returns `false` when an entry with the same display line is already
    /// present. The existing entry keeps its position and original timestamp.
    pub fn record(&mut self, event: &TransmissionEvent) -> bool {
        if self
            .entries
            .iter()
            .any(|e| e.display_line == event.display_line)
        {
            return false;
        }

        self.entries.push_front(HistoryEntry::from(event));
        self.entries.truncate(HISTORY_CAPACITY);
        true
    }

    /// Move the front row to the back.
    pub fn rotate(&mut self) {
        if let Some(front) = self.entries.pop_front() {
            self.entries.push_back(front);
        }
    }

    /// Rows the renderer may show.
    pub fn window(&self) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .take(HISTORY_VISIBLE_ROWS)
            .cloned()
            .collect()
    }

    /// All retained rows in current order.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{EventTime, Mode};

    fn dmr(callsign: &str, tg: u32, ts: &str) -> TransmissionEvent {
        TransmissionEvent {
            mode: Mode::Dmr,
            timestamp: EventTime::parse(ts),
            callsign: callsign.to_string(),
            destination: tg.to_string(),
            info: format!("TG {tg} (S1)"),
            display_line: format!("{callsign} - TG {tg}"),
        }
    }

    fn lines(store: &HistoryStore) -> Vec<String> {
        store.entries().map(|e| e.display_line.clone()).collect()
    }

    #[test]
    fn test_record_inserts_newest_first() {
        let mut store = HistoryStore::new();
        assert!(store.record(&dmr("W1ABC", 91, "2024-01-01 10:00:00")));
        assert!(store.record(&dmr("K2DEF", 3100, "2024-01-01 10:01:00")));
        assert_eq!(lines(&store), vec!["K2DEF - TG 3100", "W1ABC - TG 91"]);
        assert_eq!(store.entries().next().unwrap().mode, Mode::Dmr);
        assert_eq!(
            store.entries().next().unwrap().timestamp,
            "01.01.2024 / 10:01:00"
        );
    }

    #[test]
    fn test_duplicate_keeps_original_position_and_timestamp() {
        let mut store = HistoryStore::new();
        store.record(&dmr("W1ABC", 91, "2024-01-01 10:00:00"));
        store.record(&dmr("K2DEF", 3100, "2024-01-01 10:01:00"));

        assert!(!store.record(&dmr("W1ABC", 91, "2024-01-01 10:05:00")));
        assert_eq!(store.len(), 2);
        assert_eq!(lines(&store), vec!["K2DEF - TG 3100", "W1ABC - TG 91"]);
        let original = store.entries().nth(1).unwrap();
        assert_eq!(original.timestamp, "01.01.2024 / 10:00:00");
    }

    #[test]
    fn test_same_callsign_on_other_talkgroup_is_distinct() {
        let mut store = HistoryStore::new();
        store.record(&dmr("W1ABC", 91, "2024-01-01 10:00:00"));
        assert!(store.record(&dmr("W1ABC", 92, "2024-01-01 10:00:10")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_capacity_keeps_most_recent_distinct() {
        let mut store = HistoryStore::new();
        for i in 0..30 {
            store.record(&dmr(&format!("CALL{i}"), 91, "2024-01-01 10:00:00"));
        }
        assert_eq!(store.len(), HISTORY_CAPACITY);
        let kept = lines(&store);
        assert_eq!(kept.first().unwrap(), "CALL29 - TG 91");
        assert_eq!(kept.last().unwrap(), "CALL5 - TG 91");
        assert!(!kept.contains(&"CALL4 - TG 91".to_string()));
    }

    #[test]
    fn test_evicted_entry_can_be_recorded_again() {
        let mut store = HistoryStore::new();
        for i in 0..26 {
            store.record(&dmr(&format!("CALL{i}"), 91, "2024-01-01 10:00:00"));
        }
        assert!(store.record(&dmr("CALL0", 91, "2024-01-01 11:00:00")));
        assert_eq!(lines(&store)[0], "CALL0 - TG 91");
    }

    #[test]
    fn test_window_shows_at_most_ten_rows() {
        let mut store = HistoryStore::new();
        for i in 0..15 {
            store.record(&dmr(&format!("CALL{i}"), 91, "2024-01-01 10:00:00"));
        }
        let window = store.window();
        assert_eq!(window.len(), HISTORY_VISIBLE_ROWS);
        assert_eq!(window[0].display_line, "CALL14 - TG 91");
        assert_eq!(window[9].display_line, "CALL5 - TG 91");
    }

    #[test]
    fn test_rotate_cycles_front_to_back() {
        let mut store = HistoryStore::new();
        store.record(&dmr("A1", 1, "2024-01-01 10:00:00"));
        store.record(&dmr("B2", 2, "2024-01-01 10:00:00"));
        store.record(&dmr("C3", 3, "2024-01-01 10:00:00"));

        store.rotate();
        assert_eq!(lines(&store), vec!["B2 - TG 2", "A1 - TG 1", "C3 - TG 3"]);

        store.rotate();
        store.rotate();
        assert_eq!(lines(&store), vec!["C3 - TG 3", "B2 - TG 2", "A1 - TG 1"]);
    }

    #[test]
    fn test_rotate_on_empty_store_is_noop() {
        let mut store = HistoryStore::new();
        store.rotate();
        assert!(store.is_empty());
        assert!(store.window().is_empty());
    }
}
