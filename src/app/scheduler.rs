// MMDVM Monitor - app/scheduler.rs
//
// Fixed-rate driver for headless operation. Each iteration runs one
// `Monitor::tick`, hands the report and snapshot to a callback, then sleeps
// out the rest of the interval in short slices so cancellation is noticed
// within CANCEL_CHECK_INTERVAL_MS. Cancellation is only ever observed between
// ticks.

use crate::app::monitor::{Monitor, TickReport};
use crate::core::model::Snapshot;
use crate::util::constants::CANCEL_CHECK_INTERVAL_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Scheduler {
    interval: Duration,
    cancel: Arc<AtomicBool>,
}

impl Scheduler {
    pub fn new(tick_rate_hz: u32) -> Self {
        let hz = tick_rate_hz.max(1);
        Self {
            interval: Duration::from_secs(1) / hz,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Flag that stops `run` before its next tick when set.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Tick `monitor` until cancelled. Returns the number of ticks run.
    pub fn run<F>(&self, monitor: &mut Monitor, mut on_tick: F) -> u64
    where
        F: FnMut(&TickReport, &Snapshot),
    {
        tracing::info!(interval_ms = self.interval.as_millis() as u64, "Scheduler started");
        let mut ticks: u64 = 0;

        while !self.is_cancelled() {
            let started = Instant::now();
            let report = monitor.tick(started);
            ticks += 1;
            on_tick(&report, &monitor.snapshot());

            self.sleep_until(started + self.interval);
        }

        tracing::info!(ticks, "Scheduler stopped");
        ticks
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Interruptible sleep: wake every CANCEL_CHECK_INTERVAL_MS to check the flag.
    fn sleep_until(&self, deadline: Instant) {
        let slice = Duration::from_millis(CANCEL_CHECK_INTERVAL_MS);
        loop {
            if self.is_cancelled() {
                return;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            std::thread::sleep(remaining.min(slice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tail::{daily_log_path, LineSource};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_interval_from_rate() {
        assert_eq!(Scheduler::new(10).interval(), Duration::from_millis(100));
        assert_eq!(Scheduler::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_run_stops_when_cancelled_from_callback() {
        let dir = TempDir::new().expect("tmpdir");
        let source = LineSource::new(dir.path());
        let mut monitor = Monitor::new(
            source,
            Duration::from_secs(120),
            String::new(),
            Instant::now(),
        );

        let scheduler = Scheduler::new(50);
        let cancel = scheduler.cancel_handle();
        let mut seen = 0;
        let ticks = scheduler.run(&mut monitor, |_, snapshot| {
            seen += 1;
            assert!(!snapshot.screensaver_active);
            if seen == 3 {
                cancel.store(true, Ordering::SeqCst);
            }
        });
        assert_eq!(ticks, 3);
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_run_delivers_lines_written_before_tick() {
        let dir = TempDir::new().expect("tmpdir");
        let path = daily_log_path(dir.path(), chrono::Local::now().date_naive());
        fs::write(&path, "").expect("write");
        let source = LineSource::new(dir.path());
        let mut monitor = Monitor::new(
            source,
            Duration::from_secs(120),
            String::new(),
            Instant::now(),
        );
        fs::write(
            &path,
            "M: 2024-01-01 10:00:00 DMR Slot 1, from W1ABC to TG 91\n",
        )
        .expect("write");

        let scheduler = Scheduler::new(50);
        let cancel = scheduler.cancel_handle();
        let mut recorded = Vec::new();
        scheduler.run(&mut monitor, |report, _| {
            recorded.extend(report.recorded.iter().map(|e| e.display_line.clone()));
            cancel.store(true, Ordering::SeqCst);
        });
        assert_eq!(recorded, vec!["W1ABC - TG 91"]);
    }
}
