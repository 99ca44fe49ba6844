// MMDVM Monitor - gui.rs
//
// Top-level eframe::App implementation. Each frame:
//   1. apply requests panels raised last frame (mode override),
//   2. forward key/pointer input to the core as activity,
//   3. run a core tick if the tick interval has elapsed,
//   4. rotate the event log if the scroll interval has elapsed,
//   5. take a fresh snapshot and draw it.
// The core is only mutated here, between draws.

use crate::app::monitor::Monitor;
use crate::app::state::AppState;
use crate::ui;
use std::time::{Duration, Instant};

/// The monitor application.
pub struct MonitorApp {
    pub monitor: Monitor,
    pub state: AppState,
    tick_interval: Duration,
    scroll_interval: Duration,
    started: Instant,
    last_tick: Instant,
    last_scroll: Instant,
}

impl MonitorApp {
    pub fn new(
        monitor: Monitor,
        debug_mode: bool,
        tick_interval: Duration,
        scroll_interval: Duration,
    ) -> Self {
        let now = Instant::now();
        let state = AppState::new(monitor.snapshot(), debug_mode);
        Self {
            monitor,
            state,
            tick_interval,
            scroll_interval,
            started: now,
            last_tick: now,
            last_scroll: now,
        }
    }
}

/// Returns (any activity, escape pressed) for this frame's input.
fn read_input(ctx: &egui::Context) -> (bool, bool) {
    ctx.input(|i| {
        let activity = i.events.iter().any(|e| {
            matches!(
                e,
                egui::Event::Key { pressed: true, .. }
                    | egui::Event::PointerMoved(_)
                    | egui::Event::PointerButton { pressed: true, .. }
            )
        });
        (activity, i.key_pressed(egui::Key::Escape))
    })
}

impl eframe::App for MonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(mode) = self.state.requested_mode.take() {
            self.monitor.override_mode(mode);
        }

        let (activity, escape) = read_input(ctx);
        if escape {
            tracing::info!("Escape pressed; closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if activity {
            self.monitor.note_activity(now);
        }

        if now.duration_since(self.last_tick) >= self.tick_interval {
            self.last_tick = now;
            let report = self.monitor.tick(now);
            for entry in &report.recorded {
                tracing::info!(
                    mode = %entry.mode,
                    station = %entry.display_line,
                    "Heard"
                );
            }
        }

        if now.duration_since(self.last_scroll) >= self.scroll_interval {
            self.last_scroll = now;
            self.monitor.rotate_history();
        }

        self.state.snapshot = self.monitor.snapshot();
        let elapsed = now.duration_since(self.started);
        self.state.set_blink_from_elapsed(elapsed.as_millis());

        if self.state.snapshot.screensaver_active {
            egui::CentralPanel::default()
                .frame(egui::Frame::default().fill(egui::Color32::BLACK))
                .show(ctx, |ui| {
                    ui::panels::screensaver::render(ui, elapsed.as_secs_f64());
                });
        } else {
            egui::TopBottomPanel::top("header")
                .frame(egui::Frame::default().fill(egui::Color32::BLACK).inner_margin(egui::Margin::same(8)))
                .show(ctx, |ui| {
                    ui::panels::header::render(ui, &mut self.state);
                });

            egui::SidePanel::right("status")
                .exact_width(ui::theme::SIDE_PANEL_WIDTH)
                .resizable(false)
                .frame(egui::Frame::default().fill(egui::Color32::BLACK).inner_margin(egui::Margin::same(8)))
                .show(ctx, |ui| {
                    ui::panels::status::render(ui, &self.state);
                });

            egui::CentralPanel::default()
                .frame(egui::Frame::default().fill(ui::theme::PANEL_BG).inner_margin(egui::Margin::same(12)))
                .show(ctx, |ui| {
                    ui::panels::event_log::render(ui, &self.state);
                });
        }

        // Keep frames coming at the tick rate so new lines and timers show up
        // without user input.
        ctx.request_repaint_after(self.tick_interval);
    }
}
