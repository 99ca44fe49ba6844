// MMDVM Monitor - ui/panels/status.rs
//
// Right-hand column: current mode and info, TX/IDLE indicator, RF
// frequencies, and the log file status line.

use crate::app::state::AppState;
use crate::core::model::mode_label;
use crate::ui::theme;

fn block(ui: &mut egui::Ui, fill: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(theme::CORNER_RADIUS)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(add_contents);
        });
}

fn dark(text: impl Into<String>, size: f32) -> egui::RichText {
    egui::RichText::new(text)
        .size(size)
        .strong()
        .color(egui::Color32::BLACK)
}

/// Render the status column (right side panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let snap = &state.snapshot;

    block(ui, theme::BLUE, |ui| {
        ui.label(dark(mode_label(snap.current_mode), 20.0));
        ui.label(dark(snap.current_info.as_str(), 20.0));
    });
    ui.add_space(10.0);

    let (fill, label) = if snap.transmit_active {
        (theme::RED, "TX")
    } else {
        (theme::TEAL, "IDLE")
    };
    block(ui, fill, |ui| {
        ui.label(dark(label, 24.0));
    });
    ui.add_space(10.0);

    block(ui, theme::TEAL, |ui| {
        ui.label(dark("FREQUENCIES", 16.0));
        ui.label(dark(snap.frequencies.as_str(), 16.0));
    });
    ui.add_space(10.0);

    let log_text = match (&snap.log_path, snap.log_available) {
        (Some(path), true) => format!("Watching {}", path.display()),
        _ => "Log file unavailable".to_string(),
    };
    let log_colour = if snap.log_available {
        theme::GREY
    } else {
        theme::RED
    };
    ui.label(egui::RichText::new(log_text).small().color(log_colour));

    if state.debug_mode {
        ui.label(
            egui::RichText::new(format!("{} rows visible", snap.visible.len()))
                .small()
                .weak(),
        );
    }
}
