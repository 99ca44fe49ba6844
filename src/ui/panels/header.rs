// MMDVM Monitor - ui/panels/header.rs
//
// Title bar with the local date/time, and the row of mode panels. Clicking a
// mode panel asks the core to switch the displayed mode.

use crate::app::state::AppState;
use crate::core::model::Mode;
use crate::ui::theme;

/// Render the header (top panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(" PI-STAR MMDVM ")
                .size(28.0)
                .strong()
                .color(egui::Color32::BLACK)
                .background_color(theme::ORANGE),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let now = chrono::Local::now();
            ui.label(
                egui::RichText::new(now.format("DATE %d.%m.%Y %H:%M:%S").to_string())
                    .size(18.0)
                    .color(theme::PEACH),
            );
        });
    });

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        for &mode in Mode::all() {
            let highlighted = state.snapshot.current_mode == Some(mode);
            let label = egui::RichText::new(mode.label().to_uppercase())
                .strong()
                .color(egui::Color32::BLACK);
            let mut button = egui::Button::new(label)
                .fill(theme::mode_colour(mode))
                .corner_radius(theme::CORNER_RADIUS)
                .min_size(egui::vec2(
                    theme::MODE_BUTTON_SIZE[0],
                    theme::MODE_BUTTON_SIZE[1],
                ));
            if highlighted {
                let border = if state.blink_on {
                    theme::YELLOW
                } else {
                    theme::mode_colour(mode)
                };
                button = button.stroke(egui::Stroke::new(3.0, border));
            }
            if ui.add(button).clicked() {
                tracing::debug!(mode = %mode, "Mode panel clicked");
                state.requested_mode = Some(mode);
            }
        }
    });
}
