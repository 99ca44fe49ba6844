// MMDVM Monitor - ui/panels/event_log.rs
//
// Last-heard list. Shows the visible history window as
// "<timestamp>: <callsign - destination>" rows coloured by mode. Rows of the
// mode currently transmitting flash yellow.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the event log (central panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("EVENT LOG")
                .size(26.0)
                .strong()
                .color(theme::ORANGE),
        );
    });
    ui.separator();

    if state.snapshot.visible.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No stations heard yet.").color(theme::GREY));
        });
        return;
    }

    for entry in &state.snapshot.visible {
        let colour = if state.row_flashing(entry.mode) {
            theme::YELLOW
        } else {
            theme::mode_colour(entry.mode)
        };
        ui.add_sized(
            [ui.available_width(), theme::EVENT_ROW_HEIGHT],
            egui::Label::new(
                egui::RichText::new(format!("{}: {}", entry.timestamp, entry.display_line))
                    .size(18.0)
                    .color(colour),
            )
            .truncate(),
        );
    }
}
