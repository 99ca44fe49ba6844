// MMDVM Monitor - ui/panels/screensaver.rs
//
// Standby view shown while the session is idle. Text pulses slowly.

use crate::ui::theme;

/// Render the standby screen over the whole window.
pub fn render(ui: &mut egui::Ui, elapsed_secs: f64) {
    let pulse = ((elapsed_secs.sin() + 1.0) / 2.0) as f32;
    let alpha = (100.0 + 155.0 * pulse) as u8;
    let fade = |c: egui::Color32| egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha);

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 50.0).max(0.0));
        ui.label(
            egui::RichText::new("STARFLEET COMPUTER SYSTEM")
                .size(40.0)
                .strong()
                .color(fade(theme::ORANGE)),
        );
        ui.add_space(20.0);
        ui.label(
            egui::RichText::new("MONITOR STANDBY")
                .size(40.0)
                .strong()
                .color(fade(theme::BLUE)),
        );
    });
}
