// MMDVM Monitor - ui/theme.rs
//
// LCARS colour scheme, mode colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Mode;
use egui::Color32;

pub const ORANGE: Color32 = Color32::from_rgb(255, 153, 102);
pub const PEACH: Color32 = Color32::from_rgb(255, 204, 153);
pub const PINK: Color32 = Color32::from_rgb(255, 153, 178);
pub const PURPLE: Color32 = Color32::from_rgb(204, 153, 255);
pub const BLUE: Color32 = Color32::from_rgb(153, 204, 255);
pub const RED: Color32 = Color32::from_rgb(255, 102, 102);
pub const YELLOW: Color32 = Color32::from_rgb(255, 204, 102);
pub const TEAL: Color32 = Color32::from_rgb(102, 204, 204);
pub const GREY: Color32 = Color32::from_rgb(180, 180, 180);
pub const PANEL_BG: Color32 = Color32::from_rgb(40, 40, 40);

/// Colour for a given mode.
pub fn mode_colour(mode: Mode) -> Color32 {
    match mode {
        Mode::Dmr => ORANGE,
        Mode::DStar => BLUE,
        Mode::Ysf => PINK,
        Mode::Nxdn => RED,
        Mode::P25 => PURPLE,
    }
}

/// Layout constants.
pub const MODE_BUTTON_SIZE: [f32; 2] = [140.0, 40.0];
pub const SIDE_PANEL_WIDTH: f32 = 300.0;
pub const EVENT_ROW_HEIGHT: f32 = 30.0;
pub const CORNER_RADIUS: f32 = 15.0;
