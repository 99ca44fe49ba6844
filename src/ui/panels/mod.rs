// MMDVM Monitor - ui/panels/mod.rs

pub mod event_log;
pub mod header;
pub mod screensaver;
pub mod status;
