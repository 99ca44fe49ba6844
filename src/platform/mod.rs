// MMDVM Monitor - platform/mod.rs
//
// Platform layer: config directories, config.toml, and the MMDVMHost
// configuration file.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod mmdvmhost;
