// MMDVM Monitor - core/mod.rs
//
// Core business logic layer: line classification, history, session state.
// Must NOT depend on: ui, platform, app, or any filesystem access.

pub mod extractor;
pub mod history;
pub mod model;
pub mod session;
