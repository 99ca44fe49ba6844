// MMDVM Monitor - app/mod.rs
//
// Application layer: log tailing, the tick, scheduling, renderer-side state.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod monitor;
pub mod scheduler;
pub mod state;
pub mod tail;
