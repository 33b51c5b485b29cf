// Matrix Tools Hub - app/mod.rs
//
// Application layer: state, job orchestration, remote-call implementations.
// Dependencies: core layer.
// Must NOT depend on: ui, egui.

pub mod api;
pub mod download;
pub mod job;
pub mod notify;
pub mod state;
