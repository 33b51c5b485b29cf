// Matrix Tools Hub - core/mod.rs
//
// Core business logic layer: configuration, data model, file-list state.
// Must NOT depend on: ui, app, or egui.

pub mod config;
pub mod filelist;
pub mod mime;
pub mod model;
