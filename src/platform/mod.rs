// Matrix Tools Hub - platform/mod.rs
//
// Platform integration: config/data directory resolution and config.toml
// loading with startup validation.

pub mod config;
