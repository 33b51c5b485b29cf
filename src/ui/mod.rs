// Matrix Tools Hub - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.

pub mod panels;
pub mod rain;
pub mod theme;
