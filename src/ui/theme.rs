// Matrix Tools Hub - ui/theme.rs
//
// Matrix colour palette, notification colours, and layout constants.
// No dependencies on app state or business logic.

use crate::app::notify::NotificationKind;
use egui::Color32;

/// Signature phosphor green.
pub const MATRIX_GREEN: Color32 = Color32::from_rgb(0, 255, 65);

/// Near-black page background.
pub const MATRIX_BG: Color32 = Color32::from_rgb(1, 4, 9);

/// Slightly raised panel background.
pub const PANEL_BG: Color32 = Color32::from_rgb(8, 14, 20);

/// Muted green for body text.
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 210, 170);

/// Error accent.
pub const ERROR_RED: Color32 = Color32::from_rgb(255, 0, 64);

/// Info accent.
pub const INFO_CYAN: Color32 = Color32::from_rgb(0, 255, 255);

/// Layout constants.
pub const CONTENT_MAX_WIDTH: f32 = 720.0;
pub const NOTIFICATION_WIDTH: f32 = 400.0;
pub const SECTION_SPACING: f32 = 28.0;

/// Banner background and text colours for a notification kind.
pub fn notification_colours(kind: NotificationKind) -> (Color32, Color32) {
    match kind {
        NotificationKind::Success => (MATRIX_GREEN, Color32::BLACK),
        NotificationKind::Error => (ERROR_RED, Color32::WHITE),
        NotificationKind::Info => (INFO_CYAN, Color32::BLACK),
    }
}

/// Apply the hub theme to the egui context.
///
/// `dark_mode` off falls back to the stock light visuals with green accents,
/// mirroring the original feature flag.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let mut style = (*ctx.style()).clone();

    // Monospace-forward type, per the terminal aesthetic.
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::monospace(14.0),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::monospace(14.0),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::monospace(20.0),
    );

    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    if dark_mode {
        visuals.panel_fill = MATRIX_BG;
        visuals.window_fill = PANEL_BG;
        visuals.extreme_bg_color = Color32::from_rgb(3, 8, 12);
        visuals.override_text_color = Some(TEXT_DIM);
    }
    visuals.hyperlink_color = MATRIX_GREEN;
    visuals.selection.bg_fill = Color32::from_rgb(0, 90, 30);

    style.visuals = visuals;
    ctx.set_style(style);
}
