// Matrix Tools Hub - ui/panels/header.rs
//
// Top bar: title, tagline, per-tool navigation, and mode badges.

use crate::app::state::AppState;
use crate::core::model::ToolKind;
use crate::ui::theme;
use crate::util::constants;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&state.config.ui.title)
                .size(22.0)
                .strong()
                .color(theme::MATRIX_GREEN),
        );
        ui.weak(&state.config.ui.tagline);

        ui.separator();

        for &tool in ToolKind::all() {
            if !tool_enabled(state, tool) {
                continue;
            }
            let title = state.config.ui.sections.for_tool(tool).title.clone();
            if ui.button(title).clicked() {
                state.scroll_target = Some(tool);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.config.dev.simulate_api_calls {
                ui.label(
                    egui::RichText::new(" SIM MODE ")
                        .strong()
                        .color(theme::INFO_CYAN)
                        .background_color(egui::Color32::from_rgba_premultiplied(0, 60, 60, 40)),
                )
                .on_hover_text("Conversions are answered by the simulated backend.");
            } else if !state.api_report.is_fully_configured() {
                let missing: Vec<&str> =
                    state.api_report.missing.iter().map(|t| t.label()).collect();
                ui.label(
                    egui::RichText::new(" \u{26a0} API ")
                        .strong()
                        .color(theme::ERROR_RED),
                )
                .on_hover_text(format!("Unconfigured endpoints: {}", missing.join(", ")));
            }
            ui.weak(format!("v{}", constants::APP_VERSION));
        });
    });
}

fn tool_enabled(state: &AppState, tool: ToolKind) -> bool {
    let features = &state.config.features;
    match tool {
        ToolKind::TextToAudio => features.text_to_audio,
        ToolKind::ImageToPdf => features.image_to_pdf,
        ToolKind::PdfMerge => features.pdf_merge,
    }
}
