// Matrix Tools Hub - ui/panels/image_to_pdf.rs
//
// Image-to-PDF tool panel: picker button, preview list with per-row
// removal, quality/orientation options, and the loading/output area.

use crate::app::state::{AppState, ToolStatus};
use crate::core::mime;
use crate::core::model::ToolRequest;
use crate::ui::panels::file_rows;
use crate::ui::theme;

const QUALITIES: &[&str] = &["high", "medium", "low"];
const ORIENTATIONS: &[&str] = &["portrait", "landscape"];

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<ToolRequest> {
    let section = state.config.ui.sections.image_to_pdf.clone();
    let mut request = None;

    ui.heading(egui::RichText::new(section.title).color(theme::MATRIX_GREEN));
    ui.weak(section.description);
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui.button("\u{1f4c1} Add Images\u{2026}").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("Images", &["jpg", "jpeg", "png", "gif", "bmp", "webp"])
                .pick_files()
            {
                let mut candidates = Vec::new();
                for path in paths {
                    match mime::selected_file_from_path(&path) {
                        Ok(file) => candidates.push(file),
                        Err(e) => {
                            tracing::warn!(path = %path.display(), error = %e, "Cannot read picked file");
                            state
                                .notifications
                                .error(format!("Cannot read '{}': {e}", path.display()));
                        }
                    }
                }
                state.add_image_files(candidates);
            }
        }
        ui.weak("or drop image files onto the window");
    });

    if !state.image.files.is_empty() {
        ui.add_space(4.0);
        if let Some(index) = file_rows::render(ui, "image_preview", state.image.files.entries()) {
            state.image.files.remove(index);
        }
        ui.weak(format!(
            "{} file(s), {}",
            state.image.files.len(),
            crate::core::config::format_file_size(state.image.files.total_size())
        ));
    }

    ui.horizontal(|ui| {
        ui.label("Quality:");
        egui::ComboBox::from_id_salt("pdf_quality")
            .selected_text(state.image.quality.clone())
            .show_ui(ui, |ui| {
                for &quality in QUALITIES {
                    ui.selectable_value(&mut state.image.quality, quality.to_string(), quality);
                }
            });

        ui.separator();

        ui.label("Orientation:");
        egui::ComboBox::from_id_salt("pdf_orientation")
            .selected_text(state.image.orientation.clone())
            .show_ui(ui, |ui| {
                for &orientation in ORIENTATIONS {
                    ui.selectable_value(
                        &mut state.image.orientation,
                        orientation.to_string(),
                        orientation,
                    );
                }
            });
    });

    ui.add_space(6.0);

    let can_convert = state.can_convert();
    if ui
        .add_enabled(can_convert, egui::Button::new(section.button_text))
        .clicked()
    {
        request = state.try_submit_image_to_pdf();
    }

    match &state.image.status {
        ToolStatus::Idle => {}
        ToolStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Converting images...");
            });
        }
        ToolStatus::Ready(response) => {
            let resource = response.resource.clone();
            let name = response.suggested_name.clone();
            let detail = resource.describe();
            ui.horizontal(|ui| {
                ui.colored_label(theme::MATRIX_GREEN, "PDF ready");
                ui.weak(detail);
                if ui.button("\u{2b07} Download").clicked() {
                    state.pending_download = Some((resource, name));
                }
            });
        }
    }

    request
}
