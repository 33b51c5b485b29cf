// Matrix Tools Hub - ui/panels/pdf_merge.rs
//
// PDF-merge tool panel: picker button, merge list with per-row removal,
// output filename, and the loading/output area.

use crate::app::state::{AppState, ToolStatus};
use crate::core::mime;
use crate::core::model::ToolRequest;
use crate::ui::panels::file_rows;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<ToolRequest> {
    let section = state.config.ui.sections.pdf_merge.clone();
    let mut request = None;

    ui.heading(egui::RichText::new(section.title).color(theme::MATRIX_GREEN));
    ui.weak(section.description);
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui.button("\u{1f4c1} Add PDFs\u{2026}").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("PDF documents", &["pdf"])
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
                state.add_pdf_files(candidates);
            }
        }
        ui.weak("merge order follows the list");
    });

    if !state.merge.files.is_empty() {
        ui.add_space(4.0);
        if let Some(index) = file_rows::render(ui, "merge_list", state.merge.files.entries()) {
            state.merge.files.remove(index);
        }
        ui.weak(format!(
            "{} file(s), {}",
            state.merge.files.len(),
            crate::core::config::format_file_size(state.merge.files.total_size())
        ));
    }

    ui.horizontal(|ui| {
        ui.label("Output filename:");
        ui.add(
            egui::TextEdit::singleline(&mut state.merge.filename)
                .desired_width(280.0)
                .hint_text("merged-document.pdf"),
        );
    });

    ui.add_space(6.0);

    let can_merge = state.can_merge();
    if ui
        .add_enabled(can_merge, egui::Button::new(section.button_text))
        .clicked()
    {
        request = state.try_submit_pdf_merge();
    }

    match &state.merge.status {
        ToolStatus::Idle => {}
        ToolStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Merging PDFs...");
            });
        }
        ToolStatus::Ready(response) => {
            let resource = response.resource.clone();
            let name = response.suggested_name.clone();
            let detail = resource.describe();
            ui.horizontal(|ui| {
                ui.colored_label(theme::MATRIX_GREEN, "Merged PDF ready");
                ui.weak(detail);
                if ui.button("\u{2b07} Download").clicked() {
                    state.pending_download = Some((resource, name));
                }
            });
        }
    }

    request
}
