// Matrix Tools Hub - ui/panels/file_rows.rs
//
// Shared preview list for the image and PDF tools: one row per selected
// file with name, formatted size, and a Remove action.

use crate::core::config::format_file_size;
use crate::core::model::SelectedFile;

/// Render the file rows; returns the index the user asked to remove.
pub fn render(ui: &mut egui::Ui, id_salt: &str, files: &[SelectedFile]) -> Option<usize> {
    let mut remove_index = None;

    egui::Grid::new(id_salt)
        .num_columns(3)
        .spacing([12.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for (index, file) in files.iter().enumerate() {
                ui.label(&file.name);
                ui.weak(format_file_size(file.size));
                if ui.small_button("Remove").clicked() {
                    remove_index = Some(index);
                }
                ui.end_row();
            }
        });

    remove_index
}
