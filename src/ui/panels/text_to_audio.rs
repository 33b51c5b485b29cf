// Matrix Tools Hub - ui/panels/text_to_audio.rs
//
// Text-to-audio tool panel: text input, voice/speed options, and the
// loading/output area. Returns a request when the user submits.

use crate::app::state::{AppState, ToolStatus};
use crate::core::model::ToolRequest;
use crate::ui::theme;
use crate::util::constants;

/// Voices offered by the picker. The backend receives the value verbatim.
const VOICES: &[&str] = &["neural", "standard", "male", "female"];

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<ToolRequest> {
    let section = state.config.ui.sections.text_to_audio.clone();
    let mut request = None;

    ui.heading(egui::RichText::new(section.title).color(theme::MATRIX_GREEN));
    ui.weak(section.description);
    ui.add_space(6.0);

    ui.add(
        egui::TextEdit::multiline(&mut state.tts.text)
            .hint_text("Enter text to convert to speech...")
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        ui.label("Voice:");
        egui::ComboBox::from_id_salt("tts_voice")
            .selected_text(state.tts.voice.clone())
            .show_ui(ui, |ui| {
                for &voice in VOICES {
                    ui.selectable_value(&mut state.tts.voice, voice.to_string(), voice);
                }
            });

        ui.separator();

        ui.label("Speed:");
        ui.add(
            egui::Slider::new(
                &mut state.tts.speed,
                constants::MIN_TTS_SPEED..=constants::MAX_TTS_SPEED,
            )
            .step_by(0.1)
            .suffix("x"),
        );
    });

    ui.add_space(6.0);

    if ui.button(section.button_text).clicked() {
        request = state.try_submit_text_to_audio();
    }

    match &state.tts.status {
        ToolStatus::Idle => {}
        ToolStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating audio...");
            });
        }
        ToolStatus::Ready(response) => {
            let resource = response.resource.clone();
            let name = response.suggested_name.clone();
            let detail = resource.describe();
            ui.horizontal(|ui| {
                ui.colored_label(theme::MATRIX_GREEN, "Audio ready");
                ui.weak(detail);
                if ui.button("\u{2b07} Download").clicked() {
                    state.pending_download = Some((resource, name));
                }
            });
        }
    }

    request
}
