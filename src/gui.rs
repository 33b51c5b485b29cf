// Matrix Tools Hub - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the tool panels and manages the conversion lifecycle.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app::api::RemoteApi;
use crate::app::download;
use crate::app::job::JobRunner;
use crate::app::state::AppState;
use crate::core::mime;
use crate::core::model::{SelectedFile, ToolKind};
use crate::ui;
use crate::ui::rain::MatrixRain;
use crate::util::constants;

/// The Matrix Tools Hub application.
pub struct MatrixHubApp {
    pub state: AppState,
    jobs: JobRunner,
    api: Arc<dyn RemoteApi>,
    rain: Option<MatrixRain>,
}

impl MatrixHubApp {
    /// Create a new application instance with the given state and backend.
    pub fn new(state: AppState, api: Arc<dyn RemoteApi>) -> Self {
        let rain = if state.config.features.matrix_rain && state.config.settings.matrix_rain.enabled
        {
            Some(MatrixRain::new(&state.config.settings.matrix_rain))
        } else {
            None
        };

        Self {
            state,
            jobs: JobRunner::new(),
            api,
            rain,
        }
    }

    /// Route files dropped anywhere on the window to the matching tool by
    /// detected MIME type. Unrecognised files fall through to the image
    /// tool's rejection path so the user still gets a notification.
    fn handle_dropped_files(&mut self, dropped: Vec<egui::DroppedFile>) {
        let mut images: Vec<SelectedFile> = Vec::new();
        let mut pdfs: Vec<SelectedFile> = Vec::new();

        for file in dropped {
            let Some(path) = file.path else {
                // Paths are always present on native targets.
                continue;
            };
            match mime::selected_file_from_path(&path) {
                Ok(selected) => {
                    if self.state.config.is_allowed_pdf_type(&selected.mime) {
                        pdfs.push(selected);
                    } else {
                        images.push(selected);
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Cannot read dropped file");
                    self.state
                        .notifications
                        .error(format!("Cannot read '{}': {e}", path.display()));
                }
            }
        }

        if !images.is_empty() {
            self.state.add_image_files(images);
        }
        if !pdfs.is_empty() {
            self.state.add_pdf_files(pdfs);
        }
    }

    /// Resolve a requested download through a save dialog.
    ///
    /// The request is consumed whether it succeeds or not: a cancelled
    /// dialog or a failed save is terminal for that click, and the output
    /// row's Download button stays available for a manual retry.
    fn handle_pending_download(&mut self) {
        let Some((locator, suggested_name)) = self.state.pending_download.take() else {
            return;
        };

        let Some(dest) = rfd::FileDialog::new()
            .set_file_name(&suggested_name)
            .save_file()
        else {
            return;
        };

        let outcome = download::save_resource(&locator, &dest);
        self.state.finish_download(&dest, outcome);
    }

    fn any_loading(&self) -> bool {
        self.state.tts.status.is_loading()
            || self.state.image.status.is_loading()
            || self.state.merge.status.is_loading()
    }
}

impl eframe::App for MatrixHubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain background-job completions.
        let events = self.jobs.poll(constants::MAX_JOB_EVENTS_PER_FRAME);
        let had_events = !events.is_empty();
        for event in events {
            self.state.apply_job_event(event);
        }

        // Age out notification banners.
        self.state.notifications.prune(Instant::now());

        // Files dropped onto the window.
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.handle_dropped_files(dropped);
        }

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::header::render(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.any_loading() {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let selected =
                        self.state.image.files.len() + self.state.merge.files.len();
                    if selected > 0 {
                        ui.label(format!("{selected} file(s) selected"));
                    }
                });
            });
        });

        // Central panel: rain backdrop behind a centred, scrollable column of
        // tool panels.
        let scroll_target = self.state.scroll_target.take();
        let mut requests = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(rain) = &mut self.rain {
                rain.paint(ui.painter(), ui.max_rect());
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH);
                        ui.add_space(ui::theme::SECTION_SPACING);

                        for &tool in ToolKind::all() {
                            let enabled = match tool {
                                ToolKind::TextToAudio => self.state.config.features.text_to_audio,
                                ToolKind::ImageToPdf => self.state.config.features.image_to_pdf,
                                ToolKind::PdfMerge => self.state.config.features.pdf_merge,
                            };
                            if !enabled {
                                continue;
                            }

                            let inner = ui.scope(|ui| match tool {
                                ToolKind::TextToAudio => {
                                    ui::panels::text_to_audio::render(ui, &mut self.state)
                                }
                                ToolKind::ImageToPdf => {
                                    ui::panels::image_to_pdf::render(ui, &mut self.state)
                                }
                                ToolKind::PdfMerge => {
                                    ui::panels::pdf_merge::render(ui, &mut self.state)
                                }
                            });

                            if scroll_target == Some(tool) {
                                inner.response.scroll_to_me(Some(egui::Align::TOP));
                            }
                            if let Some(request) = inner.inner {
                                requests.push(request);
                            }

                            ui.add_space(ui::theme::SECTION_SPACING);
                            ui.separator();
                            ui.add_space(ui::theme::SECTION_SPACING);
                        }
                    });
                });
        });

        for request in requests {
            self.state.status_message = format!("Running {}...", request.tool().label());
            self.jobs.submit(self.api.clone(), request);
        }

        // Notification stack over everything else.
        ui::panels::notifications::render(ctx, &mut self.state);

        self.handle_pending_download();

        // Repaint scheduling: the rain animates on its own clock, spinners
        // and pending completions need prompt frames, and banner expiry
        // needs an occasional tick.
        if let Some(rain) = &self.rain {
            ctx.request_repaint_after(Duration::from_millis(rain.frame_interval_ms()));
        }
        if had_events || self.any_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else if !self.state.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
