// Matrix Tools Hub - app/state.rs
//
// Per-tool UI state and the submission/completion flow logic.
// Owned by the eframe::App implementation; holds no DOM/widget handles,
// so every transition here is testable without a rendering environment.

use crate::app::job::JobEvent;
use crate::app::notify::NotificationCenter;
use crate::core::config::{ApiConfigReport, HubConfig};
use crate::core::filelist::{FileList, RejectReason, Rejection, UploadPolicy};
use crate::core::model::{
    ImageToPdfRequest, PdfMergeRequest, ResourceLocator, SelectedFile, TextToAudioRequest,
    ToolKind, ToolRequest, ToolResponse,
};
use crate::util::error::ResourceError;
use std::path::Path;
use std::time::Duration;

/// Lifecycle of one tool panel.
#[derive(Debug, Default)]
pub enum ToolStatus {
    #[default]
    Idle,
    /// A call is in flight; the panel shows a spinner.
    Loading,
    /// The last call succeeded; the panel shows the output row.
    Ready(ToolResponse),
}

impl ToolStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ToolStatus::Loading)
    }
}

/// Inputs and status of the text-to-audio panel.
#[derive(Debug)]
pub struct TextToAudioState {
    pub text: String,
    pub voice: String,
    pub speed: f32,
    pub status: ToolStatus,
}

/// Inputs and status of the image-to-PDF panel.
#[derive(Debug)]
pub struct ImageToPdfState {
    pub files: FileList,
    pub quality: String,
    pub orientation: String,
    pub status: ToolStatus,
}

/// Inputs and status of the PDF-merge panel.
#[derive(Debug)]
pub struct PdfMergeState {
    pub files: FileList,
    pub filename: String,
    pub status: ToolStatus,
}

/// Top-level application state.
pub struct AppState {
    pub config: HubConfig,

    pub tts: TextToAudioState,
    pub image: ImageToPdfState,
    pub merge: PdfMergeState,

    pub notifications: NotificationCenter,

    /// Placeholder scan performed once at startup.
    pub api_report: ApiConfigReport,

    /// Panel the header navigation wants scrolled into view this frame.
    pub scroll_target: Option<ToolKind>,

    /// Download requested by an output row; the GUI shell resolves it
    /// through a save dialog.
    pub pending_download: Option<(ResourceLocator, String)>,

    /// Status bar text.
    pub status_message: String,

    pub debug_mode: bool,
}

impl AppState {
    pub fn new(config: HubConfig, debug_mode: bool) -> Self {
        let api_report = config.validate_api_config();
        let lifetime = Duration::from_millis(config.settings.notifications.duration_ms);
        let defaults = &config.settings.defaults;

        Self {
            tts: TextToAudioState {
                text: String::new(),
                voice: defaults.text_to_audio.voice.clone(),
                speed: defaults.text_to_audio.speed,
                status: ToolStatus::Idle,
            },
            image: ImageToPdfState {
                files: FileList::new(),
                quality: defaults.image_to_pdf.quality.clone(),
                orientation: defaults.image_to_pdf.orientation.clone(),
                status: ToolStatus::Idle,
            },
            merge: PdfMergeState {
                files: FileList::new(),
                filename: defaults.pdf_merge.filename.clone(),
                status: ToolStatus::Idle,
            },
            notifications: NotificationCenter::new(lifetime),
            api_report,
            scroll_target: None,
            pending_download: None,
            status_message: "Ready.".to_string(),
            debug_mode,
            config,
        }
    }

    // -------------------------------------------------------------------------
    // File selection
    // -------------------------------------------------------------------------

    /// Add candidates to the image tool, reporting each rejection.
    pub fn add_image_files(&mut self, candidates: Vec<SelectedFile>) {
        let policy = UploadPolicy::images(&self.config.settings.upload);
        let rejected = self.image.files.add_files(candidates, &policy);
        self.report_rejections(rejected);
    }

    /// Add candidates to the merge tool, reporting each rejection.
    pub fn add_pdf_files(&mut self, candidates: Vec<SelectedFile>) {
        let policy = UploadPolicy::pdfs(&self.config.settings.upload);
        let rejected = self.merge.files.add_files(candidates, &policy);
        self.report_rejections(rejected);
    }

    fn report_rejections(&mut self, rejected: Vec<Rejection>) {
        for rejection in rejected {
            let errors = &self.config.ui.messages.errors;
            let message = match rejection.reason {
                RejectReason::TooLarge { .. } => {
                    format!("{} ({})", errors.file_too_large, rejection.name)
                }
                RejectReason::UnsupportedType { .. } => {
                    format!("{} ({})", errors.invalid_file_type, rejection.name)
                }
                RejectReason::TooMany { .. } => rejection.to_string(),
            };
            self.notifications.error(message);
        }
    }

    /// Image conversion needs at least one file.
    pub fn can_convert(&self) -> bool {
        !self.image.files.is_empty()
    }

    /// Merging needs at least two files.
    pub fn can_merge(&self) -> bool {
        self.merge.files.len() >= 2
    }

    // -------------------------------------------------------------------------
    // Submissions
    // -------------------------------------------------------------------------

    /// Validate the text-to-audio inputs and, if acceptable, flip the panel
    /// to Loading and hand back a request for the job runner.
    ///
    /// On a validation failure, an error notification is pushed and the
    /// panel stays in its current state.
    pub fn try_submit_text_to_audio(&mut self) -> Option<ToolRequest> {
        let text = self.tts.text.trim();
        if text.is_empty() {
            let message = self.config.ui.messages.errors.no_text.clone();
            self.notifications.error(message);
            return None;
        }

        let request = TextToAudioRequest {
            text: text.to_string(),
            voice: self.tts.voice.clone(),
            speed: self.tts.speed,
            format: self.config.settings.defaults.text_to_audio.format.clone(),
        };
        self.tts.status = ToolStatus::Loading;
        Some(ToolRequest::TextToAudio(request))
    }

    pub fn try_submit_image_to_pdf(&mut self) -> Option<ToolRequest> {
        if self.image.files.is_empty() {
            let message = self.config.ui.messages.errors.no_images.clone();
            self.notifications.error(message);
            return None;
        }

        let request = ImageToPdfRequest {
            files: self.image.files.to_vec(),
            quality: self.image.quality.clone(),
            orientation: self.image.orientation.clone(),
        };
        self.image.status = ToolStatus::Loading;
        Some(ToolRequest::ImageToPdf(request))
    }

    pub fn try_submit_pdf_merge(&mut self) -> Option<ToolRequest> {
        if self.merge.files.len() < 2 {
            let message = self.config.ui.messages.errors.not_enough_pdfs.clone();
            self.notifications.error(message);
            return None;
        }

        let filename = if self.merge.filename.trim().is_empty() {
            self.config.settings.defaults.pdf_merge.filename.clone()
        } else {
            self.merge.filename.trim().to_string()
        };

        let request = PdfMergeRequest {
            files: self.merge.files.to_vec(),
            filename,
        };
        self.merge.status = ToolStatus::Loading;
        Some(ToolRequest::PdfMerge(request))
    }

    // -------------------------------------------------------------------------
    // Completions
    // -------------------------------------------------------------------------

    /// Apply one background-job completion: flip the panel to Ready or back
    /// to Idle, and push the matching notification.
    ///
    /// The selected files deliberately persist after a conversion, matching
    /// the tool's original behaviour.
    pub fn apply_job_event(&mut self, event: JobEvent) {
        let status = match event.tool {
            ToolKind::TextToAudio => &mut self.tts.status,
            ToolKind::ImageToPdf => &mut self.image.status,
            ToolKind::PdfMerge => &mut self.merge.status,
        };

        match event.outcome {
            Ok(response) => {
                *status = ToolStatus::Ready(response);
                let message = self
                    .config
                    .ui
                    .messages
                    .success
                    .for_tool(event.tool)
                    .to_string();
                self.notifications.success(message);
                self.status_message = "Ready.".to_string();
            }
            Err(e) => {
                *status = ToolStatus::Idle;
                let message = format!("Error: {e}");
                self.status_message = message.clone();
                self.notifications.error(message);
            }
        }
    }

    /// Record the outcome of a resolved download request.
    ///
    /// The request is consumed either way; after a failure the panel's
    /// output row still offers the download for a manual retry.
    pub fn finish_download(&mut self, dest: &Path, outcome: Result<(), ResourceError>) {
        match outcome {
            Ok(()) => {
                self.notifications
                    .success(format!("Saved to {}", dest.display()));
                self.status_message = format!("Saved {}", dest.display());
            }
            Err(e) => {
                tracing::warn!(dest = %dest.display(), error = %e, "Download failed");
                self.notifications.error(format!("Download failed: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notify::NotificationKind;
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::new(HubConfig::default(), false)
    }

    fn file(name: &str, mime: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size: 1_000,
            mime: mime.to_string(),
        }
    }

    fn fake_response() -> ToolResponse {
        ToolResponse {
            resource: ResourceLocator::Bytes {
                data: vec![1, 2, 3],
                mime: "application/pdf".to_string(),
            },
            suggested_name: "out.pdf".to_string(),
            message: "done".to_string(),
        }
    }

    #[test]
    fn test_empty_text_never_submits() {
        let mut state = state();
        state.tts.text = "   \n\t ".to_string();
        assert!(state.try_submit_text_to_audio().is_none());
        assert!(!state.tts.status.is_loading());

        let banner = state.notifications.iter().next().unwrap();
        assert_eq!(banner.kind, NotificationKind::Error);
        assert_eq!(banner.message, "Please enter some text to convert");
    }

    #[test]
    fn test_valid_text_submits_trimmed_request() {
        let mut state = state();
        state.tts.text = "  follow the white rabbit  ".to_string();
        state.tts.speed = 1.5;

        let request = state.try_submit_text_to_audio().unwrap();
        match request {
            ToolRequest::TextToAudio(r) => {
                assert_eq!(r.text, "follow the white rabbit");
                assert_eq!(r.voice, "neural");
                assert_eq!(r.format, "mp3");
            }
            other => panic!("unexpected request {other:?}"),
        }
        assert!(state.tts.status.is_loading());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_zero_images_blocks_conversion() {
        let mut state = state();
        assert!(!state.can_convert());
        assert!(state.try_submit_image_to_pdf().is_none());
        assert_eq!(
            state.notifications.iter().next().unwrap().message,
            "Please select images to convert"
        );
    }

    #[test]
    fn test_one_image_enables_conversion() {
        let mut state = state();
        state.add_image_files(vec![file("a.png", "image/png")]);
        assert!(state.can_convert());
        assert!(state.try_submit_image_to_pdf().is_some());
        assert!(state.image.status.is_loading());
    }

    #[test]
    fn test_single_pdf_keeps_merge_disabled() {
        let mut state = state();
        state.add_pdf_files(vec![file("a.pdf", "application/pdf")]);
        assert!(!state.can_merge());
        assert!(state.try_submit_pdf_merge().is_none());
        assert_eq!(
            state.notifications.iter().next().unwrap().message,
            "Please select at least 2 PDF files to merge"
        );
    }

    #[test]
    fn test_two_pdfs_enable_merge() {
        let mut state = state();
        state.add_pdf_files(vec![
            file("a.pdf", "application/pdf"),
            file("b.pdf", "application/pdf"),
        ]);
        assert!(state.can_merge());
        let request = state.try_submit_pdf_merge().unwrap();
        match request {
            ToolRequest::PdfMerge(r) => {
                assert_eq!(r.files.len(), 2);
                assert_eq!(r.filename, "merged-document.pdf");
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_blank_merge_filename_falls_back_to_default() {
        let mut state = state();
        state.merge.filename = "   ".to_string();
        state.add_pdf_files(vec![
            file("a.pdf", "application/pdf"),
            file("b.pdf", "application/pdf"),
        ]);
        match state.try_submit_pdf_merge().unwrap() {
            ToolRequest::PdfMerge(r) => assert_eq!(r.filename, "merged-document.pdf"),
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_remove_reindexes_and_disables_below_threshold() {
        let mut state = state();
        state.add_pdf_files(vec![
            file("a.pdf", "application/pdf"),
            file("b.pdf", "application/pdf"),
            file("c.pdf", "application/pdf"),
        ]);
        assert!(state.can_merge());

        state.merge.files.remove(0);
        assert_eq!(state.merge.files.len(), 2);
        assert_eq!(state.merge.files.entries()[0].name, "b.pdf");
        assert!(state.can_merge());

        state.merge.files.remove(1);
        assert_eq!(state.merge.files.entries()[0].name, "b.pdf");
        assert!(!state.can_merge());
    }

    #[test]
    fn test_rejected_upload_uses_configured_message() {
        let mut state = state();
        state.add_image_files(vec![file("notes.txt", "text/plain")]);
        assert!(state.image.files.is_empty());
        let banner = state.notifications.iter().next().unwrap();
        assert!(banner
            .message
            .starts_with("Invalid file type. Please select supported files."));
        assert!(banner.message.contains("notes.txt"));
    }

    #[test]
    fn test_success_event_transitions_to_ready() {
        let mut state = state();
        state.image.status = ToolStatus::Loading;
        state.apply_job_event(JobEvent {
            tool: ToolKind::ImageToPdf,
            outcome: Ok(fake_response()),
        });

        assert!(matches!(state.image.status, ToolStatus::Ready(_)));
        let banner = state.notifications.iter().next().unwrap();
        assert_eq!(banner.kind, NotificationKind::Success);
        assert_eq!(banner.message, "PDF created successfully!");
        assert_eq!(state.status_message, "Ready.");
    }

    #[test]
    fn test_failure_event_returns_to_idle_with_error() {
        let mut state = state();
        state.tts.status = ToolStatus::Loading;
        state.apply_job_event(JobEvent {
            tool: ToolKind::TextToAudio,
            outcome: Err(crate::util::error::ApiError::Status {
                tool: "text-to-audio",
                status: 503,
            }),
        });

        assert!(matches!(state.tts.status, ToolStatus::Idle));
        let banner = state.notifications.iter().next().unwrap();
        assert_eq!(banner.kind, NotificationKind::Error);
        assert!(banner.message.starts_with("Error: "));
        assert!(banner.message.contains("503"));
        // The status bar keeps showing the failure rather than "Ready.".
        assert!(state.status_message.starts_with("Error: "));
    }

    #[test]
    fn test_failed_download_is_terminal_for_that_click() {
        let mut state = state();
        state.tts.status = ToolStatus::Ready(fake_response());

        let err = ResourceError::Io {
            path: PathBuf::from("/nope/out.mp3"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        state.finish_download(Path::new("/nope/out.mp3"), Err(err));

        // Nothing is queued for an automatic retry; the output row's
        // download action is the only way to try again.
        assert!(state.pending_download.is_none());
        assert!(matches!(state.tts.status, ToolStatus::Ready(_)));
        let banner = state.notifications.iter().next().unwrap();
        assert_eq!(banner.kind, NotificationKind::Error);
        assert!(banner.message.starts_with("Download failed"));
    }

    #[test]
    fn test_successful_download_updates_status_line() {
        let mut state = state();
        state.finish_download(Path::new("/tmp/out.pdf"), Ok(()));

        assert!(state.pending_download.is_none());
        assert_eq!(state.status_message, "Saved /tmp/out.pdf");
        let banner = state.notifications.iter().next().unwrap();
        assert_eq!(banner.kind, NotificationKind::Success);
    }

    #[test]
    fn test_files_persist_after_successful_conversion() {
        let mut state = state();
        state.add_image_files(vec![file("a.png", "image/png")]);
        state.try_submit_image_to_pdf().unwrap();
        state.apply_job_event(JobEvent {
            tool: ToolKind::ImageToPdf,
            outcome: Ok(fake_response()),
        });
        assert_eq!(state.image.files.len(), 1);
    }
}
