// Matrix Tools Hub - core/model.rs
//
// Data model shared between the state, job, and API layers.
// All entities are ephemeral and in-memory; nothing here is persisted.

use std::path::PathBuf;

/// The three conversion tools offered by the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    TextToAudio,
    ImageToPdf,
    PdfMerge,
}

impl ToolKind {
    /// All tools, in display order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::TextToAudio,
            ToolKind::ImageToPdf,
            ToolKind::PdfMerge,
        ]
    }

    /// Human-readable label, used in error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::TextToAudio => "text-to-audio",
            ToolKind::ImageToPdf => "image-to-PDF",
            ToolKind::PdfMerge => "PDF merge",
        }
    }
}

/// A file the user has selected for upload. Held in memory only; the
/// content stays on disk until the request is actually built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// Display name (the final path component).
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// Options for one text-to-audio submission, captured at click time.
#[derive(Debug, Clone)]
pub struct TextToAudioRequest {
    pub text: String,
    pub voice: String,
    pub speed: f32,
    pub format: String,
}

/// Options for one image-to-PDF submission.
#[derive(Debug, Clone)]
pub struct ImageToPdfRequest {
    pub files: Vec<SelectedFile>,
    pub quality: String,
    pub orientation: String,
}

/// Options for one PDF-merge submission.
#[derive(Debug, Clone)]
pub struct PdfMergeRequest {
    pub files: Vec<SelectedFile>,
    pub filename: String,
}

/// A submission for any tool, handed from the state layer to the job runner.
#[derive(Debug, Clone)]
pub enum ToolRequest {
    TextToAudio(TextToAudioRequest),
    ImageToPdf(ImageToPdfRequest),
    PdfMerge(PdfMergeRequest),
}

impl ToolRequest {
    pub fn tool(&self) -> ToolKind {
        match self {
            ToolRequest::TextToAudio(_) => ToolKind::TextToAudio,
            ToolRequest::ImageToPdf(_) => ToolKind::ImageToPdf,
            ToolRequest::PdfMerge(_) => ToolKind::PdfMerge,
        }
    }
}

/// Reference to binary output content. The content is only materialised
/// on disk when the user triggers a download.
#[derive(Debug, Clone)]
pub enum ResourceLocator {
    /// Remote URL returned by a real backend.
    Url(String),

    /// In-memory payload produced by the simulated backend.
    Bytes { data: Vec<u8>, mime: String },
}

impl ResourceLocator {
    /// Short human-readable description for the output row.
    pub fn describe(&self) -> String {
        match self {
            ResourceLocator::Url(url) => url.clone(),
            ResourceLocator::Bytes { data, mime } => {
                format!(
                    "{} ({})",
                    mime,
                    crate::core::config::format_file_size(data.len() as u64)
                )
            }
        }
    }
}

/// Successful outcome of a conversion call.
#[derive(Debug, Clone)]
pub struct ToolResponse {
    pub resource: ResourceLocator,
    /// Name pre-filled in the save dialog.
    pub suggested_name: String,
    /// Message reported by the backend.
    pub message: String,
}
