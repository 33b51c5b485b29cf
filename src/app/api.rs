// Matrix Tools Hub - app/api.rs
//
// The remote-call seam. The state and job layers only ever see the
// `RemoteApi` trait; which implementation sits behind it is decided once
// at startup from `[dev] simulate_api_calls`.
//
//   - `SimulatedApi`: fixed-delay canned responses, no network I/O.
//   - `HttpApi`: the real call shape, JSON POST for text-to-audio and
//     multipart POST with indexed file fields for the PDF tools.

use crate::core::config::{ApiConfig, SimulationDelays};
use crate::core::model::{
    ImageToPdfRequest, PdfMergeRequest, ResourceLocator, SelectedFile, TextToAudioRequest,
    ToolKind, ToolRequest, ToolResponse,
};
use crate::util::constants;
use crate::util::error::ApiError;
use std::time::Duration;

/// One remote conversion backend. Implementations are called from worker
/// threads, so they may block.
pub trait RemoteApi: Send + Sync {
    fn text_to_audio(&self, request: &TextToAudioRequest) -> Result<ToolResponse, ApiError>;
    fn image_to_pdf(&self, request: &ImageToPdfRequest) -> Result<ToolResponse, ApiError>;
    fn merge_pdfs(&self, request: &PdfMergeRequest) -> Result<ToolResponse, ApiError>;

    /// Dispatch a wrapped request to the matching operation.
    fn call(&self, request: &ToolRequest) -> Result<ToolResponse, ApiError> {
        match request {
            ToolRequest::TextToAudio(r) => self.text_to_audio(r),
            ToolRequest::ImageToPdf(r) => self.image_to_pdf(r),
            ToolRequest::PdfMerge(r) => self.merge_pdfs(r),
        }
    }
}

// =============================================================================
// Simulated backend
// =============================================================================

/// Placeholder backend: waits the configured per-tool delay on the calling
/// worker thread, then answers with a small generated payload.
pub struct SimulatedApi {
    delays: SimulationDelays,
}

impl SimulatedApi {
    pub fn new(delays: SimulationDelays) -> Self {
        Self { delays }
    }

    fn wait(&self, tool: ToolKind) {
        let delay = self.delays.for_tool(tool);
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }
    }
}

impl RemoteApi for SimulatedApi {
    fn text_to_audio(&self, request: &TextToAudioRequest) -> Result<ToolResponse, ApiError> {
        tracing::info!(
            voice = %request.voice,
            speed = request.speed,
            chars = request.text.len(),
            "Simulated text-to-audio call"
        );
        self.wait(ToolKind::TextToAudio);
        Ok(ToolResponse {
            resource: ResourceLocator::Bytes {
                data: simulated_wav(),
                mime: "audio/wav".to_string(),
            },
            suggested_name: constants::DEFAULT_AUDIO_FILENAME.to_string(),
            message: "Audio generated successfully".to_string(),
        })
    }

    fn image_to_pdf(&self, request: &ImageToPdfRequest) -> Result<ToolResponse, ApiError> {
        tracing::info!(
            files = request.files.len(),
            quality = %request.quality,
            orientation = %request.orientation,
            "Simulated image-to-PDF call"
        );
        self.wait(ToolKind::ImageToPdf);
        Ok(ToolResponse {
            resource: ResourceLocator::Bytes {
                data: simulated_pdf("simulated converted images"),
                mime: "application/pdf".to_string(),
            },
            suggested_name: constants::DEFAULT_PDF_FILENAME.to_string(),
            message: "PDF created successfully".to_string(),
        })
    }

    fn merge_pdfs(&self, request: &PdfMergeRequest) -> Result<ToolResponse, ApiError> {
        tracing::info!(
            files = request.files.len(),
            filename = %request.filename,
            "Simulated PDF-merge call"
        );
        self.wait(ToolKind::PdfMerge);
        Ok(ToolResponse {
            resource: ResourceLocator::Bytes {
                data: simulated_pdf("simulated merged document"),
                mime: "application/pdf".to_string(),
            },
            suggested_name: request.filename.clone(),
            message: "PDFs merged successfully".to_string(),
        })
    }
}

/// Minimal playable WAV: 8-bit mono PCM, quarter-second square tone.
fn simulated_wav() -> Vec<u8> {
    const SAMPLE_RATE: u32 = 8_000;
    const SAMPLES: usize = 2_000;

    let mut data = Vec::with_capacity(44 + SAMPLES);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&((36 + SAMPLES) as u32).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes()); // byte rate, 8-bit mono
    data.extend_from_slice(&1u16.to_le_bytes()); // block align
    data.extend_from_slice(&8u16.to_le_bytes()); // bits per sample
    data.extend_from_slice(b"data");
    data.extend_from_slice(&(SAMPLES as u32).to_le_bytes());
    for i in 0..SAMPLES {
        // ~500 Hz square tone
        data.push(if (i / 8) % 2 == 0 { 0xb0 } else { 0x50 });
    }
    data
}

/// Stub PDF document, one empty page.
fn simulated_pdf(note: &str) -> Vec<u8> {
    format!(
        "%PDF-1.4\n% {note}\n\
         1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n\
         2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj\n\
         3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >> endobj\n\
         trailer << /Root 1 0 R >>\n\
         %%EOF\n"
    )
    .into_bytes()
}

// =============================================================================
// HTTP backend
// =============================================================================

/// Real backend speaking the intended remote call shape over HTTPS.
pub struct HttpApi {
    endpoints: ApiConfig,
    client: reqwest::blocking::Client,
}

impl HttpApi {
    pub fn new(endpoints: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Client { source: e })?;
        Ok(Self { endpoints, client })
    }

    /// Endpoint for `tool`, or `Unconfigured` while the placeholder remains.
    fn endpoint_for(&self, tool: ToolKind) -> Result<&crate::core::config::ApiEndpoint, ApiError> {
        let endpoint = self.endpoints.for_tool(tool);
        if endpoint.is_configured() {
            Ok(endpoint)
        } else {
            Err(ApiError::Unconfigured { tool: tool.label() })
        }
    }

    fn multipart_with_files(
        &self,
        tool: ToolKind,
        files: &[SelectedFile],
        prefix: &str,
    ) -> Result<reqwest::blocking::multipart::Form, ApiError> {
        let mut form = reqwest::blocking::multipart::Form::new();
        for (index, file) in files.iter().enumerate() {
            let data = std::fs::read(&file.path).map_err(|e| ApiError::FileRead {
                path: file.path.clone(),
                source: e,
            })?;
            let part = reqwest::blocking::multipart::Part::bytes(data)
                .file_name(file.name.clone())
                .mime_str(&file.mime)
                .map_err(|e| ApiError::InvalidPayload {
                    tool: tool.label(),
                    reason: format!("invalid MIME type '{}': {e}", file.mime),
                })?;
            form = form.part(part_name(prefix, index), part);
        }
        Ok(form)
    }

    fn decode(
        &self,
        tool: ToolKind,
        response: reqwest::blocking::Response,
        fallback_name: String,
    ) -> Result<ToolResponse, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                tool: tool.label(),
                status: status.as_u16(),
            });
        }

        let payload: ApiPayload = response.json().map_err(|e| ApiError::InvalidPayload {
            tool: tool.label(),
            reason: e.to_string(),
        })?;
        payload.into_response(tool, fallback_name)
    }
}

impl RemoteApi for HttpApi {
    fn text_to_audio(&self, request: &TextToAudioRequest) -> Result<ToolResponse, ApiError> {
        let tool = ToolKind::TextToAudio;
        let endpoint = self.endpoint_for(tool)?;

        let mut builder = self.client.post(&endpoint.endpoint);
        for (name, value) in &endpoint.headers {
            builder = builder.header(name, value);
        }

        tracing::info!(endpoint = %endpoint.endpoint, "Text-to-audio API call");
        let response = builder
            .json(&text_to_audio_body(request))
            .send()
            .map_err(|e| ApiError::Transport {
                tool: tool.label(),
                source: e,
            })?;

        self.decode(tool, response, constants::DEFAULT_AUDIO_FILENAME.to_string())
    }

    fn image_to_pdf(&self, request: &ImageToPdfRequest) -> Result<ToolResponse, ApiError> {
        let tool = ToolKind::ImageToPdf;
        let endpoint = self.endpoint_for(tool)?;

        let form = self
            .multipart_with_files(tool, &request.files, "image")?
            .text("quality", request.quality.clone())
            .text("orientation", request.orientation.clone());

        let mut builder = self.client.post(&endpoint.endpoint);
        for (name, value) in &endpoint.headers {
            // multipart sets its own Content-Type with boundary
            if !name.eq_ignore_ascii_case("content-type") {
                builder = builder.header(name, value);
            }
        }

        tracing::info!(
            endpoint = %endpoint.endpoint,
            files = request.files.len(),
            "Image-to-PDF API call"
        );
        let response = builder
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Transport {
                tool: tool.label(),
                source: e,
            })?;

        self.decode(tool, response, constants::DEFAULT_PDF_FILENAME.to_string())
    }

    fn merge_pdfs(&self, request: &PdfMergeRequest) -> Result<ToolResponse, ApiError> {
        let tool = ToolKind::PdfMerge;
        let endpoint = self.endpoint_for(tool)?;

        let form = self
            .multipart_with_files(tool, &request.files, "pdf")?
            .text("filename", request.filename.clone());

        let mut builder = self.client.post(&endpoint.endpoint);
        for (name, value) in &endpoint.headers {
            if !name.eq_ignore_ascii_case("content-type") {
                builder = builder.header(name, value);
            }
        }

        tracing::info!(
            endpoint = %endpoint.endpoint,
            files = request.files.len(),
            "PDF-merge API call"
        );
        let response = builder
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Transport {
                tool: tool.label(),
                source: e,
            })?;

        self.decode(tool, response, request.filename.clone())
    }
}

// =============================================================================
// Wire shapes
// =============================================================================

/// JSON body of the text-to-audio POST.
pub fn text_to_audio_body(request: &TextToAudioRequest) -> serde_json::Value {
    serde_json::json!({
        "text": request.text,
        "voice": request.voice,
        "speed": request.speed,
        "format": request.format,
    })
}

/// Indexed multipart field name, e.g. `image_0`, `pdf_1`.
pub fn part_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index}")
}

/// Expected response body of all three backends.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiPayload {
    success: bool,
    audio_url: Option<String>,
    pdf_url: Option<String>,
    url: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

impl ApiPayload {
    fn into_response(
        self,
        tool: ToolKind,
        fallback_name: String,
    ) -> Result<ToolResponse, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                tool: tool.label(),
                message: self
                    .error
                    .or(self.message)
                    .unwrap_or_else(|| "no error detail in response".to_string()),
            });
        }

        let url = self
            .audio_url
            .or(self.pdf_url)
            .or(self.url)
            .ok_or_else(|| ApiError::InvalidPayload {
                tool: tool.label(),
                reason: "success response carries no resource URL".to_string(),
            })?;

        Ok(ToolResponse {
            resource: ResourceLocator::Url(url),
            suggested_name: fallback_name,
            message: self.message.unwrap_or_default(),
        })
    }
}
