// Matrix Tools Hub - core/config.rs
//
// The configuration store: API endpoint placeholders, upload limits,
// per-tool defaults, feature flags, UI copy, and dev/simulation settings.
// Deserialised from config.toml with compiled-in defaults for every field,
// so a missing or partial file always yields a working configuration.

use crate::core::model::ToolKind;
use crate::util::constants;
use std::collections::BTreeMap;

// =============================================================================
// Settings tree
// =============================================================================

/// Root of the configuration tree.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub api: ApiConfig,
    pub settings: Settings,
    pub features: Features,
    pub dev: DevSettings,
    pub ui: UiText,
    pub logging: LoggingSection,
}

/// `[api.*]` sections: one endpoint description per tool.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub text_to_audio: ApiEndpoint,
    pub image_to_pdf: ApiEndpoint,
    pub pdf_merge: ApiEndpoint,
}

impl ApiConfig {
    pub fn for_tool(&self, tool: ToolKind) -> &ApiEndpoint {
        match tool {
            ToolKind::TextToAudio => &self.text_to_audio,
            ToolKind::ImageToPdf => &self.image_to_pdf,
            ToolKind::PdfMerge => &self.pdf_merge,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            text_to_audio: ApiEndpoint {
                endpoint: "YOUR_TEXT_TO_AUDIO_API_ENDPOINT".to_string(),
                key: "YOUR_TEXT_TO_AUDIO_API_KEY".to_string(),
                headers: BTreeMap::from([
                    ("Content-Type".to_string(), "application/json".to_string()),
                    (
                        "Authorization".to_string(),
                        "Bearer YOUR_TEXT_TO_AUDIO_API_KEY".to_string(),
                    ),
                ]),
            },
            image_to_pdf: ApiEndpoint {
                endpoint: "YOUR_IMAGE_TO_PDF_API_ENDPOINT".to_string(),
                key: "YOUR_IMAGE_TO_PDF_API_KEY".to_string(),
                headers: BTreeMap::from([(
                    "Authorization".to_string(),
                    "Bearer YOUR_IMAGE_TO_PDF_API_KEY".to_string(),
                )]),
            },
            pdf_merge: ApiEndpoint {
                endpoint: "YOUR_PDF_MERGE_API_ENDPOINT".to_string(),
                key: "YOUR_PDF_MERGE_API_KEY".to_string(),
                headers: BTreeMap::from([(
                    "Authorization".to_string(),
                    "Bearer YOUR_PDF_MERGE_API_KEY".to_string(),
                )]),
            },
        }
    }
}

/// One remote integration point.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct ApiEndpoint {
    pub endpoint: String,
    pub key: String,
    pub headers: BTreeMap<String, String>,
}

impl ApiEndpoint {
    /// An endpoint is configured once it is non-empty and no longer carries
    /// the placeholder marker.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.endpoint.contains(constants::PLACEHOLDER_MARKER)
    }
}

/// `[settings.*]` sections.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub matrix_rain: MatrixRainSettings,
    pub notifications: NotificationSettings,
    pub upload: UploadLimits,
    pub defaults: ToolDefaults,
}

/// `[settings.matrix_rain]`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct MatrixRainSettings {
    pub enabled: bool,
    pub opacity: f32,
    pub frame_interval_ms: u64,
    pub font_size: f32,
    pub characters: String,
}

impl Default for MatrixRainSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            opacity: constants::DEFAULT_RAIN_OPACITY,
            frame_interval_ms: constants::DEFAULT_RAIN_FRAME_MS,
            font_size: constants::DEFAULT_RAIN_FONT_SIZE,
            characters: constants::DEFAULT_RAIN_GLYPHS.to_string(),
        }
    }
}

/// `[settings.notifications]`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub duration_ms: u64,
    pub position: NotificationPosition,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            duration_ms: constants::DEFAULT_NOTIFICATION_DURATION_MS,
            position: NotificationPosition::TopRight,
        }
    }
}

/// Screen corner where notification banners stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// `[settings.upload]`: constraints enforced before any call.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct UploadLimits {
    pub max_file_size: u64,
    pub max_files: usize,
    pub allowed_image_types: Vec<String>,
    pub allowed_pdf_type: String,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size: constants::DEFAULT_MAX_FILE_SIZE,
            max_files: constants::DEFAULT_MAX_FILES,
            allowed_image_types: constants::DEFAULT_ALLOWED_IMAGE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allowed_pdf_type: constants::ALLOWED_PDF_TYPE.to_string(),
        }
    }
}

/// `[settings.defaults]`: initial option values per tool.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct ToolDefaults {
    pub text_to_audio: TtsDefaults,
    pub image_to_pdf: ImageDefaults,
    pub pdf_merge: MergeDefaults,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct TtsDefaults {
    pub voice: String,
    pub speed: f32,
    pub format: String,
}

impl Default for TtsDefaults {
    fn default() -> Self {
        Self {
            voice: "neural".to_string(),
            speed: 1.0,
            format: "mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ImageDefaults {
    pub quality: String,
    pub orientation: String,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            quality: "high".to_string(),
            orientation: "portrait".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct MergeDefaults {
    pub filename: String,
}

impl Default for MergeDefaults {
    fn default() -> Self {
        Self {
            filename: constants::DEFAULT_MERGE_FILENAME.to_string(),
        }
    }
}

/// `[features]` toggles. Disabled tool panels are not rendered at all.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Features {
    pub text_to_audio: bool,
    pub image_to_pdf: bool,
    pub pdf_merge: bool,
    pub matrix_rain: bool,
    pub notifications: bool,
    pub dark_mode: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            text_to_audio: true,
            image_to_pdf: true,
            pdf_merge: true,
            matrix_rain: true,
            notifications: true,
            dark_mode: true,
        }
    }
}

/// `[dev]` settings: simulation mode and per-tool response delays.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct DevSettings {
    /// When true every conversion is answered by the simulated backend.
    pub simulate_api_calls: bool,
    pub simulation_delay: SimulationDelays,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self {
            simulate_api_calls: true,
            simulation_delay: SimulationDelays::default(),
        }
    }
}

/// Fixed simulated response delays, per tool (milliseconds).
#[derive(Debug, Clone, Copy, serde::Deserialize)]
#[serde(default)]
pub struct SimulationDelays {
    pub text_to_audio: u64,
    pub image_to_pdf: u64,
    pub pdf_merge: u64,
}

impl SimulationDelays {
    pub fn for_tool(&self, tool: ToolKind) -> u64 {
        match tool {
            ToolKind::TextToAudio => self.text_to_audio,
            ToolKind::ImageToPdf => self.image_to_pdf,
            ToolKind::PdfMerge => self.pdf_merge,
        }
    }

    /// Zero delays, used by tests and benchmarks.
    pub fn instant() -> Self {
        Self {
            text_to_audio: 0,
            image_to_pdf: 0,
            pdf_merge: 0,
        }
    }
}

impl Default for SimulationDelays {
    fn default() -> Self {
        Self {
            text_to_audio: constants::DEFAULT_TTS_DELAY_MS,
            image_to_pdf: constants::DEFAULT_IMAGE_DELAY_MS,
            pdf_merge: constants::DEFAULT_MERGE_DELAY_MS,
        }
    }
}

/// `[ui]`: all user-visible copy.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct UiText {
    pub title: String,
    pub tagline: String,
    pub sections: Sections,
    pub messages: Messages,
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            title: constants::APP_NAME.to_string(),
            tagline: constants::APP_TAGLINE.to_string(),
            sections: Sections::default(),
            messages: Messages::default(),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Sections {
    pub text_to_audio: SectionText,
    pub image_to_pdf: SectionText,
    pub pdf_merge: SectionText,
}

impl Sections {
    pub fn for_tool(&self, tool: ToolKind) -> &SectionText {
        match tool {
            ToolKind::TextToAudio => &self.text_to_audio,
            ToolKind::ImageToPdf => &self.image_to_pdf,
            ToolKind::PdfMerge => &self.pdf_merge,
        }
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            text_to_audio: SectionText {
                title: "TEXT TO AUDIO".to_string(),
                description: "Convert text to speech with AI".to_string(),
                button_text: "GENERATE AUDIO".to_string(),
            },
            image_to_pdf: SectionText {
                title: "IMAGE TO PDF".to_string(),
                description: "Transform images to PDF format".to_string(),
                button_text: "CONVERT TO PDF".to_string(),
            },
            pdf_merge: SectionText {
                title: "PDF MERGE".to_string(),
                description: "Combine multiple PDFs into one".to_string(),
                button_text: "MERGE PDFs".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct SectionText {
    pub title: String,
    pub description: String,
    pub button_text: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Messages {
    pub success: SuccessMessages,
    pub errors: ErrorMessages,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct SuccessMessages {
    pub audio_generated: String,
    pub pdf_created: String,
    pub pdfs_merged: String,
}

impl SuccessMessages {
    pub fn for_tool(&self, tool: ToolKind) -> &str {
        match tool {
            ToolKind::TextToAudio => &self.audio_generated,
            ToolKind::ImageToPdf => &self.pdf_created,
            ToolKind::PdfMerge => &self.pdfs_merged,
        }
    }
}

impl Default for SuccessMessages {
    fn default() -> Self {
        Self {
            audio_generated: "Audio generated successfully!".to_string(),
            pdf_created: "PDF created successfully!".to_string(),
            pdfs_merged: "PDFs merged successfully!".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub no_text: String,
    pub no_images: String,
    pub not_enough_pdfs: String,
    pub file_too_large: String,
    pub invalid_file_type: String,
    pub api_error: String,
    pub network_error: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            no_text: "Please enter some text to convert".to_string(),
            no_images: "Please select images to convert".to_string(),
            not_enough_pdfs: "Please select at least 2 PDF files to merge".to_string(),
            file_too_large: "File is too large. Maximum size is 50MB.".to_string(),
            invalid_file_type: "Invalid file type. Please select supported files.".to_string(),
            api_error: "API call failed. Please try again.".to_string(),
            network_error: "Network error. Please check your connection.".to_string(),
        }
    }
}

/// `[logging]`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: Option<String>,
}

// =============================================================================
// Validation
// =============================================================================

/// Result of scanning the API configuration for unreplaced placeholders.
#[derive(Debug, Clone, Default)]
pub struct ApiConfigReport {
    /// Tools whose endpoint is empty or still carries the placeholder marker.
    pub missing: Vec<ToolKind>,
}

impl ApiConfigReport {
    pub fn is_fully_configured(&self) -> bool {
        self.missing.is_empty()
    }
}

impl HubConfig {
    /// Scan each tool's endpoint and report the unconfigured ones.
    /// Logs a warning naming every missing tool.
    pub fn validate_api_config(&self) -> ApiConfigReport {
        let missing: Vec<ToolKind> = ToolKind::all()
            .iter()
            .copied()
            .filter(|&tool| !self.api.for_tool(tool).is_configured())
            .collect();

        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|t| t.label()).collect();
            tracing::warn!(
                missing = names.join(", "),
                "Missing API configuration; update config.toml with your endpoints and keys"
            );
        }

        ApiConfigReport { missing }
    }

    /// True when `size` is within the per-file upload limit.
    pub fn validate_file_size(&self, size: u64) -> bool {
        size <= self.settings.upload.max_file_size
    }

    /// True when `mime` is one of the accepted image types.
    pub fn is_allowed_image_type(&self, mime: &str) -> bool {
        self.settings
            .upload
            .allowed_image_types
            .iter()
            .any(|t| t == mime)
    }

    /// True when `mime` is the accepted PDF type.
    pub fn is_allowed_pdf_type(&self, mime: &str) -> bool {
        mime == self.settings.upload.allowed_pdf_type
    }
}

// =============================================================================
// Formatting utilities
// =============================================================================

/// Convert a byte count to a human-readable base-1024 string.
///
/// Rounded to two decimals with trailing zeros trimmed, so 1024 is "1 KB"
/// and 1536 is "1.5 KB". Zero maps to "0 Bytes".
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (bytes.ilog2() / 10) as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut text = format!("{:.2}", (value * 100.0).round() / 100.0);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    format!("{text} {}", UNITS[exponent])
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size_exact_kilobyte() {
        assert_eq!(format_file_size(1024), "1 KB");
    }

    #[test]
    fn test_format_file_size_fractional() {
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_file_size_small_and_large() {
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_file_size_two_decimal_rounding() {
        // 1234567 / 1024^2 = 1.17738... -> "1.18 MB"
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_default_api_config_reports_all_tools_missing() {
        let config = HubConfig::default();
        let report = config.validate_api_config();
        assert!(!report.is_fully_configured());
        assert_eq!(report.missing.len(), 3);
    }

    #[test]
    fn test_partially_configured_api_lists_remaining_tools() {
        let mut config = HubConfig::default();
        config.api.text_to_audio.endpoint = "https://api.example.com/v1/audio/speech".to_string();
        let report = config.validate_api_config();
        assert!(!report.is_fully_configured());
        assert_eq!(
            report.missing,
            vec![ToolKind::ImageToPdf, ToolKind::PdfMerge]
        );
    }

    #[test]
    fn test_fully_configured_api_passes() {
        let mut config = HubConfig::default();
        config.api.text_to_audio.endpoint = "https://api.example.com/tts".to_string();
        config.api.image_to_pdf.endpoint = "https://api.example.com/img2pdf".to_string();
        config.api.pdf_merge.endpoint = "https://api.example.com/merge".to_string();
        assert!(config.validate_api_config().is_fully_configured());
    }

    #[test]
    fn test_empty_endpoint_counts_as_unconfigured() {
        let mut config = HubConfig::default();
        config.api.text_to_audio.endpoint = String::new();
        assert!(!config.api.text_to_audio.is_configured());
    }

    #[test]
    fn test_file_size_predicate() {
        let config = HubConfig::default();
        assert!(config.validate_file_size(50 * 1024 * 1024));
        assert!(!config.validate_file_size(50 * 1024 * 1024 + 1));
    }

    #[test]
    fn test_image_type_predicates() {
        let config = HubConfig::default();
        assert!(config.is_allowed_image_type("image/png"));
        assert!(config.is_allowed_image_type("image/webp"));
        assert!(!config.is_allowed_image_type("image/tiff"));
        assert!(config.is_allowed_pdf_type("application/pdf"));
        assert!(!config.is_allowed_pdf_type("image/png"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults_elsewhere() {
        let config: HubConfig = toml::from_str(
            r#"
            [api.text_to_audio]
            endpoint = "https://api.example.com/tts"

            [settings.upload]
            max_files = 4
            "#,
        )
        .unwrap();

        assert!(config.api.text_to_audio.is_configured());
        assert!(!config.api.pdf_merge.is_configured());
        assert_eq!(config.settings.upload.max_files, 4);
        assert_eq!(
            config.settings.upload.max_file_size,
            constants::DEFAULT_MAX_FILE_SIZE
        );
        assert_eq!(config.dev.simulation_delay.text_to_audio, 2_000);
        assert!(config.dev.simulate_api_calls);
        assert_eq!(config.ui.sections.pdf_merge.button_text, "MERGE PDFs");
    }

    #[test]
    fn test_notification_position_kebab_case() {
        let config: HubConfig = toml::from_str(
            r#"
            [settings.notifications]
            position = "bottom-left"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.settings.notifications.position,
            NotificationPosition::BottomLeft
        );
    }
}
