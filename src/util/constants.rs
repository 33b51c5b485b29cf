// Matrix Tools Hub - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Matrix Tools Hub";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "MatrixToolsHub";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tagline shown in the header.
pub const APP_TAGLINE: &str = "Enter the Matrix of Productivity";

// =============================================================================
// API configuration
// =============================================================================

/// Endpoint values still containing this marker are treated as unconfigured.
pub const PLACEHOLDER_MARKER: &str = "YOUR_";

/// HTTP request timeout for the real (non-simulated) backends.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default simulated response delays, per tool (milliseconds).
pub const DEFAULT_TTS_DELAY_MS: u64 = 2_000;
pub const DEFAULT_IMAGE_DELAY_MS: u64 = 3_000;
pub const DEFAULT_MERGE_DELAY_MS: u64 = 2_500;

// =============================================================================
// Upload limits
// =============================================================================

/// Maximum size of a single uploaded file in bytes.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024; // 50 MiB

/// Maximum number of files per tool.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Hard upper bound on the configurable file-count limit.
pub const ABSOLUTE_MAX_FILES: usize = 100;

/// Hard upper bound on the configurable per-file size limit.
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024; // 1 GiB

/// Image MIME types accepted by the image-to-PDF tool.
pub const DEFAULT_ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/webp",
];

/// The single MIME type accepted by the PDF-merge tool.
pub const ALLOWED_PDF_TYPE: &str = "application/pdf";

/// Bytes read from the head of a file for content-based type sniffing.
pub const MIME_SNIFF_BYTES: usize = 16;

// =============================================================================
// Notifications
// =============================================================================

/// How long a notification stays on screen before auto-dismissal (ms).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5_000;

/// Lower/upper bounds for the configurable notification duration (ms).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Maximum number of simultaneously stacked notifications.
/// Oldest entries are evicted first when the cap is reached.
pub const MAX_NOTIFICATIONS: usize = 8;

// =============================================================================
// Matrix rain animation
// =============================================================================

/// Frame interval of the rain animation (ms).
pub const DEFAULT_RAIN_FRAME_MS: u64 = 50;

/// Bounds for the configurable frame interval (ms).
pub const MIN_RAIN_FRAME_MS: u64 = 16;
pub const MAX_RAIN_FRAME_MS: u64 = 1_000;

/// Glyph cell size in points.
pub const DEFAULT_RAIN_FONT_SIZE: f32 = 14.0;
pub const MIN_RAIN_FONT_SIZE: f32 = 8.0;
pub const MAX_RAIN_FONT_SIZE: f32 = 40.0;

/// Overall opacity of the rain layer (0.0 - 1.0).
pub const DEFAULT_RAIN_OPACITY: f32 = 0.1;

/// Probability per frame that an off-screen column resets to the top.
pub const RAIN_RESET_PROBABILITY: f64 = 0.025;

/// Number of fading trail glyphs drawn above each column head.
pub const RAIN_TRAIL_LEN: usize = 12;

/// Default glyph set: half-width katakana, digits, and uppercase Latin.
pub const DEFAULT_RAIN_GLYPHS: &str =
    "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Tool defaults
// =============================================================================

/// Suggested download name for generated audio.
pub const DEFAULT_AUDIO_FILENAME: &str = "generated-audio.mp3";

/// Suggested download name for the image-to-PDF output.
pub const DEFAULT_PDF_FILENAME: &str = "converted-images.pdf";

/// Default output name for merged PDFs.
pub const DEFAULT_MERGE_FILENAME: &str = "merged-document.pdf";

/// Speed slider range for the text-to-audio tool.
pub const MIN_TTS_SPEED: f32 = 0.5;
pub const MAX_TTS_SPEED: f32 = 2.0;

// =============================================================================
// Per-frame UI budgets
// =============================================================================

/// Maximum number of completed-job events processed by the UI per frame.
/// Remaining events stay queued and are handled on subsequent frames.
pub const MAX_JOB_EVENTS_PER_FRAME: usize = 32;

// =============================================================================
// Logging / configuration
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
