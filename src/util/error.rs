// Matrix Tools Hub - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// User-input mistakes (empty text, too few files) are not errors in this
// hierarchy; they are surfaced directly as notifications and never leave
// the state layer.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Matrix Tools Hub operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum HubError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A remote conversion call failed.
    Api(ApiError),

    /// Saving or fetching an output resource failed.
    Resource(ResourceError),
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Api(e) => write!(f, "API error: {e}"),
            Self::Resource(e) => write!(f, "Resource error: {e}"),
        }
    }
}

impl std::error::Error for HubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Api(e) => Some(e),
            Self::Resource(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for HubError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// API errors
// ---------------------------------------------------------------------------

/// Errors produced by the remote-call layer.
///
/// `tool` carries the human-readable tool label (e.g. "text-to-audio") so
/// the message is self-contained when shown in a notification.
#[derive(Debug)]
pub enum ApiError {
    /// The endpoint for this tool still carries the placeholder marker.
    Unconfigured { tool: &'static str },

    /// Building the HTTP client failed.
    Client { source: reqwest::Error },

    /// The request could not be sent or the response body not read.
    Transport {
        tool: &'static str,
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    Status { tool: &'static str, status: u16 },

    /// The response body did not match the expected shape.
    InvalidPayload {
        tool: &'static str,
        reason: String,
    },

    /// The server answered 2xx but flagged the conversion as failed.
    Rejected {
        tool: &'static str,
        message: String,
    },

    /// An input file could not be read for upload.
    FileRead { path: PathBuf, source: io::Error },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconfigured { tool } => write!(
                f,
                "The {tool} endpoint is not configured. \
                 Update config.toml with your API endpoint and key."
            ),
            Self::Client { source } => {
                write!(f, "Failed to build HTTP client: {source}")
            }
            Self::Transport { tool, source } => {
                write!(f, "{tool} request failed: {source}")
            }
            Self::Status { tool, status } => {
                write!(f, "{tool} request failed with HTTP status {status}")
            }
            Self::InvalidPayload { tool, reason } => {
                write!(f, "{tool} response was malformed: {reason}")
            }
            Self::Rejected { tool, message } => {
                write!(f, "{tool} conversion rejected: {message}")
            }
            Self::FileRead { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client { source } => Some(source),
            Self::Transport { source, .. } => Some(source),
            Self::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ApiError> for HubError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

// ---------------------------------------------------------------------------
// Resource errors
// ---------------------------------------------------------------------------

/// Errors saving or fetching an output resource.
#[derive(Debug)]
pub enum ResourceError {
    /// Writing the output file failed.
    Io { path: PathBuf, source: io::Error },

    /// Downloading a URL-backed resource failed.
    Download {
        url: String,
        source: reqwest::Error,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
            Self::Download { url, source } => {
                write!(f, "Download of '{url}' failed: {source}")
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Download { source, .. } => Some(source),
        }
    }
}

impl From<ResourceError> for HubError {
    fn from(e: ResourceError) -> Self {
        Self::Resource(e)
    }
}

/// Convenience type alias for Matrix Tools Hub results.
pub type Result<T> = std::result::Result<T, HubError>;
