// Matrix Tools Hub - platform/config.rs
//
// Config file resolution and loading. Uses the `directories` crate for
// XDG (Linux), AppData (Windows), and Library (macOS) compliance.
//
// Out-of-range values are clamped rather than rejected, each with a
// warning the caller can log once the logging subsystem is up.

use crate::core::config::HubConfig;
use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Matrix Tools Hub data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/matrixtoolshub/).
    pub config_dir: PathBuf,

    /// Data directory for downloads, caches, etc.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", constants::APP_ID) {
            Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
                data_dir: proj_dirs.data_dir().to_path_buf(),
            }
        } else {
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

/// Load the configuration from `path`, falling back to compiled-in defaults
/// when the file does not exist.
///
/// Returns the (clamped) configuration plus any validation warnings; the
/// caller logs them after the logging subsystem is initialised. A present
/// but unparsable file is an error: silently ignoring a broken config would
/// hide misconfigured endpoints from the user.
pub fn load_config(path: &Path) -> Result<(HubConfig, Vec<String>), ConfigError> {
    let mut warnings = Vec::new();

    let mut config = if path.exists() {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        warnings.push(format!(
            "No config file at '{}'; using built-in defaults",
            path.display()
        ));
        HubConfig::default()
    };

    clamp_config(&mut config, &mut warnings);
    Ok((config, warnings))
}

/// Clamp out-of-range values to their documented bounds.
fn clamp_config(config: &mut HubConfig, warnings: &mut Vec<String>) {
    let rain = &mut config.settings.matrix_rain;
    if !(0.0..=1.0).contains(&rain.opacity) {
        warnings.push(format!(
            "matrix_rain.opacity {} out of range 0.0-1.0; clamped",
            rain.opacity
        ));
        rain.opacity = rain.opacity.clamp(0.0, 1.0);
    }
    if rain.frame_interval_ms < constants::MIN_RAIN_FRAME_MS
        || rain.frame_interval_ms > constants::MAX_RAIN_FRAME_MS
    {
        warnings.push(format!(
            "matrix_rain.frame_interval_ms {} out of range {}-{}; clamped",
            rain.frame_interval_ms,
            constants::MIN_RAIN_FRAME_MS,
            constants::MAX_RAIN_FRAME_MS
        ));
        rain.frame_interval_ms = rain
            .frame_interval_ms
            .clamp(constants::MIN_RAIN_FRAME_MS, constants::MAX_RAIN_FRAME_MS);
    }
    if !(constants::MIN_RAIN_FONT_SIZE..=constants::MAX_RAIN_FONT_SIZE).contains(&rain.font_size) {
        warnings.push(format!(
            "matrix_rain.font_size {} out of range {}-{}; clamped",
            rain.font_size,
            constants::MIN_RAIN_FONT_SIZE,
            constants::MAX_RAIN_FONT_SIZE
        ));
        rain.font_size = rain
            .font_size
            .clamp(constants::MIN_RAIN_FONT_SIZE, constants::MAX_RAIN_FONT_SIZE);
    }
    if rain.characters.is_empty() {
        warnings.push("matrix_rain.characters is empty; using default glyph set".to_string());
        rain.characters = constants::DEFAULT_RAIN_GLYPHS.to_string();
    }

    let notifications = &mut config.settings.notifications;
    if notifications.duration_ms < constants::MIN_NOTIFICATION_DURATION_MS
        || notifications.duration_ms > constants::MAX_NOTIFICATION_DURATION_MS
    {
        warnings.push(format!(
            "notifications.duration_ms {} out of range {}-{}; clamped",
            notifications.duration_ms,
            constants::MIN_NOTIFICATION_DURATION_MS,
            constants::MAX_NOTIFICATION_DURATION_MS
        ));
        notifications.duration_ms = notifications.duration_ms.clamp(
            constants::MIN_NOTIFICATION_DURATION_MS,
            constants::MAX_NOTIFICATION_DURATION_MS,
        );
    }

    let upload = &mut config.settings.upload;
    if upload.max_files == 0 || upload.max_files > constants::ABSOLUTE_MAX_FILES {
        warnings.push(format!(
            "upload.max_files {} out of range 1-{}; clamped",
            upload.max_files,
            constants::ABSOLUTE_MAX_FILES
        ));
        upload.max_files = upload.max_files.clamp(1, constants::ABSOLUTE_MAX_FILES);
    }
    if upload.max_file_size == 0 || upload.max_file_size > constants::ABSOLUTE_MAX_FILE_SIZE {
        warnings.push(format!(
            "upload.max_file_size {} out of range 1-{}; clamped",
            upload.max_file_size,
            constants::ABSOLUTE_MAX_FILE_SIZE
        ));
        upload.max_file_size = upload
            .max_file_size
            .clamp(1, constants::ABSOLUTE_MAX_FILE_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_yields_defaults_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml")).unwrap();
        assert!(!config.api.text_to_audio.is_configured());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("built-in defaults"));
    }

    #[test]
    fn test_values_from_file_override_defaults() {
        let (_dir, path) = write_config(
            r#"
            [dev]
            simulate_api_calls = false

            [settings.notifications]
            duration_ms = 2500
            "#,
        );
        let (config, warnings) = load_config(&path).unwrap();
        assert!(!config.dev.simulate_api_calls);
        assert_eq!(config.settings.notifications.duration_ms, 2500);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_broken_toml_is_an_error() {
        let (_dir, path) = write_config("this is not toml [");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse { .. }));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let (_dir, path) = write_config(
            r#"
            [settings.matrix_rain]
            opacity = 7.5
            frame_interval_ms = 2

            [settings.upload]
            max_files = 0
            "#,
        );
        let (config, warnings) = load_config(&path).unwrap();
        assert_eq!(config.settings.matrix_rain.opacity, 1.0);
        assert_eq!(
            config.settings.matrix_rain.frame_interval_ms,
            constants::MIN_RAIN_FRAME_MS
        );
        assert_eq!(config.settings.upload.max_files, 1);
        assert_eq!(warnings.len(), 3);
    }
}
