// Matrix Tools Hub - app/download.rs
//
// Materialise an operation result on disk. Bytes-backed resources are
// written directly; URL-backed ones are fetched first.

use crate::core::model::ResourceLocator;
use crate::util::constants;
use crate::util::error::ResourceError;
use std::path::Path;
use std::time::Duration;

/// Write the resource behind `locator` to `dest`.
pub fn save_resource(locator: &ResourceLocator, dest: &Path) -> Result<(), ResourceError> {
    match locator {
        ResourceLocator::Bytes { data, .. } => {
            std::fs::write(dest, data).map_err(|e| ResourceError::Io {
                path: dest.to_path_buf(),
                source: e,
            })?;
        }
        ResourceLocator::Url(url) => {
            let body = fetch(url).map_err(|e| ResourceError::Download {
                url: url.clone(),
                source: e,
            })?;
            std::fs::write(dest, body).map_err(|e| ResourceError::Io {
                path: dest.to_path_buf(),
                source: e,
            })?;
        }
    }

    tracing::info!(dest = %dest.display(), "Resource saved");
    Ok(())
}

fn fetch(url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.bytes()?;
    Ok(body.to_vec())
}
