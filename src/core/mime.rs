// Matrix Tools Hub - core/mime.rs
//
// MIME type detection for selected files: extension mapping first, content
// sniffing as a fallback for files with unknown or missing extensions.

use crate::core::model::SelectedFile;
use crate::util::constants;
use std::io::{self, Read};
use std::path::Path;

/// MIME type for a known file extension (case-insensitive).
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Sniff a MIME type from the first few bytes of content.
///
/// Recognises the `%PDF` magic directly and defers image formats to the
/// `image` crate's header probe.
pub fn sniff_mime(head: &[u8]) -> Option<String> {
    if head.starts_with(b"%PDF") {
        return Some(constants::ALLOWED_PDF_TYPE.to_string());
    }
    image::guess_format(head)
        .ok()
        .map(|format| format.to_mime_type().to_string())
}

/// Determine the MIME type of a file on disk.
///
/// Extension mapping is authoritative when it matches a known type; content
/// sniffing covers files with unhelpful extensions.
pub fn detect_mime(path: &Path) -> io::Result<Option<String>> {
    if let Some(mime) = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
    {
        return Ok(Some(mime.to_string()));
    }

    let mut head = [0u8; constants::MIME_SNIFF_BYTES];
    let mut file = std::fs::File::open(path)?;
    let read = file.read(&mut head)?;
    Ok(sniff_mime(&head[..read]))
}

/// Build a `SelectedFile` record for a path picked or dropped by the user.
///
/// Files whose type cannot be determined are recorded as octet-stream and
/// left for the upload policy to reject with a user-visible reason.
pub fn selected_file_from_path(path: &Path) -> io::Result<SelectedFile> {
    let metadata = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();
    let mime = detect_mime(path)?.unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(SelectedFile {
        path: path.to_path_buf(),
        name,
        size: metadata.len(),
        mime,
    })
}
