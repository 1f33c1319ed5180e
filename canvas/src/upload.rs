//! Image upload encoding: raw file bytes to a `data:` URI.
//!
//! The host performs the (asynchronous) file read and hands the finished
//! bytes to the engine, which embeds them as the image item's content.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::UploadError;

/// Detect an image MIME type from magic bytes, falling back to the file
/// extension for text formats (SVG).
#[must_use]
pub fn sniff_mime(bytes: &[u8], file_name: &str) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if bytes.starts_with(b"BM") {
        return Some("image/bmp");
    }
    if file_name.to_ascii_lowercase().ends_with(".svg") {
        return Some("image/svg+xml");
    }
    None
}

/// Encode uploaded image bytes as a base64 `data:` URI.
///
/// # Errors
///
/// Returns [`UploadError::Empty`] for a zero-length file and
/// [`UploadError::UnsupportedFormat`] when the bytes are not a recognized image.
pub fn image_data_uri(bytes: &[u8], file_name: &str) -> Result<String, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    let Some(mime) = sniff_mime(bytes, file_name) else {
        return Err(UploadError::UnsupportedFormat { file_name: file_name.to_owned() });
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
