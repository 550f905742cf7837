// SPDX-License-Identifier: MPL-2.0
//! Photo ingestion and result export.
//!
//! A portrait enters the app as a whole file read into memory, sniffed for a
//! supported format, and carried around as encoded bytes plus a media type.
//! The generative service hands results back as a `data:` URI; this module
//! parses those and writes them to disk on save.

use crate::error::{Error, ImageError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use iced::widget::image;
use image_rs::ImageFormat;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Default file name offered in the save dialog.
pub const EXPORT_FILE_NAME: &str = "cultural-makeover.png";

/// The portrait photo as uploaded, fully resident in memory.
///
/// Bytes stay in their original encoding (the service accepts them as-is);
/// the Arc keeps clones cheap as the session moves between phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    bytes: Arc<Vec<u8>>,
    media_type: String,
}

impl SourceImage {
    /// Wraps already-validated encoded bytes. Callers outside tests should
    /// go through [`read_photo`].
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: Arc::new(bytes),
            media_type: media_type.into(),
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base64 payload handed to the service as `inlineData`.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.bytes.as_slice())
    }

    /// Handle for rendering the original portrait in the UI.
    pub fn handle(&self) -> image::Handle {
        image::Handle::from_bytes(self.bytes.to_vec())
    }
}

/// A generated makeover image, parsed out of the service's `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    data_uri: String,
    media_type: String,
    bytes: Arc<Vec<u8>>,
}

impl GeneratedImage {
    /// Composes a `data:<mediaType>;base64,<payload>` URI and keeps the
    /// decoded bytes alongside for rendering and export.
    pub fn from_parts(media_type: &str, base64_payload: &str) -> std::result::Result<Self, ImageError> {
        let bytes = BASE64
            .decode(base64_payload.trim())
            .map_err(|_| ImageError::MalformedDataUri)?;
        if bytes.is_empty() {
            return Err(ImageError::MalformedDataUri);
        }
        Ok(Self {
            data_uri: format!("data:{};base64,{}", media_type, base64_payload.trim()),
            media_type: media_type.to_string(),
            bytes: Arc::new(bytes),
        })
    }

    /// Parses an existing `data:` URI.
    pub fn from_data_uri(uri: &str) -> std::result::Result<Self, ImageError> {
        let rest = uri.strip_prefix("data:").ok_or(ImageError::MalformedDataUri)?;
        let (media_type, payload) = rest
            .split_once(";base64,")
            .ok_or(ImageError::MalformedDataUri)?;
        if media_type.is_empty() {
            return Err(ImageError::MalformedDataUri);
        }
        Self::from_parts(media_type, payload)
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn handle(&self) -> image::Handle {
        image::Handle::from_bytes(self.bytes.to_vec())
    }

    /// Writes the decoded image to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.bytes.as_slice())?;
        Ok(())
    }
}

/// Reads a portrait photo from disk, rejecting anything that is not a
/// JPEG, PNG, or WEBP. The format is sniffed from the bytes, not the
/// extension, so a renamed file cannot sneak through.
pub fn read_photo(path: &Path) -> Result<SourceImage> {
    let bytes = fs::read(path)?;
    let format = image_rs::guess_format(&bytes).map_err(|_| ImageError::Unreadable)?;
    let media_type = match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        ImageFormat::WebP => "image/webp",
        _ => return Err(Error::Image(ImageError::UnsupportedFormat)),
    };
    Ok(SourceImage::new(bytes, media_type))
}

/// Extensions offered in the open-file dialog filter.
pub const PHOTO_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];
