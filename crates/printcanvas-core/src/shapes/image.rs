//! Shared bitmap resources for image and clipart shapes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Image format for stored bitmap data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// WebP format.
    WebP,
}

impl ImageFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }

        None
    }
}

/// A decoded bitmap produced by the asset-loading collaborator.
///
/// Pixel data is kept as a base64 string for easy JSON serialization of
/// saved designs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bitmap {
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// Image format.
    pub format: ImageFormat,
    /// Encoded pixel data as base64.
    data_base64: String,
}

impl Bitmap {
    /// Create a bitmap from raw encoded bytes (PNG, JPEG, or WebP).
    pub fn new(width: u32, height: u32, format: ImageFormat, data: &[u8]) -> Self {
        use base64::{Engine, engine::general_purpose::STANDARD};

        Self {
            width,
            height,
            format,
            data_base64: STANDARD.encode(data),
        }
    }

    /// Get the raw image data (decoded from base64).
    pub fn data(&self) -> Option<Vec<u8>> {
        use base64::{Engine, engine::general_purpose::STANDARD};
        STANDARD.decode(&self.data_base64).ok()
    }

    /// Approximate size of the encoded data in bytes.
    pub fn data_size(&self) -> usize {
        self.data_base64.len() * 3 / 4
    }
}

/// Shared handle to an immutable bitmap.
///
/// Handles are cloned freely across document snapshots; the underlying
/// bitmap is held once and never deep-copied. Equality is handle identity,
/// not pixel content.
#[derive(Debug, Clone)]
pub struct ImageHandle(Arc<Bitmap>);

impl ImageHandle {
    /// Wrap a loaded bitmap in a shared handle.
    pub fn new(bitmap: Bitmap) -> Self {
        Self(Arc::new(bitmap))
    }

    /// Access the underlying bitmap.
    pub fn bitmap(&self) -> &Bitmap {
        &self.0
    }

    /// A handle is ready when it refers to a bitmap with real dimensions.
    pub fn is_ready(&self) -> bool {
        self.0.width > 0 && self.0.height > 0
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Serialize for ImageHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ImageHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Bitmap::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("webp"), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_extension("gif"), None);
    }

    #[test]
    fn test_magic_bytes() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(ImageFormat::from_magic_bytes(&png), Some(ImageFormat::Png));

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(ImageFormat::from_magic_bytes(&jpeg), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_handle_identity_equality() {
        let a = ImageHandle::new(Bitmap::new(10, 10, ImageFormat::Png, &[1, 2, 3]));
        let b = ImageHandle::new(Bitmap::new(10, 10, ImageFormat::Png, &[1, 2, 3]));

        // Same content, different allocations
        assert_ne!(a, b);
        // Clones share the allocation
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_readiness() {
        let loaded = ImageHandle::new(Bitmap::new(100, 50, ImageFormat::Jpeg, &[0u8; 8]));
        assert!(loaded.is_ready());

        let empty = ImageHandle::new(Bitmap::new(0, 0, ImageFormat::Png, &[]));
        assert!(!empty.is_ready());
    }

    #[test]
    fn test_bitmap_data_roundtrip() {
        let bytes = vec![7u8, 8, 9, 10];
        let bitmap = Bitmap::new(2, 2, ImageFormat::Png, &bytes);
        assert_eq!(bitmap.data(), Some(bytes));
    }
}
