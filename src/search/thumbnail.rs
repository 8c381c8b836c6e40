// SPDX-License-Identifier: MPL-2.0
//! Decoding of fetched thumbnail bytes into Iced image handles.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded thumbnail ready for the result grid.
///
/// Bytes coming off the wire are decoded eagerly so that malformed payloads
/// are caught at the fetch boundary rather than deep inside the renderer.
#[derive(Debug, Clone)]
pub struct ThumbnailImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ThumbnailImage {
    /// Decodes encoded image bytes (JPEG, PNG, ...) into RGBA pixels and
    /// wraps them in an image handle.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let decoded =
            image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
        let (width, height) = decoded.dimensions();
        let pixels = decoded.into_rgba8().into_raw();
        Ok(Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image_rs::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("failed to encode test PNG");
        bytes
    }

    #[test]
    fn decodes_valid_png_with_dimensions() {
        let bytes = encoded_png(4, 3);
        let thumbnail = ThumbnailImage::from_encoded(&bytes).expect("decode should succeed");
        assert_eq!(thumbnail.width, 4);
        assert_eq!(thumbnail.height, 3);
    }

    #[test]
    fn rejects_garbage_bytes() {
        let result = ThumbnailImage::from_encoded(b"not an image at all");
        match result {
            Err(Error::Decode(_)) => {}
            other => panic!("expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_truncated_png() {
        let mut bytes = encoded_png(4, 4);
        bytes.truncate(bytes.len() / 2);
        assert!(ThumbnailImage::from_encoded(&bytes).is_err());
    }
}
