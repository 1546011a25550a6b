use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    pub label: String,
    pub score: f32,
}

impl Detection {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A decoded, validated image ready to hand to the vision collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}

impl ImagePayload {
    /// Accepts plain base64 or a `data:image/...;base64,` URL.
    pub fn from_base64(encoded: &str) -> Result<Self, CoreError> {
        let encoded = strip_data_url(encoded.trim());
        if encoded.is_empty() {
            return Err(CoreError::InvalidImage("image payload is empty".to_string()));
        }

        let data = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| CoreError::InvalidImage(format!("invalid base64 data: {}", e)))?;

        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, CoreError> {
        let format = image::guess_format(&data)
            .map_err(|e| CoreError::InvalidImage(format!("unrecognized image format: {}", e)))?;

        let decoded = image::load_from_memory_with_format(&data, format)
            .map_err(|e| CoreError::InvalidImage(format!("failed to decode image: {}", e)))?;

        Ok(Self {
            mime_type: format.to_mime_type().to_string(),
            width: decoded.width(),
            height: decoded.height(),
            data,
        })
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }
}

fn strip_data_url(payload: &str) -> &str {
    if payload.starts_with("data:image") {
        payload
            .split_once(',')
            .map(|(_, data)| data)
            .unwrap_or_default()
    } else {
        payload
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageBuffer, ImageFormat, Rgb};

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_pixel(width, height, Rgb([200u8, 120, 40]));
        let mut bytes = Cursor::new(Vec::new());
        buffer
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        bytes.into_inner()
    }

    #[test]
    fn test_decode_plain_base64() {
        let encoded = general_purpose::STANDARD.encode(png_bytes(4, 3));

        let payload = ImagePayload::from_base64(&encoded).expect("valid image");

        assert_eq!(payload.mime_type, "image/png");
        assert_eq!((payload.width, payload.height), (4, 3));
    }

    #[test]
    fn test_decode_data_url() {
        let encoded = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(png_bytes(2, 2))
        );

        let payload = ImagePayload::from_base64(&encoded).expect("valid image");

        assert_eq!((payload.width, payload.height), (2, 2));
        assert_eq!(payload.to_base64(), encoded.split_once(',').unwrap().1);
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(matches!(
            ImagePayload::from_base64("   "),
            Err(CoreError::InvalidImage(_))
        ));
        assert!(matches!(
            ImagePayload::from_base64("data:image/png;base64"),
            Err(CoreError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let result = ImagePayload::from_base64("not base64 at all!");

        assert!(matches!(result, Err(CoreError::InvalidImage(message)) if message.contains("base64")));
    }

    #[test]
    fn test_non_image_bytes_are_rejected() {
        let encoded = general_purpose::STANDARD.encode(b"plain text, not an image");

        assert!(matches!(
            ImagePayload::from_base64(&encoded),
            Err(CoreError::InvalidImage(_))
        ));
    }
}
