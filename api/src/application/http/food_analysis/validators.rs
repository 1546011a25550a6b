use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MISSING_IMAGE_MESSAGE: &str = "No image data provided";

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProcessImageRequest {
    /// Base64 image bytes, optionally wrapped in a `data:image/...;base64,` URL.
    #[validate(
        required(message = "No image data provided"),
        length(min = 1, message = "No image data provided")
    )]
    pub image: Option<String>,
}
