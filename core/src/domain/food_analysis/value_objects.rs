use crate::domain::vision::ImagePayload;

#[derive(Debug, Clone)]
pub struct ProcessImageInput {
    pub image: ImagePayload,
}
