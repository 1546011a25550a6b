use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    vision::entities::{Detection, ImagePayload},
};

/// Produces a natural-language description of an image
#[cfg_attr(test, mockall::automock)]
pub trait ImageCaptioner: Send + Sync {
    fn caption(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Finds labelled objects in an image. Confidence filtering is up to the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectDetector: Send + Sync {
    fn detect(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<Vec<Detection>, CoreError>> + Send;
}
