use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::FoodAnalysisResult, value_objects::ProcessImageInput},
};

/// Service trait for the photo to recipe pipeline
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    fn process_image(
        &self,
        input: ProcessImageInput,
    ) -> impl Future<Output = Result<FoodAnalysisResult, CoreError>> + Send;
}
