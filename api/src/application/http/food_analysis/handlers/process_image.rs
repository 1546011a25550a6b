use axum::extract::State;
use recipesnap_core::domain::{
    food_analysis::{FoodAnalysisResult, FoodAnalysisService, ProcessImageInput},
    vision::{Detection, ImagePayload},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::application::http::{
    food_analysis::validators::{MISSING_IMAGE_MESSAGE, ProcessImageRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaptionResult {
    pub generated_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessImageResponse {
    pub caption: String,
    pub ingredients: Vec<String>,
    pub recipe: String,
    pub detection_results: Vec<Detection>,
    pub food_keywords: Vec<String>,
    /// Caption in the shape older clients read it from.
    pub caption_result: Vec<CaptionResult>,
}

impl From<FoodAnalysisResult> for ProcessImageResponse {
    fn from(result: FoodAnalysisResult) -> Self {
        Self {
            caption_result: vec![CaptionResult {
                generated_text: result.caption.clone(),
            }],
            caption: result.caption,
            ingredients: result.ingredients.to_vec(),
            recipe: result.recipe.text,
            detection_results: result.detections,
            food_keywords: result.food_keywords,
        }
    }
}

#[utoipa::path(
    post,
    path = "/process-image",
    tag = "food-analysis",
    summary = "Turn a food photo into a recipe",
    description = "Captions the image, detects food items, extracts ingredients and returns a recipe",
    request_body = ProcessImageRequest,
    responses(
        (status = 200, body = ProcessImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
#[instrument(skip_all)]
pub async fn process_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProcessImageRequest>,
) -> Result<Response<ProcessImageResponse>, ApiError> {
    let encoded = payload
        .image
        .ok_or_else(|| ApiError::BadRequest(MISSING_IMAGE_MESSAGE.to_string()))?;

    // base64 inflates by 4/3, so this bounds the decoded size from above
    if encoded.len() / 4 * 3 > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    let image = ImagePayload::from_base64(&encoded)?;
    info!(
        mime_type = %image.mime_type,
        width = image.width,
        height = image.height,
        "processing image"
    );

    let result = state
        .service
        .process_image(ProcessImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProcessImageResponse::from(result)))
}

#[cfg(test)]
mod tests {
    use recipesnap_core::domain::{ingredient::IngredientSet, recipe::Recipe};

    use super::*;

    #[test]
    fn test_response_mirrors_caption_and_flattens_recipe() {
        let result = FoodAnalysisResult {
            caption: "a plate with potato".to_string(),
            ingredients: IngredientSet::from_iter(["potato", "Cheese"]),
            recipe: Recipe::template("Potato Bake\n".to_string()),
            detections: vec![Detection::new("Cheese", 0.8)],
            food_keywords: vec!["potato".to_string()],
        };

        let response = ProcessImageResponse::from(result);

        assert_eq!(response.caption, "a plate with potato");
        assert_eq!(response.caption_result[0].generated_text, "a plate with potato");
        assert_eq!(response.recipe, "Potato Bake\n");
        assert_eq!(response.ingredients.len(), 2);
        assert_eq!(response.detection_results[0].label, "Cheese");
    }

    #[test]
    fn test_response_uses_camel_case_keys() {
        let response = ProcessImageResponse {
            caption: String::new(),
            ingredients: vec![],
            recipe: String::new(),
            detection_results: vec![],
            food_keywords: vec![],
            caption_result: vec![],
        };

        let value = serde_json::to_value(&response).expect("serialize");

        assert!(value.get("detectionResults").is_some());
        assert!(value.get("foodKeywords").is_some());
        assert!(value.get("captionResult").is_some());
    }
}
