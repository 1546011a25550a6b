use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc, health::router::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "RecipeSnap API",
    description = "Turns a food photo into a caption, an ingredient list and a recipe"
))]
pub struct ApiDoc;

/// Full document with every route group merged in. Paths are relative to the root path.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(FoodAnalysisApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
