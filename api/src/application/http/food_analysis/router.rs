use super::handlers::process_image::{__path_process_image, process_image};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Base64 of a 10MB image plus JSON framing.
const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(process_image))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/process-image", state.args.server.root_path),
            post(process_image),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
