use tracing::{info, warn};

use crate::{
    domain::common::{RecipeSnapConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type RecipeSnapService = Service<GeminiLLMClient, GeminiLLMClient, GeminiLLMClient>;

/// Wires the Gemini adapters into the service.
///
/// Text generation is only attached when enabled and an API key is present;
/// without it every recipe comes from the template fallback.
pub fn create_service(config: RecipeSnapConfig) -> RecipeSnapService {
    let client = GeminiLLMClient::new(&config.llm, config.vision.detection_threshold);

    if !client.is_configured() {
        warn!("No Gemini API key configured; captions and detections will fall back to defaults");
    }

    let text_generator = if config.recipe.enable_generation && client.is_configured() {
        info!(model = %config.llm.gemini_model, "recipe generation enabled");
        Some(client.clone())
    } else {
        info!("recipe generation disabled, using templates only");
        None
    };

    Service::new(
        client.clone(),
        client,
        text_generator,
        config.recipe.template_seed,
    )
}
