use tracing::{info, instrument, warn};

use crate::domain::{
    common::{create_rng, entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::FoodAnalysisResult, ports::FoodAnalysisService,
        value_objects::ProcessImageInput,
    },
    ingredient::extract_ingredients,
    recipe::{ports::TextGenerator, services::synthesize_recipe},
    vision::ports::{ImageCaptioner, ObjectDetector},
    vocabulary::VOCABULARY,
};

impl<CAP, DET, GEN> FoodAnalysisService for Service<CAP, DET, GEN>
where
    CAP: ImageCaptioner,
    DET: ObjectDetector,
    GEN: TextGenerator,
{
    #[instrument(
        skip(self, input),
        fields(
            mime_type = %input.image.mime_type,
            width = input.image.width,
            height = input.image.height,
        )
    )]
    async fn process_image(
        &self,
        input: ProcessImageInput,
    ) -> Result<FoodAnalysisResult, CoreError> {
        let image = input.image;

        // 1. Caption; collaborator failures degrade to an empty caption
        let caption = match self.captioner.caption(image.clone()).await {
            Ok(caption) => caption,
            Err(e) => {
                warn!("Image captioning failed, continuing without caption: {}", e);
                String::new()
            }
        };
        info!(caption = %caption, "caption generated");

        // 2. Detect objects; failures degrade to no detections
        let detections = match self.detector.detect(image).await {
            Ok(detections) => detections,
            Err(e) => {
                warn!("Object detection failed, continuing without detections: {}", e);
                Vec::new()
            }
        };
        info!(detections = detections.len(), "objects detected");

        // 3. Extract ingredients
        let labels: Vec<&str> = detections.iter().map(|d| d.label.as_str()).collect();
        let ingredients = extract_ingredients(&caption, &labels);
        info!(ingredients = ?ingredients, "ingredients extracted");

        // 4. Synthesize recipe
        let mut rng = create_rng(self.template_seed);
        let recipe =
            synthesize_recipe(&ingredients, self.text_generator.as_deref(), &mut rng).await;
        info!(source = ?recipe.source, "recipe synthesized");

        Ok(FoodAnalysisResult {
            caption,
            ingredients,
            recipe,
            detections,
            food_keywords: VOCABULARY
                .food_keywords()
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        })
    }
}
