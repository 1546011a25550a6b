use rand::{SeedableRng, rngs::StdRng};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeSnapConfig {
    pub llm: LLMConfig,
    pub vision: VisionConfig,
    pub recipe: RecipeConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    /// Minimum confidence a detection needs to be kept.
    pub detection_threshold: f32,
}

#[derive(Clone, Debug)]
pub struct RecipeConfig {
    pub enable_generation: bool,
    /// Fixed seed for the template fallback. `None` seeds from entropy per request.
    pub template_seed: Option<u64>,
}

pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
