use clap::{ArgAction, Parser};
use recipesnap_core::{
    domain::common::{LLMConfig, RecipeConfig, RecipeSnapConfig, VisionConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipesnap-api", version, about = "RecipeSnap photo to recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub recipe: RecipeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5002)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    /// Comma separated list of origins, `*` allows any origin
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.8)]
    pub temperature: f32,

    #[arg(long = "llm-max-output-tokens", env = "LLM_MAX_OUTPUT_TOKENS", default_value_t = 512)]
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VisionArgs {
    #[arg(
        long = "detection-threshold",
        env = "DETECTION_THRESHOLD",
        default_value_t = 0.3,
        value_parser = parse_unit_interval
    )]
    pub detection_threshold: f32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecipeArgs {
    #[arg(
        long = "recipe-generation",
        env = "RECIPE_GENERATION",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub enable_generation: bool,

    /// Seed for the template fallback, for reproducible recipes
    #[arg(long = "template-seed", env = "TEMPLATE_SEED")]
    pub template_seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

fn parse_unit_interval(value: &str) -> Result<f32, String> {
    let parsed: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;

    if (0.0..=1.0).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!("`{value}` must be between 0 and 1"))
    }
}

impl From<Args> for RecipeSnapConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                temperature: args.llm.temperature,
                max_output_tokens: args.llm.max_output_tokens,
            },
            vision: VisionConfig {
                detection_threshold: args.vision.detection_threshold,
            },
            recipe: RecipeConfig {
                enable_generation: args.recipe.enable_generation,
                template_seed: args.recipe.template_seed,
            },
        }
    }
}
