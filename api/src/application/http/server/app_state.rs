use std::sync::Arc;

use recipesnap_core::application::RecipeSnapService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecipeSnapService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeSnapService) -> Self {
        Self { args, service }
    }
}
