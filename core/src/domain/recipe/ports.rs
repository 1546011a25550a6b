use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Optional text generation capability used for the first recipe attempt
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator: Send + Sync {
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
