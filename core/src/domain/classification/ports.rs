use std::future::Future;

use crate::domain::{
    classification::{entities::ClassificationOutcome, value_objects::ClassifyIngredientsInput},
    common::entities::app_errors::CoreError,
};

/// LLM client trait for calling the external classification model.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Generate from an image and a prompt, sent as two content parts
    /// (image bytes first, prompt second).
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Generate from a single text prompt.
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for ingredient classification business logic.
#[cfg_attr(test, mockall::automock)]
pub trait ClassificationService: Send + Sync {
    fn classify_ingredients(
        &self,
        input: ClassifyIngredientsInput,
    ) -> impl Future<Output = Result<ClassificationOutcome, CoreError>> + Send;
}
