use crate::domain::{
    classification::{
        entities::{ClassificationOutcome, InputType},
        helpers::strip_json_fences,
        ports::{ClassificationService, LLMClient},
        prompt::{PROMPT_TEMPLATE, build_prompt},
        value_objects::ClassifyIngredientsInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<LLM> ClassificationService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn classify_ingredients(
        &self,
        input: ClassifyIngredientsInput,
    ) -> Result<ClassificationOutcome, CoreError> {
        match input.input_type {
            InputType::Image => {
                let image_data = input.image_data.ok_or_else(|| {
                    CoreError::InvalidInput("image input requires image data".to_string())
                })?;

                let prompt = build_prompt(InputType::Image, None);
                let raw = self
                    .llm_client
                    .generate_with_image(prompt, image_data)
                    .await?;

                // The image path echoes the unsubstituted instruction
                // template alongside the raw response.
                Ok(ClassificationOutcome {
                    message: raw,
                    prompt_template: Some(PROMPT_TEMPLATE),
                })
            }
            InputType::Text => {
                let ingredients = input.text_input.ok_or_else(|| {
                    CoreError::InvalidInput("text input requires an ingredients string".to_string())
                })?;

                let prompt = build_prompt(InputType::Text, Some(&ingredients));
                let raw = self.llm_client.generate_with_text(prompt).await?;

                Ok(ClassificationOutcome {
                    message: strip_json_fences(&raw),
                    prompt_template: None,
                })
            }
        }
    }
}
