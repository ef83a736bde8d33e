//! Frame-level tests for the relay dispatcher.
//!
//! These drive `process_frame` directly with a stub classification service,
//! covering the decode/validate/route contract without any network.

use std::sync::Mutex;

use halalscan_api::application::http::classification::handlers::classify_ws::process_frame;
use halalscan_api::application::http::classification::validators::ReplyStatus;
use halalscan_core::domain::classification::{
    entities::{ClassificationOutcome, InputType},
    ports::ClassificationService,
    prompt::PROMPT_TEMPLATE,
    value_objects::ClassifyIngredientsInput,
};
use halalscan_core::domain::common::entities::app_errors::CoreError;

struct StubService {
    reply: Result<ClassificationOutcome, String>,
    calls: Mutex<Vec<ClassifyIngredientsInput>>,
}

impl StubService {
    fn replying(outcome: ClassificationOutcome) -> Self {
        Self {
            reply: Ok(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(detail: &str) -> Self {
        Self {
            reply: Err(detail.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Stub for frames that must be rejected before any service call.
    fn unreachable() -> Self {
        Self::failing("service must not be called")
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn recorded_input_types(&self) -> Vec<InputType> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|input| input.input_type)
            .collect()
    }
}

impl ClassificationService for StubService {
    async fn classify_ingredients(
        &self,
        input: ClassifyIngredientsInput,
    ) -> Result<ClassificationOutcome, CoreError> {
        self.calls.lock().unwrap().push(input);
        match &self.reply {
            Ok(outcome) => Ok(outcome.clone()),
            Err(detail) => Err(CoreError::ExternalServiceError(detail.clone())),
        }
    }
}

fn text_outcome(message: &str) -> ClassificationOutcome {
    ClassificationOutcome {
        message: message.to_string(),
        prompt_template: None,
    }
}

fn image_outcome(message: &str) -> ClassificationOutcome {
    ClassificationOutcome {
        message: message.to_string(),
        prompt_template: Some(PROMPT_TEMPLATE),
    }
}

#[tokio::test]
async fn invalid_utf8_yields_invalid_json_reply_without_service_call() {
    let service = StubService::unreachable();

    let reply = process_frame(&[0xff, 0xfe, 0xfd], &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert_eq!(reply.message, "Invalid JSON data");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn invalid_json_yields_invalid_json_reply_without_service_call() {
    let service = StubService::unreachable();

    let reply = process_frame(b"{not json", &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert_eq!(reply.message, "Invalid JSON data");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn non_object_json_is_rejected_as_invalid() {
    let service = StubService::unreachable();

    let reply = process_frame(b"42", &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert_eq!(reply.message, "Invalid JSON data");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn missing_both_fields_is_rejected_without_service_call() {
    let service = StubService::unreachable();

    let reply = process_frame(b"{}", &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert_eq!(reply.message, "ingredients and image missing");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn null_field_values_are_treated_as_absent() {
    let service = StubService::unreachable();

    let reply = process_frame(br#"{"ingredients": null, "image": null}"#, &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert_eq!(reply.message, "ingredients and image missing");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn text_path_relays_cleaned_response_without_prompt_field() {
    let classified = r#"{"halal":["sugar","water"],"musbooh":["gelatin"],"haram":[],"explanations":{"gelatin":"source ambiguous"},"result":"musbooh"}"#;
    let service = StubService::replying(text_outcome(classified));

    let reply = process_frame(br#"{"ingredients": "gelatin, sugar, water"}"#, &service).await;

    assert_eq!(reply.status, ReplyStatus::Success);
    assert_eq!(reply.message, classified);
    assert_eq!(reply.prompt, None);

    // The serialized reply must omit the prompt key entirely.
    let serialized = serde_json::to_value(&reply).unwrap();
    assert!(serialized.get("prompt").is_none());
    assert_eq!(serialized["status"], "success");
}

#[tokio::test]
async fn text_takes_priority_when_both_fields_are_present() {
    let service = StubService::replying(text_outcome("{}"));

    let frame = br#"{"ingredients": "sugar", "image": "data:image/jpeg;base64,AAAA"}"#;
    let reply = process_frame(frame, &service).await;

    assert_eq!(reply.status, ReplyStatus::Success);
    assert_eq!(service.recorded_input_types(), vec![InputType::Text]);
}

#[tokio::test]
async fn text_path_failure_embeds_error_detail() {
    let service = StubService::failing("quota exceeded");

    let reply = process_frame(br#"{"ingredients": "sugar"}"#, &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert_eq!(
        reply.message,
        "Error processing ingredients string: quota exceeded"
    );
}

#[tokio::test]
async fn image_path_success_echoes_the_instruction_template() {
    let service = StubService::replying(image_outcome("{\"result\": \"halal\"}"));

    let reply = process_frame(br#"{"image": "data:image/jpeg;base64,AAAA"}"#, &service).await;

    assert_eq!(reply.status, ReplyStatus::Success);
    assert_eq!(reply.message, "{\"result\": \"halal\"}");
    assert_eq!(reply.prompt.as_deref(), Some(PROMPT_TEMPLATE));
    assert_eq!(service.recorded_input_types(), vec![InputType::Image]);
}

#[tokio::test]
async fn image_without_data_uri_separator_fails_before_service_call() {
    let service = StubService::unreachable();

    let reply = process_frame(br#"{"image": "not-a-data-uri"}"#, &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert!(reply.message.starts_with("Error processing image: "));
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn image_with_invalid_base64_fails_before_service_call() {
    let service = StubService::unreachable();

    let reply = process_frame(br#"{"image": "data:image/jpeg;base64,!!!"}"#, &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert!(reply.message.starts_with("Error processing image: "));
    assert!(reply.message.contains("base64"));
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn image_path_failure_embeds_error_detail() {
    let service = StubService::failing("model unavailable");

    let reply = process_frame(br#"{"image": "data:image/jpeg;base64,AAAA"}"#, &service).await;

    assert_eq!(reply.status, ReplyStatus::Failed);
    assert_eq!(reply.message, "Error processing image: model unavailable");
}

#[tokio::test]
async fn failure_replies_never_carry_a_prompt_field() {
    let service = StubService::failing("boom");

    let reply = process_frame(br#"{"image": "data:image/jpeg;base64,AAAA"}"#, &service).await;

    let serialized = serde_json::to_value(&reply).unwrap();
    assert!(serialized.get("prompt").is_none());
    assert_eq!(serialized["status"], "failed");
}
