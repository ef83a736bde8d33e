//! Composition helpers: concrete service assembly from configuration.

use crate::domain::common::{HalalScanConfig, services::Service};
use crate::infrastructure::llm::GeminiLLMClient;

/// The fully wired service type used by adapters.
pub type HalalScanService = Service<GeminiLLMClient>;

/// Build the service graph from configuration.
///
/// The Gemini client is constructed once per process and shared by every
/// connection. An absent or invalid API key is not checked here; it surfaces
/// as an external-service failure on the first call.
pub fn create_service(config: HalalScanConfig) -> HalalScanService {
    let llm_client = GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model);
    Service::new(llm_client)
}
