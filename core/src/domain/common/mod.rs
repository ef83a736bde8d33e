pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct HalalScanConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}
