use crate::domain::classification::ports::LLMClient;

/// Service container wiring domain logic to its collaborators.
///
/// Domain service traits are implemented for this struct per module
/// (see `classification::services`). The composition root decides the
/// concrete `LLM` type.
#[derive(Debug, Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
