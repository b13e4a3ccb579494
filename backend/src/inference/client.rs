use async_trait::async_trait;

use crate::prompt::payload::PromptPayload;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Failed to serialize request: {0}")]
    Serialization(String),
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Access denied by inference service: {0}")]
    Unauthorized(String),
    #[error("Request throttled by inference service: {0}")]
    Throttled(String),
    #[error("Request rejected by inference service: {0}")]
    RequestRejected(String),
    #[error("Inference service error: {0}")]
    Service(String),
    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),
}

/// A remote model that answers one prompt with one block of text.
///
/// Calls are single-shot. Implementations must not retry.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `payload` and returns the text of the first content block.
    async fn invoke(&self, payload: &PromptPayload) -> Result<String, InferenceError>;

    fn model_id(&self) -> &str;
}
