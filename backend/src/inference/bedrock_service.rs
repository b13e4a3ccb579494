use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::retry::RetryConfig;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;

use super::client::{InferenceClient, InferenceError};
use super::response::InferenceResponse;
use crate::prompt::payload::PromptPayload;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

#[derive(Clone)]
pub struct BedrockService {
    client: Client,
    model_id: String,
}

impl BedrockService {
    pub fn new(client: Client, model_id: String) -> Self {
        Self { client, model_id }
    }

    /// Builds a runtime client from the shared AWS config with SDK retries
    /// switched off.
    pub fn from_sdk_config(sdk_config: &SdkConfig, model_id: String) -> Self {
        let config = aws_sdk_bedrockruntime::config::Builder::from(sdk_config)
            .retry_config(RetryConfig::disabled())
            .build();
        Self::new(Client::from_conf(config), model_id)
    }
}

#[async_trait]
impl InferenceClient for BedrockService {
    async fn invoke(&self, payload: &PromptPayload) -> Result<String, InferenceError> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| InferenceError::Serialization(e.to_string()))?;

        log::debug!(
            "Invoking model '{}': {} message(s), max_tokens {}, {} byte request",
            self.model_id,
            payload.messages().len(),
            payload.max_tokens(),
            body.len()
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(classify_sdk_error)?;

        InferenceResponse::from_slice(output.body().as_ref())?.into_first_text()
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

fn classify_sdk_error<R>(err: SdkError<InvokeModelError, R>) -> InferenceError
where
    R: std::fmt::Debug + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(context) => {
            let service_err = context.into_err();
            let detail = service_err.message().unwrap_or("no message").to_string();
            match service_err {
                InvokeModelError::AccessDeniedException(_) => InferenceError::Unauthorized(detail),
                InvokeModelError::ThrottlingException(_)
                | InvokeModelError::ServiceQuotaExceededException(_) => {
                    InferenceError::Throttled(detail)
                }
                InvokeModelError::ValidationException(_)
                | InvokeModelError::ResourceNotFoundException(_) => {
                    InferenceError::RequestRejected(detail)
                }
                other => InferenceError::Service(format!(
                    "{}: {}",
                    other.code().unwrap_or("Unknown"),
                    detail
                )),
            }
        }
        other => InferenceError::Transport(DisplayErrorContext(other).to_string()),
    }
}
