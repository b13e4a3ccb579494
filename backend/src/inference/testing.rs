use async_trait::async_trait;
use std::sync::Mutex;

use super::client::{InferenceClient, InferenceError};
use crate::prompt::payload::PromptPayload;

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Unauthorized,
    Transport,
    Malformed,
}

/// Records every payload it receives and answers with a canned reply.
pub struct FakeInferenceClient {
    reply: Reply,
    calls: Mutex<Vec<PromptPayload>>,
}

impl FakeInferenceClient {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    pub fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PromptPayload> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for FakeInferenceClient {
    async fn invoke(&self, payload: &PromptPayload) -> Result<String, InferenceError> {
        self.calls.lock().unwrap().push(payload.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Unauthorized => Err(InferenceError::Unauthorized(
                "The security token included in the request is invalid.".into(),
            )),
            Reply::Transport => Err(InferenceError::Transport("connection reset".into())),
            Reply::Malformed => Err(InferenceError::MalformedResponse(
                "response has no content blocks".into(),
            )),
        }
    }

    fn model_id(&self) -> &str {
        "fake-model"
    }
}
