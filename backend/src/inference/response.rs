use serde::Deserialize;

use super::client::InferenceError;

/// The part of a messages response this service reads.
#[derive(Debug, Deserialize)]
pub struct InferenceResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl InferenceResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, InferenceError> {
        serde_json::from_slice(body).map_err(|e| InferenceError::MalformedResponse(e.to_string()))
    }

    /// Takes `content[0].text`. Later blocks are ignored.
    pub fn into_first_text(self) -> Result<String, InferenceError> {
        let first = self.content.into_iter().next().ok_or_else(|| {
            InferenceError::MalformedResponse("response has no content blocks".into())
        })?;

        match first.text {
            Some(text) => Ok(text),
            None => Err(InferenceError::MalformedResponse(format!(
                "first content block has no text (type: {})",
                first.kind.as_deref().unwrap_or("unknown")
            ))),
        }
    }
}
