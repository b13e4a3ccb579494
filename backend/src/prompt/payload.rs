use serde::Serialize;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Request body for an Anthropic messages call on Bedrock.
///
/// Fields are private: a payload is assembled once by the builder and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptPayload {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    role: Role,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    Image { source: ImageSource },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    Base64 { media_type: String, data: String },
}

impl PromptPayload {
    pub fn single_user_turn(content: Vec<ContentBlock>) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: MAX_OUTPUT_TOKENS,
            messages: vec![Message {
                role: Role::User,
                content,
            }],
        }
    }

    pub fn anthropic_version(&self) -> &str {
        self.anthropic_version
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Text of every text block, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .flat_map(|m| m.content.iter())
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Image { .. } => None,
            })
    }
}

impl Message {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn base64_image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        ContentBlock::Image {
            source: ImageSource::Base64 {
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }
}
