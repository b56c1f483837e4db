//! DashScope native text-generation wire types.

use ideabox_core::generic::{Message, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TextGenerationRequest {
    pub model: String,
    pub input: Input,
    pub parameters: Parameters,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Input {
    pub messages: Vec<InputMessage>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct InputMessage {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for InputMessage {
    fn from(value: &Message) -> Self {
        Self {
            role: value.role,
            content: value.content.clone(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

/// Either `output.text` (default result format) or `output.choices`
/// (`result_format = message`) is populated.
#[derive(Debug, Deserialize)]
pub struct TextGenerationResponse {
    #[serde(default)]
    pub output: Option<Output>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Output {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// `{"code": "InvalidApiKey", "message": "...", "request_id": "..."}`
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
