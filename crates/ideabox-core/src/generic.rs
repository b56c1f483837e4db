//! Provider-agnostic request and response types.
//!
//! They mirror the concepts every supported provider shares: a list of chat
//! messages in, one text completion out. Adapters translate them into their
//! own wire structs and back.
//!
//! ## When to add more fields?
//!
//! Only if the additional data is **required by every back-end** or is
//! **fundamentally provider-independent**. Otherwise extend the adapter's
//! wire type instead.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    error::{GenerationError, Result},
    model::{ModelDescriptor, ProviderId},
};

/// Chat roles accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Global behaviour and style guidelines.
    System,
    /// Messages originating from the human user.
    User,
    /// Earlier replies produced by the model.
    Assistant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(content: impl Into<String>, role: Role) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(content, Role::System)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Role::User)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, Role::Assistant)
    }
}

/// Per-request overrides for the descriptor's sampling defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
}

impl SamplingOverrides {
    /// Fill every unset knob from `model`'s defaults.
    pub fn resolve(&self, model: &ModelDescriptor) -> Sampling {
        Sampling {
            temperature: self.temperature.unwrap_or(model.temperature),
            max_tokens: self.max_tokens.unwrap_or(model.max_tokens),
            top_p: self.top_p.unwrap_or(model.top_p),
            frequency_penalty: self.frequency_penalty.unwrap_or(model.frequency_penalty),
            presence_penalty: self.presence_penalty.unwrap_or(model.presence_penalty),
        }
    }
}

/// Fully resolved sampling parameters, ready to be put on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

/// Normalised input for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub messages: Vec<Message>,
    /// Wire model id; `None` selects the registry default.
    pub model: Option<String>,
    pub sampling: SamplingOverrides,
    /// Accepted for compatibility, never honoured: adapters always request a
    /// complete, non-streamed reply.
    pub stream: Option<bool>,
}

impl GenerationRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: None,
            sampling: SamplingOverrides::default(),
            stream: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingOverrides) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.sampling.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.sampling.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }

    /// Reject requests that must never reach the network.
    ///
    /// # Errors
    ///
    /// * [`GenerationError::InvalidRequest`] – no messages at all.
    /// * [`GenerationError::InvalidMessage`] – a message with blank content.
    pub fn validate(&self) -> Result<()> {
        validate_messages(&self.messages)
    }
}

/// Shared by [`GenerationRequest::validate`] and the route layer.
pub fn validate_messages(messages: &[Message]) -> Result<()> {
    if messages.is_empty() {
        return Err(GenerationError::InvalidRequest(
            "messages must not be empty".into(),
        ));
    }
    if let Some(index) = messages.iter().position(|m| m.content.trim().is_empty()) {
        return Err(GenerationError::InvalidMessage(format!(
            "message {index} has empty content"
        )));
    }
    Ok(())
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Normalised output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub content: String,
    /// Wire id of the model that produced `content`.
    pub model: String,
    pub provider: ProviderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, model::QWEN_PLUS};

    #[test]
    fn empty_messages_are_invalid_request() {
        let err = GenerationRequest::new(vec![]).validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn blank_content_is_invalid_message() {
        let request = GenerationRequest::new(vec![Message::system("hi"), Message::user("  ")]);
        let err = request.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidMessage);
        assert!(err.to_string().contains("message 1"));
    }

    #[test]
    fn overrides_win_over_descriptor_defaults() {
        let overrides = SamplingOverrides {
            temperature: Some(0.8),
            max_tokens: Some(100),
            ..Default::default()
        };
        let sampling = overrides.resolve(&QWEN_PLUS);
        assert_eq!(sampling.temperature, 0.8);
        assert_eq!(sampling.max_tokens, 100);
        assert_eq!(sampling.top_p, 0.9);
        assert_eq!(sampling.presence_penalty, 0.0);
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = GenerationResponse {
            content: "ok".into(),
            model: "qwen-plus".into(),
            provider: ProviderId::Tongyi,
            usage: Some(UsageReport {
                prompt_tokens: 3,
                completion_tokens: 2,
                total_tokens: 5,
            }),
            finish_reason: Some("stop".into()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["provider"], "tongyi");
        assert_eq!(json["usage"]["promptTokens"], 3);
        assert_eq!(json["finishReason"], "stop");
    }
}
