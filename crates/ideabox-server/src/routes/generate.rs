//! `/api/ai/generate`: free-form messages in, one completion out.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use ideabox_core::{
    ErrorCode,
    generic::{GenerationRequest, GenerationResponse, Message, Role, SamplingOverrides},
    provider::ModelCatalog,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    AppState,
    envelope::{ApiError, ApiResponse},
};

/// One entry of `messages`, kept as raw JSON so that a malformed entry is
/// reported as `INVALID_MESSAGE` instead of failing body extraction.
fn parse_message(entry: &Value) -> Option<Message> {
    let entry = entry.as_object()?;
    let role = match entry.get("role")?.as_str()? {
        "system" => Role::System,
        "user" => Role::User,
        "assistant" => Role::Assistant,
        _ => return None,
    };
    let content = entry
        .get("content")?
        .as_str()
        .filter(|c| !c.trim().is_empty())?;
    Some(Message::new(content, role))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    #[serde(default)]
    messages: Option<Vec<Value>>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    max_tokens: Option<u32>,
    #[serde(default)]
    top_p: Option<f64>,
    #[serde(default)]
    frequency_penalty: Option<f64>,
    #[serde(default)]
    presence_penalty: Option<f64>,
    #[serde(default)]
    stream: Option<bool>,
}

impl GenerateInput {
    /// Route-level validation; nothing invalid ever reaches the generator.
    fn into_request(self) -> Result<GenerationRequest, ApiError> {
        let messages = self.messages.unwrap_or_default();
        if messages.is_empty() {
            return Err(ApiError::bad_request(
                ErrorCode::InvalidRequest,
                "消息数组不能为空",
            ));
        }
        let messages = messages
            .iter()
            .map(parse_message)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ApiError::bad_request(ErrorCode::InvalidMessage, "消息格式不正确"))?;

        let request = GenerationRequest {
            messages,
            model: self.model.filter(|m| !m.is_empty()),
            sampling: SamplingOverrides {
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                top_p: self.top_p,
                frequency_penalty: self.frequency_penalty,
                presence_penalty: self.presence_penalty,
            },
            stream: self.stream,
        };
        Ok(request)
    }
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateInput>, JsonRejection>,
) -> Result<ApiResponse<GenerationResponse>, ApiError> {
    let Json(input) = payload?;
    let request = input.into_request().inspect_err(|err| {
        tracing::debug!(code = %err.code(), "generate request rejected");
    })?;

    match state.generator.generate_text(request).await {
        Ok(response) => Ok(ApiResponse(response)),
        Err(err) => {
            tracing::error!(code = %err.code(), error = %err, "generation failed");
            Err(ApiError::from_generation(&err))
        }
    }
}

pub async fn list_models(State(state): State<AppState>) -> ApiResponse<ModelCatalog> {
    ApiResponse(state.generator.catalog())
}
