//! DeepSeek adapter: OpenAI-compatible `POST {base}/chat/completions`.

use ideabox_core::{
    error::Result,
    generic::{GenerationRequest, GenerationResponse, UsageReport},
    model::{ModelDescriptor, ProviderId},
    provider::{BoxFuture, WireAdapter},
};
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::{adapter::BuildAdapter, client::ProviderClient};

pub mod api;

use api::{ChatCompletionMessage, ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Clone)]
pub struct DeepSeekAdapter {
    client: ProviderClient,
}

impl DeepSeekAdapter {
    pub fn client(&self) -> &ProviderClient {
        &self.client
    }
}

impl BuildAdapter for DeepSeekAdapter {
    const PROVIDER: ProviderId = ProviderId::DeepSeek;

    fn error_detail(body: &Value) -> Option<String> {
        serde_json::from_value::<ErrorEnvelope>(body.clone())
            .ok()?
            .error?
            .message
    }

    fn from_client(client: ProviderClient) -> Self {
        Self { client }
    }
}

impl WireAdapter for DeepSeekAdapter {
    type WireRequest = ChatCompletionRequest;
    type WireResponse = ChatCompletionResponse;

    const PROVIDER: ProviderId = ProviderId::DeepSeek;

    fn translate_request(
        &self,
        request: &GenerationRequest,
        model: &ModelDescriptor,
    ) -> ChatCompletionRequest {
        let sampling = request.sampling.resolve(model);
        ChatCompletionRequest {
            model: model.model.to_owned(),
            messages: request.messages.iter().map(ChatCompletionMessage::from).collect(),
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
            top_p: sampling.top_p,
            frequency_penalty: sampling.frequency_penalty,
            presence_penalty: sampling.presence_penalty,
            stream: false,
        }
    }

    fn call<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'a, Result<ChatCompletionResponse>> {
        Box::pin(async move {
            let response = self
                .client
                .post_json(CHAT_COMPLETIONS_PATH, HeaderMap::new(), &request)
                .await?;
            Ok(response)
        })
    }

    fn translate_response(
        &self,
        mut response: ChatCompletionResponse,
        model: &ModelDescriptor,
    ) -> Result<GenerationResponse> {
        let first = (!response.choices.is_empty()).then(|| response.choices.swap_remove(0));
        let (content, finish_reason) = match first {
            Some(choice) => (
                choice.message.and_then(|m| m.content).unwrap_or_default(),
                choice.finish_reason,
            ),
            None => (String::new(), None),
        };

        Ok(GenerationResponse {
            content,
            model: model.model.to_owned(),
            provider: ProviderId::DeepSeek,
            usage: response.usage.map(|u| UsageReport {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason,
        })
    }
}
