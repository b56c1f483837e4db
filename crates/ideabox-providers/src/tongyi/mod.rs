//! Tongyi (通义千问) adapter over DashScope's native
//! `POST {base}/services/aigc/text-generation/generation`.

use ideabox_core::{
    error::Result,
    generic::{GenerationRequest, GenerationResponse, UsageReport},
    model::{ModelDescriptor, ProviderId},
    provider::{BoxFuture, WireAdapter},
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::{adapter::BuildAdapter, client::ProviderClient};

pub mod api;

use api::{ErrorBody, Input, InputMessage, Parameters, TextGenerationRequest, TextGenerationResponse};

const GENERATION_PATH: &str = "/services/aigc/text-generation/generation";
const SSE_HEADER: &str = "x-dashscope-sse";

#[derive(Debug, Clone)]
pub struct TongyiAdapter {
    client: ProviderClient,
}

impl TongyiAdapter {
    pub fn client(&self) -> &ProviderClient {
        &self.client
    }
}

impl BuildAdapter for TongyiAdapter {
    const PROVIDER: ProviderId = ProviderId::Tongyi;

    fn error_detail(body: &Value) -> Option<String> {
        serde_json::from_value::<ErrorBody>(body.clone()).ok()?.message
    }

    fn from_client(client: ProviderClient) -> Self {
        Self { client }
    }
}

impl WireAdapter for TongyiAdapter {
    type WireRequest = TextGenerationRequest;
    type WireResponse = TextGenerationResponse;

    const PROVIDER: ProviderId = ProviderId::Tongyi;

    fn translate_request(
        &self,
        request: &GenerationRequest,
        model: &ModelDescriptor,
    ) -> TextGenerationRequest {
        let sampling = request.sampling.resolve(model);
        TextGenerationRequest {
            model: model.model.to_owned(),
            input: Input {
                messages: request.messages.iter().map(InputMessage::from).collect(),
            },
            parameters: Parameters {
                temperature: sampling.temperature,
                max_tokens: sampling.max_tokens,
                top_p: sampling.top_p,
                frequency_penalty: sampling.frequency_penalty,
                presence_penalty: sampling.presence_penalty,
            },
        }
    }

    fn call<'a>(
        &'a self,
        request: TextGenerationRequest,
    ) -> BoxFuture<'a, Result<TextGenerationResponse>> {
        Box::pin(async move {
            let mut headers = HeaderMap::new();
            headers.insert(
                HeaderName::from_static(SSE_HEADER),
                HeaderValue::from_static("disable"),
            );
            let response = self
                .client
                .post_json(GENERATION_PATH, headers, &request)
                .await?;
            Ok(response)
        })
    }

    fn translate_response(
        &self,
        response: TextGenerationResponse,
        model: &ModelDescriptor,
    ) -> Result<GenerationResponse> {
        let output = response.output.unwrap_or_default();
        let first_choice = output.choices.into_iter().next();

        let finish_reason = output
            .finish_reason
            .or_else(|| first_choice.as_ref().and_then(|c| c.finish_reason.clone()));
        let content = output
            .text
            .filter(|text| !text.is_empty())
            .or_else(|| first_choice.and_then(|c| c.message).and_then(|m| m.content))
            .unwrap_or_default();

        Ok(GenerationResponse {
            content,
            model: model.model.to_owned(),
            provider: ProviderId::Tongyi,
            usage: response.usage.map(|u| UsageReport {
                prompt_tokens: u.input_tokens,
                completion_tokens: u.output_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use ideabox_core::{
        error::ErrorCode,
        generic::Message,
        model::{QWEN_MAX, QWEN_TURBO},
        provider::ProviderAdapter,
    };

    use super::*;
    use crate::{
        adapter::AdapterBuilder,
        test_support::{closed_port, spawn_single_response_server},
    };

    fn adapter(base: String) -> TongyiAdapter {
        AdapterBuilder::new()
            .with_api_key("sk-tongyi")
            .with_base_url(base)
            .build()
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(vec![
            Message::system("你是一个专业的品牌命名专家。"),
            Message::user("产品描述：手冲咖啡"),
        ])
    }

    #[test]
    fn payload_nests_messages_and_parameters() {
        let payload = adapter("http://unused".into())
            .translate_request(&request().with_temperature(0.7).with_max_tokens(50), &QWEN_MAX);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["model"], "qwen-max");
        assert_eq!(json["input"]["messages"][0]["role"], "system");
        assert_eq!(json["input"]["messages"][1]["content"], "产品描述：手冲咖啡");
        assert_eq!(json["parameters"]["temperature"], 0.7);
        assert_eq!(json["parameters"]["max_tokens"], 50);
        assert_eq!(json["parameters"]["top_p"], 0.9);
    }

    #[test]
    fn roles_use_the_shared_wire_names() {
        let history = GenerationRequest::new(vec![
            Message::user("起个名字"),
            Message::assistant("豆语"),
        ]);
        let payload = adapter("http://unused".into()).translate_request(&history, &QWEN_TURBO);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["input"]["messages"][0]["role"], "user");
        assert_eq!(json["input"]["messages"][1]["role"], "assistant");
    }

    #[tokio::test]
    async fn text_output_is_normalised() {
        let (base, captured) = spawn_single_response_server(
            "200 OK",
            r#"{"request_id":"r1","output":{"text":"豆语","finish_reason":"stop"},"usage":{"input_tokens":20,"output_tokens":2,"total_tokens":22}}"#,
        )
        .await;

        let response = adapter(base).generate(&request(), &QWEN_TURBO).await.unwrap();

        assert_eq!(response.content, "豆语");
        assert_eq!(response.model, "qwen-turbo");
        assert_eq!(response.provider, ProviderId::Tongyi);
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 20);
        assert_eq!(usage.completion_tokens, 2);
        assert_eq!(usage.total_tokens, 22);

        let captured = captured.await.unwrap();
        assert!(
            captured
                .request_line()
                .starts_with("POST /services/aigc/text-generation/generation")
        );
        assert_eq!(captured.header("x-dashscope-sse"), Some("disable"));
        assert_eq!(captured.header("authorization"), Some("Bearer sk-tongyi"));
        assert_eq!(captured.json()["input"]["messages"][1]["role"], "user");
    }

    #[tokio::test]
    async fn message_format_output_is_understood() {
        let (base, _captured) = spawn_single_response_server(
            "200 OK",
            r#"{"output":{"choices":[{"message":{"role":"assistant","content":"一杯好咖啡"},"finish_reason":"length"}]}}"#,
        )
        .await;

        let response = adapter(base).generate(&request(), &QWEN_TURBO).await.unwrap();
        assert_eq!(response.content, "一杯好咖啡");
        assert_eq!(response.finish_reason.as_deref(), Some("length"));
        assert!(response.usage.is_none());
    }

    #[tokio::test]
    async fn upstream_error_message_is_embedded() {
        let (base, _captured) = spawn_single_response_server(
            "401 Unauthorized",
            r#"{"code":"InvalidApiKey","message":"Invalid API-key provided.","request_id":"r2"}"#,
        )
        .await;

        let err = adapter(base).generate(&request(), &QWEN_TURBO).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ApiError);
        assert_eq!(
            err.to_string(),
            "Tongyi API error: 401 - Invalid API-key provided."
        );
    }

    #[tokio::test]
    async fn empty_error_body_never_panics() {
        let (base, _captured) = spawn_single_response_server("429 Too Many Requests", "").await;
        let err = adapter(base).generate(&request(), &QWEN_TURBO).await.unwrap_err();
        assert_eq!(err.to_string(), "Tongyi API error: 429 - Too Many Requests");
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let adapter: TongyiAdapter = AdapterBuilder::new().with_base_url(closed_port().await).build();
        let err = adapter.generate(&request(), &QWEN_TURBO).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiKeyMissing);
    }
}
