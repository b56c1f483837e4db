//! The single call-in point for every generation.
//!
//! [`GenerationGateway`] owns a [`ModelRegistry`] and one
//! [`ProviderAdapter`] per provider. It resolves the model, dispatches to
//! the matching adapter and folds adapter failures into the small error
//! taxonomy callers see.
//!
//! ```rust
//! use ideabox_core::{config::Credentials, gateway::GenerationGateway, registry::ModelRegistry};
//!
//! let gateway = GenerationGateway::new(ModelRegistry::new(Credentials::empty()));
//! assert!(gateway.registry().list_available().is_empty());
//! ```
use std::{collections::HashMap, sync::Arc};

use crate::{
    error::{GenerationError, Result},
    generic::{GenerationRequest, GenerationResponse},
    model::{ModelDescriptor, ProviderId},
    provider::{BoxFuture, ModelCatalog, ProviderAdapter, TextGeneration},
    registry::ModelRegistry,
};

/// Cheap to clone: the registry is small and adapters sit behind `Arc`.
#[derive(Clone)]
pub struct GenerationGateway {
    registry: ModelRegistry,
    adapters: HashMap<ProviderId, Arc<dyn ProviderAdapter>>,
}

impl std::fmt::Debug for GenerationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationGateway")
            .field("registry", &self.registry)
            .field("adapters", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GenerationGateway {
    /// A gateway with no adapters registered yet.
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry,
            adapters: HashMap::new(),
        }
    }

    /// Register `adapter` for its provider, replacing any previous one.
    pub fn with_adapter(mut self, adapter: impl ProviderAdapter + 'static) -> Self {
        self.adapters.insert(adapter.provider(), Arc::new(adapter));
        self
    }

    /// Same as [`Self::with_adapter`] for an already shared adapter.
    pub fn with_shared_adapter(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.adapters.insert(adapter.provider(), adapter);
        self
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Resolve, dispatch, classify.
    ///
    /// # Errors
    ///
    /// * `INVALID_REQUEST` / `INVALID_MESSAGE` – rejected before dispatch.
    /// * `NO_PROVIDER_CONFIGURED` – no credential at all.
    /// * `MODEL_NOT_FOUND` – the override is not an available model.
    /// * `API_KEY_MISSING`, `API_ERROR` – passed through from the adapter.
    /// * `INTERNAL_ERROR` – anything else the adapter raised.
    pub async fn generate_text(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        request.validate()?;

        if self.registry.list_available().is_empty() {
            tracing::warn!("generation refused: no provider credential configured");
            return Err(GenerationError::NoProviderConfigured);
        }

        let model = self.resolve_model(&request)?;
        let Some(adapter) = self.adapters.get(&model.provider) else {
            tracing::warn!(provider = %model.provider, "no adapter registered for provider");
            return Err(GenerationError::ApiKeyMissing {
                provider: model.provider,
            });
        };

        if request.stream == Some(true) {
            tracing::debug!("streaming requested; replying with a complete response");
        }

        tracing::debug!(
            provider = %model.provider,
            model = model.model,
            messages = request.messages.len(),
            "dispatching generation"
        );

        adapter
            .generate(&request, model)
            .await
            .map_err(|err| classify(err, model))
    }

    /// Models available with the current credentials and the default pick.
    pub fn catalog(&self) -> ModelCatalog {
        let models = self.registry.list_available();
        let default_model = (!models.is_empty()).then(|| self.registry.pick_default().model);
        ModelCatalog {
            models: models.into_iter().map(Into::into).collect(),
            default_model,
        }
    }

    fn resolve_model(&self, request: &GenerationRequest) -> Result<&'static ModelDescriptor> {
        match request.model.as_deref() {
            Some(id) => self.registry.resolve(id),
            None => self.registry.configured_default(),
        }
    }
}

/// Fold an adapter failure into the caller-facing taxonomy.
fn classify(err: GenerationError, model: &ModelDescriptor) -> GenerationError {
    match err {
        GenerationError::ApiKeyMissing { .. } | GenerationError::Api { .. } => {
            tracing::warn!(provider = %model.provider, model = model.model, error = %err, "generation failed");
            err
        }
        other => {
            tracing::error!(provider = %model.provider, model = model.model, error = %other, "generation failed unexpectedly");
            GenerationError::Internal("internal server error".into())
        }
    }
}

impl TextGeneration for GenerationGateway {
    fn generate_text<'a>(
        &'a self,
        request: GenerationRequest,
    ) -> BoxFuture<'a, Result<GenerationResponse>> {
        Box::pin(GenerationGateway::generate_text(self, request))
    }

    fn catalog(&self) -> ModelCatalog {
        GenerationGateway::catalog(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        config::Credentials,
        error::ErrorCode,
        generic::Message,
        provider::{PromptExecution, WireAdapter},
        template::{IntoPrompt, PromptTemplate, TaskBudget},
    };

    enum Outcome {
        Text(&'static str),
        Status(u16),
        Transport,
    }

    /// Records every dispatched request and answers with a canned outcome.
    struct StubAdapter {
        provider: ProviderId,
        outcome: Outcome,
        calls: Arc<Mutex<Vec<(GenerationRequest, &'static str)>>>,
    }

    impl StubAdapter {
        fn new(provider: ProviderId, outcome: Outcome) -> Self {
            Self {
                provider,
                outcome,
                calls: Arc::default(),
            }
        }
    }

    impl ProviderAdapter for StubAdapter {
        fn provider(&self) -> ProviderId {
            self.provider
        }

        fn generate<'a>(
            &'a self,
            request: &'a GenerationRequest,
            model: &'static ModelDescriptor,
        ) -> BoxFuture<'a, Result<GenerationResponse>> {
            self.calls
                .lock()
                .unwrap()
                .push((request.clone(), model.model));
            let result = match self.outcome {
                Outcome::Text(text) => Ok(GenerationResponse {
                    content: text.to_owned(),
                    model: model.model.to_owned(),
                    provider: model.provider,
                    usage: None,
                    finish_reason: Some("stop".into()),
                }),
                Outcome::Status(status) => Err(GenerationError::Api {
                    provider: model.provider,
                    status,
                    message: format!("{} API error: {status} - Unauthorized", model.provider.display_name()),
                }),
                Outcome::Transport => Err(GenerationError::transport(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))),
            };
            Box::pin(async move { result })
        }
    }

    /// Wire-level stub to exercise the `WireAdapter` blanket impl.
    struct EchoWire;

    impl WireAdapter for EchoWire {
        type WireRequest = String;
        type WireResponse = String;
        const PROVIDER: ProviderId = ProviderId::DeepSeek;

        fn translate_request(&self, request: &GenerationRequest, model: &ModelDescriptor) -> String {
            format!("{}:{}", model.model, request.messages[0].content)
        }

        fn call<'a>(&'a self, request: String) -> BoxFuture<'a, Result<String>> {
            Box::pin(async move { Ok(request.to_uppercase()) })
        }

        fn translate_response(&self, response: String, model: &ModelDescriptor) -> Result<GenerationResponse> {
            Ok(GenerationResponse {
                content: response,
                model: model.model.to_owned(),
                provider: Self::PROVIDER,
                usage: None,
                finish_reason: None,
            })
        }
    }

    fn registry(providers: &[ProviderId]) -> ModelRegistry {
        let credentials = providers
            .iter()
            .fold(Credentials::empty(), |c, p| c.with_key(*p, "sk-test"));
        ModelRegistry::new(credentials)
    }

    fn hello() -> GenerationRequest {
        GenerationRequest::new(vec![Message::user("hello")])
    }

    #[tokio::test]
    async fn no_override_uses_pick_default() {
        let stub = StubAdapter::new(ProviderId::Tongyi, Outcome::Text("hi"));
        let calls = stub.calls.clone();
        let gateway = GenerationGateway::new(registry(&[ProviderId::DeepSeek, ProviderId::Tongyi]))
            .with_adapter(stub)
            .with_adapter(StubAdapter::new(ProviderId::DeepSeek, Outcome::Text("nope")));

        let response = gateway.generate_text(hello()).await.unwrap();

        assert_eq!(response.content, "hi");
        assert_eq!(response.model, gateway.registry().pick_default().model);
        assert_eq!(response.provider, ProviderId::Tongyi);
        assert_eq!(calls.lock().unwrap()[0].1, "qwen-turbo");
    }

    #[tokio::test]
    async fn explicit_model_is_resolved() {
        let stub = StubAdapter::new(ProviderId::DeepSeek, Outcome::Text("ok"));
        let calls = stub.calls.clone();
        let gateway = GenerationGateway::new(registry(&[ProviderId::DeepSeek])).with_adapter(stub);

        let response = gateway
            .generate_text(hello().with_model("deepseek-coder"))
            .await
            .unwrap();
        assert_eq!(response.model, "deepseek-coder");
        assert_eq!(calls.lock().unwrap().len(), 1);

        let err = gateway
            .generate_text(hello().with_model("qwen-max"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ModelNotFound);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn nothing_configured_never_dispatches() {
        let stub = StubAdapter::new(ProviderId::Tongyi, Outcome::Text("hi"));
        let calls = stub.calls.clone();
        let gateway = GenerationGateway::new(registry(&[])).with_adapter(stub);

        let err = gateway.generate_text(hello()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoProviderConfigured);

        let err = gateway
            .generate_text(hello().with_model("qwen-turbo"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoProviderConfigured);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_status_stays_api_error() {
        let gateway = GenerationGateway::new(registry(&[ProviderId::DeepSeek]))
            .with_adapter(StubAdapter::new(ProviderId::DeepSeek, Outcome::Status(401)));

        let err = gateway.generate_text(hello()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiError);
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn transport_failure_becomes_internal() {
        let gateway = GenerationGateway::new(registry(&[ProviderId::Tongyi]))
            .with_adapter(StubAdapter::new(ProviderId::Tongyi, Outcome::Transport));

        let err = gateway.generate_text(hello()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(!err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn missing_adapter_is_missing_key() {
        let gateway = GenerationGateway::new(registry(&[ProviderId::Tongyi]));
        let err = gateway.generate_text(hello()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiKeyMissing);
    }

    #[tokio::test]
    async fn invalid_request_rejected_before_dispatch() {
        let stub = StubAdapter::new(ProviderId::Tongyi, Outcome::Text("hi"));
        let calls = stub.calls.clone();
        let gateway = GenerationGateway::new(registry(&[ProviderId::Tongyi])).with_adapter(stub);

        let err = gateway
            .generate_text(GenerationRequest::new(vec![]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn wire_adapters_plug_in_through_blanket_impl() {
        let gateway = GenerationGateway::new(registry(&[ProviderId::DeepSeek])).with_adapter(EchoWire);
        let response = gateway.generate_text(hello()).await.unwrap();
        assert_eq!(response.content, "DEEPSEEK-CHAT:HELLO");
    }

    struct Shout(&'static str);

    impl IntoPrompt for Shout {
        type Message = Message;
        fn into_prompt(self) -> Vec<Message> {
            vec![Message::system("shout"), Message::user(self.0)]
        }
    }

    impl PromptTemplate for Shout {
        const BUDGET: TaskBudget = TaskBudget::new(0.9, 150);
    }

    #[tokio::test]
    async fn execute_applies_budget_and_trims() {
        let stub = StubAdapter::new(ProviderId::Tongyi, Outcome::Text("  HEY!\n"));
        let calls = stub.calls.clone();
        let gateway: Arc<dyn TextGeneration> =
            Arc::new(GenerationGateway::new(registry(&[ProviderId::Tongyi])).with_adapter(stub));

        let output = gateway.execute(Shout("hey"), None).await.unwrap();
        assert_eq!(output.text, "HEY!");
        assert_eq!(output.provider, ProviderId::Tongyi);

        let calls = calls.lock().unwrap();
        let sampling = calls[0].0.sampling;
        assert_eq!(sampling.temperature, Some(0.9));
        assert_eq!(sampling.max_tokens, Some(150));
    }

    #[test]
    fn catalog_has_no_default_when_empty() {
        let catalog = GenerationGateway::new(registry(&[])).catalog();
        assert!(catalog.models.is_empty());
        assert_eq!(catalog.default_model, None);

        let catalog = GenerationGateway::new(registry(&[ProviderId::DeepSeek])).catalog();
        assert_eq!(catalog.models.len(), 2);
        assert_eq!(catalog.default_model, Some("deepseek-chat"));
    }
}
