use ideabox_core::{config::Credentials, gateway::GenerationGateway, registry::ModelRegistry};
use reqwest::Client as HttpClient;

use crate::{AdapterBuilder, DeepSeekAdapter, TongyiAdapter};

/// Assemble a [`GenerationGateway`] with both adapters sharing one
/// connection pool.
///
/// Both adapters are always registered; the registry decides which models
/// are selectable, and an adapter without a key reports `API_KEY_MISSING`.
pub fn gateway_from_credentials(credentials: Credentials, http: HttpClient) -> GenerationGateway {
    let deepseek: DeepSeekAdapter = AdapterBuilder::from_credentials(&credentials)
        .with_http(http.clone())
        .build();
    let tongyi: TongyiAdapter = AdapterBuilder::from_credentials(&credentials)
        .with_http(http)
        .build();

    tracing::info!(
        providers = ?credentials.configured().collect::<Vec<_>>(),
        "generation gateway ready"
    );

    GenerationGateway::new(ModelRegistry::new(credentials))
        .with_adapter(deepseek)
        .with_adapter(tongyi)
}

/// [`gateway_from_credentials`] fed from the process environment.
pub fn gateway_from_env() -> GenerationGateway {
    gateway_from_credentials(Credentials::from_env(), HttpClient::new())
}
