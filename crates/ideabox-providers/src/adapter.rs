use std::{env, marker::PhantomData};

use ideabox_core::{config::Credentials, model::ProviderId};
use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::client::ProviderClient;

/// Implemented by every adapter so one [`AdapterBuilder`] serves them all.
pub trait BuildAdapter: Sized {
    const PROVIDER: ProviderId;

    /// How to find the human-readable message in this provider's error body.
    fn error_detail(body: &Value) -> Option<String>;

    fn from_client(client: ProviderClient) -> Self;
}

/// Builder for any [`BuildAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use ideabox_providers::{AdapterBuilder, DeepSeekAdapter};
///
/// let deepseek: DeepSeekAdapter = AdapterBuilder::new_from_env().build();
/// ```
///
/// A missing key is **not** a build error: the adapter is still created and
/// reports `API_KEY_MISSING` on its first call, before any network I/O.
pub struct AdapterBuilder<A> {
    api_key: Option<String>,
    base_url: Option<String>,
    http: Option<HttpClient>,
    _adapter: PhantomData<fn() -> A>,
}

impl<A> Default for AdapterBuilder<A> {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            http: None,
            _adapter: PhantomData,
        }
    }
}

impl<A: BuildAdapter> AdapterBuilder<A> {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the provider's key and optional base URL override from the
    /// environment (`DEEPSEEK_API_KEY` / `DEEPSEEK_BASE_URL`, …).
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(A::PROVIDER.credential_env()).ok(),
            base_url: env::var(A::PROVIDER.base_url_env())
                .ok()
                .filter(|url| !url.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Take key and endpoint from already loaded [`Credentials`].
    pub fn from_credentials(credentials: &Credentials) -> Self {
        let settings = credentials.get(A::PROVIDER);
        Self {
            api_key: settings.map(|s| s.api_key.clone()),
            base_url: settings.map(|s| s.base_url.clone()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Share a connection pool (or custom proxy / TLS / timeout settings).
    pub fn with_http(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> A {
        let client = ProviderClient::with_http(
            A::PROVIDER,
            self.api_key,
            self.http.unwrap_or_default(),
            self.base_url,
            A::error_detail,
        );
        A::from_client(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeepSeekAdapter, TongyiAdapter};

    #[test]
    fn credentials_feed_the_builder() {
        let credentials = Credentials::empty().with_provider(
            ProviderId::Tongyi,
            "sk-ty",
            "http://127.0.0.1:9999/api/v1/",
        );

        let tongyi: TongyiAdapter = AdapterBuilder::from_credentials(&credentials).build();
        assert!(tongyi.client().has_api_key());
        assert_eq!(tongyi.client().base_url(), "http://127.0.0.1:9999/api/v1");

        let deepseek: DeepSeekAdapter = AdapterBuilder::from_credentials(&credentials).build();
        assert!(!deepseek.client().has_api_key());
        assert_eq!(deepseek.client().base_url(), "https://api.deepseek.com/v1");
    }
}
