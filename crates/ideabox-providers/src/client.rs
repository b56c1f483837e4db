use ideabox_core::model::ProviderId;
use reqwest::{
    Client as HttpClient,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::ProviderError;

/// Pulls the provider's human-readable message out of an error body.
pub(crate) type DetailExtractor = fn(&Value) -> Option<String>;

/// Minimal JSON-over-HTTP client shared by the adapters.
///
/// * One request ▶ one response. No retry, no cache, no streaming.
/// * Shares a single `reqwest::Client`, so cloning `ProviderClient` is cheap.
/// * Holds the key as an `Option` so a missing credential surfaces as
///   [`ProviderError::MissingApiKey`] on the first call, before any I/O.
#[derive(Clone)]
pub struct ProviderClient {
    provider: ProviderId,
    api_key: Option<String>,
    http: HttpClient,
    base: String,
    error_detail: DetailExtractor,
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient")
            .field("provider", &self.provider)
            .field("has_api_key", &self.api_key.is_some())
            .field("base", &self.base)
            .finish()
    }
}

impl ProviderClient {
    /// Build with a caller-supplied `reqwest::Client` (proxy settings, custom
    /// TLS, timeouts …). `base_url` defaults to the provider's public
    /// endpoint.
    pub(crate) fn with_http(
        provider: ProviderId,
        api_key: Option<String>,
        http: HttpClient,
        base_url: Option<String>,
        error_detail: DetailExtractor,
    ) -> Self {
        let base = base_url
            .map(|url| url.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| provider.default_base_url().to_owned());
        Self {
            provider,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            http,
            base,
            error_detail,
        }
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// POST `body` as JSON to `{base}{path}` and decode the success body.
    pub(crate) async fn post_json<Req, Res>(
        &self,
        path: &str,
        extra_headers: HeaderMap,
        body: &Req,
    ) -> Result<Res, ProviderError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(self.provider))?;

        let mut headers = extra_headers;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let url = format!("{}{}", self.base, path);
        tracing::debug!(provider = %self.provider, %url, "sending upstream request");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(provider = %self.provider, status = status.as_u16(), "upstream responded");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| (self.error_detail)(&value));
            return Err(ProviderError::Api {
                provider: self.provider,
                status,
                detail,
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: Res = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}
