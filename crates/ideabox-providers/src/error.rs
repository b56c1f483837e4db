use ideabox_core::{error::GenerationError, model::ProviderId};
use reqwest::StatusCode;

/// Every failure mode an adapter's HTTP round-trip can hit.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{} API key is not configured (set `{}`)", .0.display_name(), .0.credential_env())]
    MissingApiKey(ProviderId),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode body: {0}")]
    Serde(#[from] serde_json::Error),

    /// Non-success status. `detail` is the provider's own message when the
    /// error body could be parsed.
    #[error("{} returned non-success status {status}", .provider.display_name())]
    Api {
        provider: ProviderId,
        status: StatusCode,
        detail: Option<String>,
    },
}

impl ProviderError {
    /// `"<Provider> API error: <status> - <detail or status text>"`.
    pub fn api_message(provider: ProviderId, status: StatusCode, detail: Option<&str>) -> String {
        let detail = detail
            .filter(|d| !d.trim().is_empty())
            .or(status.canonical_reason())
            .unwrap_or("Unknown Status");
        format!(
            "{} API error: {} - {}",
            provider.display_name(),
            status.as_u16(),
            detail
        )
    }
}

impl From<ProviderError> for GenerationError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::MissingApiKey(provider) => GenerationError::ApiKeyMissing { provider },
            ProviderError::Api {
                provider,
                status,
                detail,
            } => GenerationError::Api {
                provider,
                status: status.as_u16(),
                message: ProviderError::api_message(provider, status, detail.as_deref()),
            },
            other => GenerationError::Transport(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use ideabox_core::error::ErrorCode;

    use super::*;

    #[test]
    fn api_message_prefers_provider_detail() {
        let msg = ProviderError::api_message(
            ProviderId::DeepSeek,
            StatusCode::UNAUTHORIZED,
            Some("Authentication Fails"),
        );
        assert_eq!(msg, "DeepSeek API error: 401 - Authentication Fails");
    }

    #[test]
    fn api_message_falls_back_to_status_text() {
        let msg = ProviderError::api_message(ProviderId::Tongyi, StatusCode::BAD_GATEWAY, Some(" "));
        assert_eq!(msg, "Tongyi API error: 502 - Bad Gateway");
    }

    #[test]
    fn conversion_keeps_the_taxonomy() {
        let err: GenerationError = ProviderError::MissingApiKey(ProviderId::Tongyi).into();
        assert_eq!(err.code(), ErrorCode::ApiKeyMissing);

        let err: GenerationError = ProviderError::Api {
            provider: ProviderId::DeepSeek,
            status: StatusCode::TOO_MANY_REQUESTS,
            detail: None,
        }
        .into();
        assert_eq!(err.code(), ErrorCode::ApiError);
        assert!(err.to_string().contains("429"));
    }
}
