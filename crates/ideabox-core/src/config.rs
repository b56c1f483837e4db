//! Provider credentials read from the process environment.
//!
//! A provider counts as *configured* when its API key variable is present
//! and non-empty. The base URL may be overridden per provider; otherwise the
//! provider's public endpoint is used.

use crate::model::ProviderId;

/// Key and endpoint for one provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Settings for every provider that has a credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    deepseek: Option<ProviderSettings>,
    tongyi: Option<ProviderSettings>,
}

impl Credentials {
    /// No provider configured.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read `DEEPSEEK_API_KEY`, `TONGYI_API_KEY` and the optional
    /// `*_BASE_URL` overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Handy in tests, where mutating the
    /// process environment would race with other tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut credentials = Self::empty();
        for provider in ProviderId::ALL {
            let Some(api_key) = lookup(provider.credential_env()).filter(|k| !k.trim().is_empty())
            else {
                continue;
            };
            let base_url = lookup(provider.base_url_env())
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| provider.default_base_url().to_owned());
            credentials = credentials.with_provider(provider, api_key, base_url);
        }
        credentials
    }

    /// Set (or replace) the settings for `provider`. A blank key removes it.
    pub fn with_provider(
        mut self,
        provider: ProviderId,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let api_key = api_key.into();
        let settings = (!api_key.trim().is_empty()).then(|| ProviderSettings {
            api_key,
            base_url: trim_base(base_url.into()),
        });
        *self.slot_mut(provider) = settings;
        self
    }

    /// Shorthand for [`Self::with_provider`] using the default endpoint.
    pub fn with_key(self, provider: ProviderId, api_key: impl Into<String>) -> Self {
        self.with_provider(provider, api_key, provider.default_base_url())
    }

    pub fn without(mut self, provider: ProviderId) -> Self {
        *self.slot_mut(provider) = None;
        self
    }

    pub fn get(&self, provider: ProviderId) -> Option<&ProviderSettings> {
        match provider {
            ProviderId::DeepSeek => self.deepseek.as_ref(),
            ProviderId::Tongyi => self.tongyi.as_ref(),
        }
    }

    pub fn is_configured(&self, provider: ProviderId) -> bool {
        self.get(provider).is_some()
    }

    /// Configured providers in [`ProviderId::ALL`] order.
    pub fn configured(&self) -> impl Iterator<Item = ProviderId> + '_ {
        ProviderId::ALL
            .into_iter()
            .filter(|p| self.is_configured(*p))
    }

    fn slot_mut(&mut self, provider: ProviderId) -> &mut Option<ProviderSettings> {
        match provider {
            ProviderId::DeepSeek => &mut self.deepseek,
            ProviderId::Tongyi => &mut self.tongyi,
        }
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
