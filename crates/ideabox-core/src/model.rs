//! Static model table and provider identifiers.
//!
//! Every selectable model is described by a `'static` [`ModelDescriptor`]
//! living in [`MODEL_TABLE`]. Nothing here is ever mutated; the
//! [`ModelRegistry`](crate::registry::ModelRegistry) filters the table by the
//! credentials present at start-up.
//!
//! # Adding more models
//!
//! 1. Append a descriptor to [`MODEL_TABLE`]. Declaration order within one
//!    provider is the order callers see in the model list.
//! 2. If the model belongs to a new upstream, add a [`ProviderId`] variant and
//!    an adapter in `ideabox-providers`; the compiler points at every match
//!    that needs the new arm.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Closed set of upstream LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// DeepSeek, OpenAI-compatible chat completions.
    DeepSeek,
    /// Alibaba Cloud DashScope (通义千问).
    Tongyi,
}

impl ProviderId {
    /// Declaration order used when listing models.
    pub const ALL: [ProviderId; 2] = [ProviderId::DeepSeek, ProviderId::Tongyi];

    /// Wire tag (`"deepseek"` / `"tongyi"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::DeepSeek => "deepseek",
            ProviderId::Tongyi => "tongyi",
        }
    }

    /// Human-readable name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderId::DeepSeek => "DeepSeek",
            ProviderId::Tongyi => "Tongyi",
        }
    }

    /// Environment variable holding the provider's API key.
    pub fn credential_env(self) -> &'static str {
        match self {
            ProviderId::DeepSeek => "DEEPSEEK_API_KEY",
            ProviderId::Tongyi => "TONGYI_API_KEY",
        }
    }

    /// Environment variable that may override the provider's base URL.
    pub fn base_url_env(self) -> &'static str {
        match self {
            ProviderId::DeepSeek => "DEEPSEEK_BASE_URL",
            ProviderId::Tongyi => "TONGYI_BASE_URL",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            ProviderId::DeepSeek => "https://api.deepseek.com/v1",
            ProviderId::Tongyi => "https://dashscope.aliyuncs.com/api/v1",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable metadata for one selectable model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Display name shown in the model picker.
    pub name: &'static str,
    pub provider: ProviderId,
    /// Identifier sent to the provider (`"qwen-plus"`, `"deepseek-chat"`, …).
    pub model: &'static str,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

pub const DEEPSEEK_CHAT: ModelDescriptor = ModelDescriptor {
    name: "DeepSeek Chat",
    provider: ProviderId::DeepSeek,
    model: "deepseek-chat",
    max_tokens: 4096,
    temperature: 0.7,
    top_p: 0.9,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
};

pub const DEEPSEEK_CODER: ModelDescriptor = ModelDescriptor {
    name: "DeepSeek Coder",
    provider: ProviderId::DeepSeek,
    model: "deepseek-coder",
    max_tokens: 4096,
    temperature: 0.2,
    top_p: 0.9,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
};

pub const QWEN_TURBO: ModelDescriptor = ModelDescriptor {
    name: "通义千问 Turbo",
    provider: ProviderId::Tongyi,
    model: "qwen-turbo",
    max_tokens: 4096,
    temperature: 0.7,
    top_p: 0.9,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
};

pub const QWEN_PLUS: ModelDescriptor = ModelDescriptor {
    name: "通义千问 Plus",
    provider: ProviderId::Tongyi,
    model: "qwen-plus",
    max_tokens: 8192,
    temperature: 0.7,
    top_p: 0.9,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
};

pub const QWEN_MAX: ModelDescriptor = ModelDescriptor {
    name: "通义千问 Max",
    provider: ProviderId::Tongyi,
    model: "qwen-max",
    max_tokens: 8192,
    temperature: 0.7,
    top_p: 0.9,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
};

/// Every known model, grouped by provider in [`ProviderId::ALL`] order.
pub static MODEL_TABLE: [ModelDescriptor; 5] =
    [DEEPSEEK_CHAT, DEEPSEEK_CODER, QWEN_TURBO, QWEN_PLUS, QWEN_MAX];

/// Returned by [`ModelRegistry::pick_default`](crate::registry::ModelRegistry::pick_default)
/// when nothing is configured. Never dispatched.
pub static FALLBACK_MODEL: ModelDescriptor = QWEN_TURBO;

/// Iterate the table entries belonging to `provider`, in declaration order.
pub fn models_of(provider: ProviderId) -> impl Iterator<Item = &'static ModelDescriptor> {
    MODEL_TABLE.iter().filter(move |m| m.provider == provider)
}
