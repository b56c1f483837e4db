//! Traits at the seams between the gateway, the provider adapters and the
//! route layer.

use std::{future::Future, pin::Pin};

use serde::Serialize;

use crate::{
    error::Result,
    generic::{GenerationRequest, GenerationResponse},
    model::{ModelDescriptor, ProviderId},
};

mod adapter;
mod prompt_execute;

pub use adapter::{ProviderAdapter, WireAdapter};
pub use prompt_execute::{PromptExecution, TaskOutput};

/// Boxed, `Send` future used by the object-safe traits in this module.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Anything that can answer a [`GenerationRequest`].
///
/// Implemented by [`GenerationGateway`](crate::gateway::GenerationGateway);
/// the route layer only ever sees `Arc<dyn TextGeneration>`, which keeps it
/// testable with a stub.
pub trait TextGeneration: Send + Sync {
    /// One blocking-from-the-caller's-view generation round-trip.
    fn generate_text<'a>(
        &'a self,
        request: GenerationRequest,
    ) -> BoxFuture<'a, Result<GenerationResponse>>;

    /// Models currently selectable plus the default one.
    fn catalog(&self) -> ModelCatalog;
}

/// Listing entry for one available model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub name: &'static str,
    pub model: &'static str,
    pub provider: ProviderId,
    pub max_tokens: u32,
}

impl From<&ModelDescriptor> for ModelSummary {
    fn from(value: &ModelDescriptor) -> Self {
        Self {
            name: value.name,
            model: value.model,
            provider: value.provider,
            max_tokens: value.max_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCatalog {
    pub models: Vec<ModelSummary>,
    /// `None` when no provider is configured.
    pub default_model: Option<&'static str>,
}
