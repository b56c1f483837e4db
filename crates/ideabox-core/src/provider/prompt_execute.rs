use std::future::Future;

use serde::Serialize;

use crate::{
    error::Result,
    generic::GenerationResponse,
    model::ProviderId,
    template::PromptTemplate,
};

use super::TextGeneration;

/// Result of running a [`PromptTemplate`]: the trimmed text plus the model
/// that produced it. Usage metadata is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutput {
    pub text: String,
    pub model: String,
    pub provider: ProviderId,
}

impl From<GenerationResponse> for TaskOutput {
    fn from(value: GenerationResponse) -> Self {
        Self {
            text: value.content.trim().to_owned(),
            model: value.model,
            provider: value.provider,
        }
    }
}

/// Runs a typed prompt through any [`TextGeneration`] implementation.
///
/// Blanket-implemented, so `gateway.execute(TitlePrompt { .. }, None)` works
/// on the concrete gateway as well as on `Arc<dyn TextGeneration>`.
pub trait PromptExecution: TextGeneration {
    /// Build the template's messages, apply its fixed budget, optionally pin
    /// a model, and return the trimmed reply.
    fn execute<P>(
        &self,
        prompt: P,
        model: Option<String>,
    ) -> impl Future<Output = Result<TaskOutput>> + Send
    where
        P: PromptTemplate;
}

impl<T: TextGeneration + ?Sized> PromptExecution for T {
    fn execute<P>(
        &self,
        prompt: P,
        model: Option<String>,
    ) -> impl Future<Output = Result<TaskOutput>> + Send
    where
        P: PromptTemplate,
    {
        let request = prompt.into_request(model);
        async move {
            let response = self.generate_text(request).await?;
            Ok(TaskOutput::from(response))
        }
    }
}
