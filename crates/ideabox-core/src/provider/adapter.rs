use crate::{
    error::Result,
    generic::{GenerationRequest, GenerationResponse},
    model::{ModelDescriptor, ProviderId},
};

use super::BoxFuture;

/// A **wire adapter** turns a normalised request into one network call to a
/// concrete provider and parses the reply back.
///
/// The contract is split into three steps so each provider only describes
/// what differs:
///
/// * [`translate_request`](Self::translate_request) – pure, builds the
///   provider's JSON payload.
/// * [`call`](Self::call) – exactly one HTTP round-trip, no retry, no cache.
///   Must fail with [`GenerationError::ApiKeyMissing`](crate::error::GenerationError::ApiKeyMissing)
///   *before* touching the network when no key is configured.
/// * [`translate_response`](Self::translate_response) – pure, extracts text,
///   usage and finish reason.
///
/// Every `WireAdapter` is automatically a [`ProviderAdapter`], which is what
/// the gateway stores and dispatches to.
pub trait WireAdapter: Send + Sync {
    /// Payload sent to the provider.
    type WireRequest: Send;
    /// Decoded success body.
    type WireResponse: Send;

    /// Provider this adapter talks to.
    const PROVIDER: ProviderId;

    fn translate_request(
        &self,
        request: &GenerationRequest,
        model: &ModelDescriptor,
    ) -> Self::WireRequest;

    fn call<'a>(&'a self, request: Self::WireRequest) -> BoxFuture<'a, Result<Self::WireResponse>>;

    fn translate_response(
        &self,
        response: Self::WireResponse,
        model: &ModelDescriptor,
    ) -> Result<GenerationResponse>;
}

/// Object-safe face of a provider, keyed by [`ProviderId`] in the gateway.
///
/// The method returns a [`BoxFuture`] so we stay object-safe without pulling
/// in `async_trait`.
pub trait ProviderAdapter: Send + Sync {
    fn provider(&self) -> ProviderId;

    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
        model: &'static ModelDescriptor,
    ) -> BoxFuture<'a, Result<GenerationResponse>>;
}

impl<A: WireAdapter> ProviderAdapter for A {
    fn provider(&self) -> ProviderId {
        A::PROVIDER
    }

    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
        model: &'static ModelDescriptor,
    ) -> BoxFuture<'a, Result<GenerationResponse>> {
        let wire = self.translate_request(request, model);
        Box::pin(async move {
            let raw = self.call(wire).await?;
            self.translate_response(raw, model)
        })
    }
}
