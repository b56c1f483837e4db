use crate::{
    config::Credentials,
    error::{GenerationError, Result},
    model::{FALLBACK_MODEL, ModelDescriptor, ProviderId, models_of},
};

/// Read-only view of [`MODEL_TABLE`](crate::model::MODEL_TABLE) filtered by
/// the configured credentials.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    credentials: Credentials,
}

impl ModelRegistry {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn from_env() -> Self {
        Self::new(Credentials::from_env())
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Descriptors whose provider has a credential: every DeepSeek entry, then
    /// every Tongyi entry, each in table order.
    pub fn list_available(&self) -> Vec<&'static ModelDescriptor> {
        self.credentials
            .configured()
            .flat_map(models_of)
            .collect()
    }

    /// First Tongyi model if Tongyi is configured, else the first DeepSeek
    /// model, else [`FALLBACK_MODEL`].
    ///
    /// The fallback exists so listing code never has to handle "nothing";
    /// use [`Self::configured_default`] before dispatching a real call.
    pub fn pick_default(&self) -> &'static ModelDescriptor {
        self.first_configured().unwrap_or(&FALLBACK_MODEL)
    }

    /// Like [`Self::pick_default`] but refuses to hand out the fallback.
    pub fn configured_default(&self) -> Result<&'static ModelDescriptor> {
        self.first_configured()
            .ok_or(GenerationError::NoProviderConfigured)
    }

    /// Exact, case-sensitive lookup of a wire model id among the available
    /// models.
    pub fn resolve(&self, model_id: &str) -> Result<&'static ModelDescriptor> {
        self.list_available()
            .into_iter()
            .find(|m| m.model == model_id)
            .ok_or_else(|| GenerationError::ModelNotFound {
                model: model_id.to_owned(),
            })
    }

    fn first_configured(&self) -> Option<&'static ModelDescriptor> {
        [ProviderId::Tongyi, ProviderId::DeepSeek]
            .into_iter()
            .filter(|p| self.credentials.is_configured(*p))
            .find_map(|p| models_of(p).next())
    }
}
