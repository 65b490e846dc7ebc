//! Generation driver trait.

use async_trait::async_trait;
use captionstudio_core::{ModelTier, StructuredRequest};
use captionstudio_error::GenerationError;
use std::sync::Arc;

/// A provider able to answer one structured-output request.
///
/// Implementations perform exactly one exchange per call and return the raw
/// response text. Parsing against the schema and any post-processing happen
/// in the caller.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Send `request` and return the model's text output.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses, and responses without any
    /// text are reported as [`GenerationError`].
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<String, GenerationError>;

    /// Provider name for logs.
    fn provider_name(&self) -> &'static str;

    /// Concrete model identifier serving `tier`.
    fn model_name(&self, tier: ModelTier) -> &str;
}

#[async_trait]
impl<D> GenerationDriver for Arc<D>
where
    D: GenerationDriver + ?Sized,
{
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<String, GenerationError> {
        (**self).generate_structured(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self, tier: ModelTier) -> &str {
        (**self).model_name(tier)
    }
}
