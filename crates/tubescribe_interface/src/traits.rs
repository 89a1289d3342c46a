//! Trait definitions for the remote services.

use async_trait::async_trait;
use std::sync::Arc;
use tubescribe_core::{Credential, GenerateRequest, GenerateResponse};
use tubescribe_error::TubescribeResult;

/// Core trait that all language-model backends implement.
///
/// The credential is passed per call rather than held by the driver, so a
/// single driver can serve a session whose key is supplied later, and no
/// call is possible without one.
#[async_trait]
pub trait TubescribeDriver: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(
        &self,
        credential: &Credential,
        req: &GenerateRequest,
    ) -> TubescribeResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-3.5-turbo-instruct").
    fn model_name(&self) -> &str;
}

/// An encyclopedia that returns reference text for a topic.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Look up reference text for `topic`.
    ///
    /// Returns the text block exactly as the service provides it.
    async fn lookup(&self, topic: &str) -> TubescribeResult<String>;

    /// Source name (e.g., "wikipedia").
    fn source_name(&self) -> &'static str;
}

#[async_trait]
impl<T: TubescribeDriver + ?Sized> TubescribeDriver for Arc<T> {
    async fn generate(
        &self,
        credential: &Credential,
        req: &GenerateRequest,
    ) -> TubescribeResult<GenerateResponse> {
        (**self).generate(credential, req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ReferenceSource + ?Sized> ReferenceSource for Arc<T> {
    async fn lookup(&self, topic: &str) -> TubescribeResult<String> {
        (**self).lookup(topic).await
    }

    fn source_name(&self) -> &'static str {
        (**self).source_name()
    }
}
