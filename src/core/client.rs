use crate::core::{ApiRequest, Transport};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Typed facade over the Arcadia REST API.
///
/// Each endpoint method builds a single [`ApiRequest`], hands it to the
/// transport once and decodes the body. The endpoint methods live in
/// `core::services`, one module per API area.
pub struct ApiClient<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        tracing::debug!("Sending {}", request);
        let body = self.transport.execute(request).await?;
        decode(&body)
    }
}

/// Empty bodies decode as JSON `null`, so `serde_json::Value` and
/// `Option<_>` responses accept them.
pub(crate) fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(body)?)
}
