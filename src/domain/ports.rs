use crate::domain::model::ApiRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Executes one request and returns the raw body of a 2xx response.
///
/// Implementations own every transport policy (timeouts, auth headers,
/// status mapping). Callers get failures back untouched and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn auth_token(&self) -> Option<&str>;
    fn timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> Option<&str>;
}
