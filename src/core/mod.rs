pub mod client;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{ApiRequest, HttpMethod, Query, QueryParams};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
pub use client::ApiClient;
