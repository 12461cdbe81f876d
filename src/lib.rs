pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ReqwestTransport;
pub use config::ClientSettings;
pub use crate::core::{client::ApiClient, ApiRequest, HttpMethod, Transport};
pub use utils::error::{ClientError, Result};
