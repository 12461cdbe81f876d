use crate::core::{ApiRequest, ConfigProvider, HttpMethod, Transport};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: normalize_base_url(&base_url.into()),
            token: None,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: normalize_base_url(config.base_url()),
            token: config.auth_token().map(str::to_string),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let url = self.url_for(&request);
        tracing::debug!("Making API request: {} {}", request.method, url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &url);

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Could not read error body for status {}: {}", status, e);
                    String::new()
                }
            };
            tracing::warn!("{} {} failed with status {}", request.method, url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Received {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = ReqwestTransport::new("http://localhost:8080/api/").unwrap();
        let request = ApiRequest::get("/collages").with_query(crate::core::Query::new().push("id", 42));

        assert_eq!(transport.base_url(), "http://localhost:8080/api");
        assert_eq!(
            transport.url_for(&request),
            "http://localhost:8080/api/collages?id=42"
        );
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_reqwest_method(HttpMethod::Delete), Method::DELETE);
    }
}
