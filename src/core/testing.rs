use crate::core::{ApiRequest, Transport};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory transport that records every request and answers with a
/// canned body or status error.
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    reply: Reply,
}

#[derive(Clone)]
enum Reply {
    Body(Vec<u8>),
    Status(u16, String),
}

impl RecordingTransport {
    pub fn responding(body: serde_json::Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Reply::Body(body.to_string().into_bytes()),
        }
    }

    pub fn empty() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Reply::Body(Vec::new()),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Reply::Status(status, body.to_string()),
        }
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn only_request(&self) -> ApiRequest {
        let requests = self.requests.lock().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>> {
        self.requests.lock().await.push(request);
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status, body) => Err(ClientError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
