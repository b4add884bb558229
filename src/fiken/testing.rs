//! In-memory `FikenApi` for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::client::{ApiRequest, ApiResponse, FikenApi};
use super::error::{FikenError, FikenResult};

enum Reply {
    Response(ApiResponse),
    Failure,
}

/// Records every request and answers with a canned reply.
pub struct FakeApi {
    requests: Mutex<Vec<ApiRequest>>,
    reply: Reply,
}

impl FakeApi {
    pub fn replying(response: ApiResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Reply::Response(response),
        }
    }

    pub fn responding(status: u16, body: &str) -> Self {
        Self::replying(ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
            location: None,
        })
    }

    /// Fails every request before it leaves the client.
    pub fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Reply::Failure,
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl FikenApi for FakeApi {
    async fn send(&self, request: ApiRequest) -> FikenResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Failure => Err(FikenError::invalid_url("test host has no route")),
        }
    }
}
