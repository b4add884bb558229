//! HTTP client for the Fiken API.
//!
//! A thin wrapper around `reqwest` that adds bearer authentication and a
//! fixed API origin. Responses come back as raw bytes plus status code; the
//! client never interprets error statuses.

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use tracing::{debug, instrument};

use super::error::{FikenError, FikenResult};
use super::query::QueryParams;
use crate::core::config::FikenConfig;

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.fiken.no/api/v2";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP methods used by the Fiken tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method are sent as JSON.
    pub fn sends_json(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request against the Fiken API, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Option<Vec<u8>>) -> Self {
        self.body = body;
        self
    }
}

/// Raw response from the Fiken API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
    /// `Location` header, set by Fiken when a resource is created.
    pub location: Option<String>,
}

impl ApiResponse {
    /// Fiken reports failures with 4xx/5xx and an explanatory body.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Anything that can execute Fiken API requests.
#[async_trait]
pub trait FikenApi: Send + Sync {
    async fn send(&self, request: ApiRequest) -> FikenResult<ApiResponse>;
}

/// Authenticated Fiken API client.
#[derive(Clone)]
pub struct FikenClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for FikenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FikenClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl FikenClient {
    /// Create a client from configuration.
    pub fn new(config: &FikenConfig) -> FikenResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FikenError::MissingApiKey)?
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FikenError::Client)?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for `path` with the given query parameters.
    pub fn build_url(&self, path: &str, query: &QueryParams) -> FikenResult<Url> {
        if !path.starts_with('/') {
            return Err(FikenError::invalid_url(format!(
                "path must start with '/': {path}"
            )));
        }

        let mut raw = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            raw.push('?');
            raw.push_str(&query.encode()?);
        }

        Url::parse(&raw).map_err(|e| FikenError::invalid_url(format!("{raw}: {e}")))
    }

    pub async fn get(&self, path: &str, query: QueryParams) -> FikenResult<ApiResponse> {
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    pub async fn post(&self, path: &str, body: Option<Vec<u8>>) -> FikenResult<ApiResponse> {
        self.send(ApiRequest::post(path, body)).await
    }

    pub async fn put(&self, path: &str, body: Option<Vec<u8>>) -> FikenResult<ApiResponse> {
        self.send(ApiRequest::put(path, body)).await
    }

    pub async fn delete(&self, path: &str) -> FikenResult<ApiResponse> {
        self.send(ApiRequest::delete(path)).await
    }
}

#[async_trait]
impl FikenApi for FikenClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> FikenResult<ApiResponse> {
        let url = self.build_url(&request.path, &request.query)?;
        debug!("Sending request to {}", url);

        let mut builder = self
            .http
            .request(request.method.to_reqwest(), url)
            .bearer_auth(&self.api_key);

        if request.method.sends_json() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(FikenError::Request)?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(FikenError::Body)?.to_vec();

        debug!("Received status {} ({} bytes)", status, body.len());

        Ok(ApiResponse {
            status,
            body,
            location,
        })
    }
}
