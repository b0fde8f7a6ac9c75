//! Request/response seam between the directory client and the REST API

use async_trait::async_trait;
use http::{Method, StatusCode};
use reqwest::Client;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{Error, Result, TransportError};
use crate::models::EmployeeCreateRequest;

/// Collection path for employee records
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// One request against the employee API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base address
    pub path: String,
    /// Record to create, sent as JSON with `Content-Type: application/json`
    pub body: Option<EmployeeCreateRequest>,
}

impl ApiRequest {
    /// `GET /api/employees`
    pub fn list() -> Self {
        Self {
            method: Method::GET,
            path: EMPLOYEES_PATH.to_string(),
            body: None,
        }
    }

    /// `POST /api/employees` with the record as a JSON payload
    pub fn create(payload: &EmployeeCreateRequest) -> Self {
        Self {
            method: Method::POST,
            path: EMPLOYEES_PATH.to_string(),
            body: Some(payload.clone()),
        }
    }

    /// `DELETE /api/employees/{id}`
    pub fn delete(id: i64) -> Self {
        Self {
            method: Method::DELETE,
            path: format!("{}/{}", EMPLOYEES_PATH, id),
            body: None,
        }
    }
}

/// Status and raw text body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Carries one request to the server and back
///
/// Any HTTP status counts as a response; only requests that never
/// complete are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError>;
}

/// reqwest-backed transport bound to an API base address
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport from API configuration
    ///
    /// The base URL must be absolute http(s); a trailing slash is dropped.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::InvalidBaseUrl("URL cannot be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidBaseUrl(format!(
                "{} (must start with http:// or https://)",
                base_url
            )));
        }

        let mut builder = Client::builder().user_agent(format!(
            "staffdir/{}",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::HttpClient(Box::new(e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = self.http.request(request.method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");
        Ok(ApiResponse { status, body })
    }
}
