use reqwest::Method;

use crate::error::LoadError;

/// A single call against the REST API, addressed relative to the client's host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: Method,
    pub path: String,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl RestRequest {
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    pub status: u16,
    pub reason: String,
}

impl RestResponse {
    pub fn ok() -> Self {
        Self::new(200, "OK")
    }

    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the API one at a time; callers await each response before the next call.
#[async_trait::async_trait]
pub trait RestClient: Send + Sync {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, LoadError>;
}
