use parking_lot::Mutex;
use reqwest::Method;

use crate::error::LoadError;
use crate::transport::traits::{RestClient, RestRequest, RestResponse};

/// In-memory client that records every request and answers with canned statuses.
///
/// Requests without a matching rule get `200 OK`.
#[derive(Debug, Default)]
pub struct RecordingClient {
    requests: Mutex<Vec<RestRequest>>,
    rules: Vec<(Method, String, RestResponse)>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with the given status instead of `200 OK`
    pub fn respond_with(
        mut self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        reason: impl Into<String>,
    ) -> Self {
        self.rules
            .push((method, path.into(), RestResponse::new(status, reason)));
        self
    }

    /// Snapshot of the requests seen so far, in the order they were sent
    pub fn requests(&self) -> Vec<RestRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait::async_trait]
impl RestClient for RecordingClient {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, LoadError> {
        let response = self
            .rules
            .iter()
            .find(|(method, path, _)| *method == request.method && *path == request.path)
            .map(|(_, _, response)| response.clone())
            .unwrap_or_else(RestResponse::ok);

        self.requests.lock().push(request);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_and_applies_rules() {
        let client = RecordingClient::new().respond_with(Method::PUT, "api/users/9", 404, "Not Found");

        let ok = client
            .send(RestRequest::put("api/users/7", "{}".to_string()))
            .await
            .unwrap();
        assert!(ok.is_success());

        let missing = client
            .send(RestRequest::put("api/users/9", "{}".to_string()))
            .await
            .unwrap();
        assert_eq!(missing, RestResponse::new(404, "Not Found"));
        assert!(!missing.is_success());

        let paths: Vec<String> = client.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["api/users/7", "api/users/9"]);
    }
}
