use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};

use crate::error::LoadError;
use crate::transport::traits::{RestClient, RestRequest, RestResponse};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const UNKNOWN_REASON: &str = "Unknown Status";

/// reqwest-backed client bound to the API host.
///
/// One instance is built per manifest run and dropped when the run ends,
/// whether it finished or failed.
#[derive(Debug, Clone)]
pub struct HttpRestClient {
    client: Client,
    base_url: Url,
}

impl HttpRestClient {
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Resolve a resource path against the host the way a browser resolves a relative link
    pub fn resolve(&self, path: &str) -> Result<Url, LoadError> {
        self.base_url
            .join(path)
            .map_err(|e| LoadError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait::async_trait]
impl RestClient for HttpRestClient {
    async fn send(&self, request: RestRequest) -> Result<RestResponse, LoadError> {
        let RestRequest { method, path, body } = request;
        let url = self.resolve(&path)?;
        debug!("{} {}", method, url);

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| LoadError::Transport { path, source })?;

        let status = response.status();
        Ok(RestResponse {
            status: status.as_u16(),
            reason: reason_phrase(status).to_string(),
        })
    }
}

/// Standard reason text for the status, or a placeholder for codes that have none
fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or(UNKNOWN_REASON)
}
