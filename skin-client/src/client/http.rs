// skin-client/src/client/http.rs
// HTTP transport - network communication

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Outgoing request, already carrying auth and content headers
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Path plus query, relative to the API base URL (`/carts`)
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw reply; status and envelope handling happen in `SkinClient`
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// HTTP transport trait
///
/// The single seam between endpoint code and the wire. Implementations only
/// move bytes; auth, timeouts and cancellation are applied above them.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> ClientResult<HttpReply>;
}

/// Network HTTP client over reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn execute(&self, request: HttpRequest) -> ClientResult<HttpReply> {
        let mut req = self
            .client
            .request(request.method, self.url(&request.path))
            .headers(request.headers);
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(HttpReply { status, body })
    }
}
