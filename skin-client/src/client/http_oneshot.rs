// skin-client/src/client/http_oneshot.rs
// Oneshot HTTP transport - in-memory calls (Local Mode)
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, Uri};
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult};

use super::http::{HttpClient, HttpReply, HttpRequest};

/// Oneshot HTTP transport (in-memory)
///
/// Calls the Router directly through Tower's `oneshot`, no sockets involved.
/// Used for same-process backends and for test doubles.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use skin_client::{ClientConfig, SkinClient};
///
/// let router: Router = mock_backend();
/// let client = SkinClient::in_process(router, ClientConfig::default());
/// let cart = client.cart().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// # Arguments
    /// * `router` - Axum Router with its state already applied
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn execute(&self, request: HttpRequest) -> ClientResult<HttpReply> {
        let uri: Uri = request
            .path
            .parse()
            .map_err(|e| ClientError::Internal(format!("Invalid request path {}: {}", request.path, e)))?;

        let mut http_request = Request::new(request.body.map(Body::from).unwrap_or_else(Body::empty));
        *http_request.method_mut() = request.method;
        *http_request.uri_mut() = uri;
        *http_request.headers_mut() = request.headers;

        let response = self
            .router
            .clone()
            .oneshot(http_request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        Ok(HttpReply {
            status,
            body: body.to_vec(),
        })
    }
}
