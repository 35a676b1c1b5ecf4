//! Core client definition and shared request plumbing.
//!
//! Every endpoint goes through [`SkinClient::send`], which reads the session,
//! attaches headers, races the call against the timeout and the cancellation
//! token, and turns the reply into a typed result.

use std::fmt;
use std::sync::Arc;

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::{AuthSession, FileSessionStore, MemorySessionStore, SessionStore};

use super::http::{HttpClient, HttpReply, HttpRequest, NetworkHttpClient};
#[cfg(feature = "in-process")]
use super::http_oneshot::OneshotHttpClient;

pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

// ============================================================================
// Core SkinClient Definition
// ============================================================================

/// Typed client for the storefront REST backend.
///
/// Cheap to clone; clones share the transport, the session store and the
/// cancellation token. Use [`SkinClient::with_cancellation`] for a clone
/// that can be aborted on its own.
#[derive(Clone)]
pub struct SkinClient {
    http: Arc<dyn HttpClient>,
    sessions: Arc<dyn SessionStore>,
    config: ClientConfig,
    cancel: CancellationToken,
}

impl fmt::Debug for SkinClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkinClient")
            .field("base_url", &self.config.base_url)
            .field("sessions", &self.sessions)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl SkinClient {
    pub fn new(config: ClientConfig, http: Arc<dyn HttpClient>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            http,
            sessions,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Network client; the session lives in `config.session_file` when set
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let http = Arc::new(NetworkHttpClient::new(&config)?);
        let sessions: Arc<dyn SessionStore> = match &config.session_file {
            Some(path) => Arc::new(FileSessionStore::new(path)),
            None => Arc::new(MemorySessionStore::new()),
        };
        Ok(Self::new(config, http, sessions))
    }

    /// In-process client over an axum Router, with an in-memory session
    #[cfg(feature = "in-process")]
    pub fn in_process(router: axum::Router, config: ClientConfig) -> Self {
        Self::new(
            config,
            Arc::new(OneshotHttpClient::new(router)),
            Arc::new(MemorySessionStore::new()),
        )
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Clone with a child cancellation token.
    ///
    /// Cancelling the child aborts only its own calls; cancelling this
    /// client also aborts the child's.
    pub fn with_cancellation(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            ..self.clone()
        }
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Abort every in-flight and future call made through this client
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Current live session; an expired one is removed from the store
    ///
    /// An unreadable stored session counts as no session and is cleared, so
    /// the next login can replace it.
    pub fn session(&self) -> ClientResult<Option<AuthSession>> {
        let loaded = match self.sessions.load() {
            Ok(loaded) => loaded,
            Err(ClientError::Session(reason)) => {
                tracing::warn!(%reason, "Stored session unreadable, clearing");
                self.sessions.clear()?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        match loaded {
            Some(session) if session.is_expired() => {
                tracing::info!(expires_at = %session.expires_at, "Session expired, clearing");
                self.sessions.clear()?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session(), Ok(Some(_)))
    }

    // ========================================================================
    // Typed helpers
    // ========================================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let reply = self.send(Method::GET, path, None, None).await?;
        decode_data(path, &reply)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = serde_json::to_vec(body)?;
        let reply = self.send(Method::POST, path, Some(body), None).await?;
        decode_data(path, &reply)
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let reply = self.send(Method::POST, path, None, None).await?;
        decode_data(path, &reply)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = serde_json::to_vec(body)?;
        let reply = self.send(Method::PUT, path, Some(body), None).await?;
        decode_data(path, &reply)
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let reply = self.send(Method::PUT, path, None, None).await?;
        decode_data(path, &reply)
    }

    /// Call whose success carries no payload worth reading
    pub async fn call_unit<B: Serialize + Sync>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<()> {
        let body = body.map(serde_json::to_vec).transpose()?;
        let reply = self.send(method, path, body, None).await?;
        decode_unit(path, &reply)
    }

    /// POST carrying an `Idempotency-Key` header
    pub(crate) async fn post_idempotent<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: &str,
    ) -> ClientResult<T> {
        let body = serde_json::to_vec(body)?;
        let reply = self.send(Method::POST, path, Some(body), Some(idempotency_key)).await?;
        decode_data(path, &reply)
    }

    /// GET returning the whole envelope, whatever its code.
    ///
    /// For endpoints whose envelope code is itself the answer.
    pub(crate) async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        let reply = self.send(Method::GET, path, None, None).await?;
        serde_json::from_slice(&reply.body)
            .map_err(|e| ClientError::InvalidResponse(format!("{path}: JSON parse error: {e}")))
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Send one request; non-2xx replies become errors, 2xx replies are
    /// returned as-is.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        idempotency_key: Option<&str>,
    ) -> ClientResult<HttpReply> {
        let headers = self.headers(body.is_some(), idempotency_key)?;
        let request = HttpRequest {
            method: method.clone(),
            path: path.to_string(),
            headers,
            body,
        };

        tracing::debug!(%method, path, "API request");

        let timeout = self.config.request_timeout;
        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::debug!(%method, path, "API request cancelled");
                return Err(ClientError::Cancelled);
            }
            result = tokio::time::timeout(timeout, self.http.execute(request)) => result,
        };

        let reply = match outcome {
            Ok(reply) => reply?,
            Err(_) => {
                tracing::warn!(%method, path, ?timeout, "API request timed out");
                return Err(ClientError::Timeout(timeout));
            }
        };

        tracing::debug!(%method, path, status = %reply.status, "API response");

        if reply.status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "Server rejected the session, clearing it");
            self.sessions.clear()?;
            return Err(ClientError::Unauthorized);
        }
        if !reply.status.is_success() {
            return Err(error_from_reply(&reply));
        }
        Ok(reply)
    }

    fn headers(&self, has_body: bool, idempotency_key: Option<&str>) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(session) = self.session()? {
            let value = HeaderValue::from_str(&format!("Bearer {}", session.token))
                .map_err(|e| ClientError::Session(format!("token is not a valid header value: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(key) = idempotency_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| ClientError::Internal(format!("invalid idempotency key: {e}")))?;
            headers.insert(HeaderName::from_static(IDEMPOTENCY_KEY_HEADER), value);
        }
        Ok(headers)
    }
}

/// Map a non-2xx reply: the envelope's code and message when it has one,
/// otherwise by status.
/// Percent-encode one path segment so an id cannot change the route
pub(crate) fn path_segment(raw: &str) -> String {
    let Ok(mut url) = reqwest::Url::parse("http://segment.invalid/") else {
        return raw.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(raw);
    }
    url.path().trim_start_matches('/').to_string()
}

fn error_from_reply(reply: &HttpReply) -> ClientError {
    let text = String::from_utf8_lossy(&reply.body).to_string();

    if let Ok(envelope) = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&reply.body)
        && let Some(message) = envelope.message
    {
        // An error body without its own code still has the HTTP status
        let code = if envelope.code == shared::response::SUCCESS_CODE {
            reply.status.as_u16()
        } else {
            envelope.code
        };
        return ClientError::Api { code, message };
    }

    match reply.status {
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
        _ => ClientError::Internal(format!("HTTP {}: {}", reply.status, text)),
    }
}

/// Unwrap `data` from a success envelope
fn decode_data<T: DeserializeOwned>(path: &str, reply: &HttpReply) -> ClientResult<T> {
    let envelope: ApiResponse<T> = serde_json::from_slice(&reply.body)
        .map_err(|e| ClientError::InvalidResponse(format!("{path}: JSON parse error: {e}")))?;
    if !envelope.is_success() {
        return Err(ClientError::Api {
            code: envelope.code,
            message: envelope.message.unwrap_or_default(),
        });
    }
    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("{path}: missing data")))
}

/// Success check only; an empty body counts as success
fn decode_unit(path: &str, reply: &HttpReply) -> ClientResult<()> {
    if reply.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }
    let envelope: ApiResponse<serde_json::Value> = serde_json::from_slice(&reply.body)
        .map_err(|e| ClientError::InvalidResponse(format!("{path}: JSON parse error: {e}")))?;
    if envelope.is_success() {
        Ok(())
    } else {
        Err(ClientError::Api {
            code: envelope.code,
            message: envelope.message.unwrap_or_default(),
        })
    }
}
