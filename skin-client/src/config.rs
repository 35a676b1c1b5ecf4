//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAYMENT_RETURN_URL: &str = "http://localhost:5173/payment-return";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_VOUCHER_PAGE_SIZE: u32 = 50;
const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;

/// Client configuration for the storefront REST backend
///
/// # Environment variables
///
/// | Variable | Default |
/// |---|---|
/// | `SKIN_API_URL` | `http://localhost:8080/api` |
/// | `SKIN_REQUEST_TIMEOUT_MS` | `30000` |
/// | `SKIN_CONNECT_TIMEOUT_MS` | `10000` |
/// | `SKIN_PAYMENT_RETURN_URL` | `http://localhost:5173/payment-return` |
/// | `SKIN_VOUCHER_PAGE_SIZE` | `50` |
/// | `SKIN_SESSION_TTL_SECS` | `86400` |
/// | `SKIN_SESSION_FILE` | unset (in-memory session) |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,

    /// Per-call timeout
    pub request_timeout: Duration,

    /// TCP connect timeout (network transport only)
    pub connect_timeout: Duration,

    /// Client-side route the payment gateway sends the shopper back to
    pub payment_return_url: String,

    /// Page size used when listing vouchers
    pub voucher_page_size: u32,

    /// Session lifetime when the login response carries none
    pub session_ttl: Duration,

    /// JSON session file; `None` keeps the session in memory
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            payment_return_url: DEFAULT_PAYMENT_RETURN_URL.to_string(),
            voucher_page_size: DEFAULT_VOUCHER_PAGE_SIZE,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            session_file: None,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::new(var("SKIN_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()));

        if let Some(ms) = var("SKIN_REQUEST_TIMEOUT_MS") {
            config.request_timeout = Duration::from_millis(parse_number("SKIN_REQUEST_TIMEOUT_MS", &ms)?);
        }
        if let Some(ms) = var("SKIN_CONNECT_TIMEOUT_MS") {
            config.connect_timeout = Duration::from_millis(parse_number("SKIN_CONNECT_TIMEOUT_MS", &ms)?);
        }
        if let Some(url) = var("SKIN_PAYMENT_RETURN_URL") {
            config.payment_return_url = url;
        }
        if let Some(size) = var("SKIN_VOUCHER_PAGE_SIZE") {
            let size = parse_number("SKIN_VOUCHER_PAGE_SIZE", &size)?;
            config.voucher_page_size = u32::try_from(size)
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ClientError::Config(format!("SKIN_VOUCHER_PAGE_SIZE out of range: {size}")))?;
        }
        if let Some(secs) = var("SKIN_SESSION_TTL_SECS") {
            config.session_ttl = Duration::from_secs(parse_number("SKIN_SESSION_TTL_SECS", &secs)?);
        }
        config.session_file = var("SKIN_SESSION_FILE").map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no transport can work with
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {}",
                self.base_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(ClientError::Config("request timeout must be positive".into()));
        }
        Ok(())
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Set the per-call timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the payment return URL
    pub fn with_payment_return_url(mut self, url: impl Into<String>) -> Self {
        self.payment_return_url = url.into();
        self
    }

    /// Set the voucher page size
    pub fn with_voucher_page_size(mut self, size: u32) -> Self {
        self.voucher_page_size = size;
        self
    }

    /// Set the fallback session lifetime
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Persist the session in a JSON file
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_number(key: &str, value: &str) -> ClientResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ClientError::Config(format!("{key} must be a non-negative integer, got {value:?}")))
}
