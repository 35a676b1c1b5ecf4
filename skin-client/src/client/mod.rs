//! Storefront API client
//!
//! - [`http`]: transport trait and the reqwest implementation
//! - [`http_oneshot`]: in-process transport over an axum Router
//! - [`common`]: `SkinClient`, request plumbing
//! - endpoint groups, one file per backend resource

mod address;
mod auth;
mod booking;
mod cart;
pub mod common;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
mod order;
mod voucher;

pub use self::common::{IDEMPOTENCY_KEY_HEADER, SkinClient};
pub use self::http::{HttpClient, HttpReply, HttpRequest, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use self::http_oneshot::OneshotHttpClient;
