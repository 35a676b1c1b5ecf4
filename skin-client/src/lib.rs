//! Skin Client - storefront client for the skincare shop backend
//!
//! Typed access to the REST API plus the checkout orchestration that sits
//! on top of it:
//!
//! - [`client`]: `SkinClient`, the transport seam and endpoint wrappers
//! - [`checkout`]: address, shipping and payment steps, the voucher panel and
//!   the gateway-return verifier
//! - [`session`]: where the auth token lives between calls
//! - [`pricing`]: decimal money helpers
//!
//! # Example
//!
//! ```no_run
//! use skin_client::checkout::{Checkout, Navigation};
//! use skin_client::{ClientConfig, SkinClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SkinClient::from_config(ClientConfig::from_env()?)?;
//! client.login("lan@example.vn", "secret").await?;
//!
//! let mut checkout = Checkout::start(&client).await;
//! checkout.apply_voucher(Some("GLOW50"))?;
//! let checkout = checkout.continue_to_shipping().map_err(|r| r.error)?;
//! let checkout = checkout.continue_to_payment().map_err(|r| r.error)?;
//!
//! match checkout.place_order().await?.navigation() {
//!     Navigation::External(url) => println!("redirect to {url}"),
//!     Navigation::Route(route) => println!("go to {route}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod pricing;
pub mod session;

pub use client::{HttpClient, NetworkHttpClient, SkinClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{AuthSession, FileSessionStore, MemorySessionStore, SessionStore};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{ApiResponse, ErrorCode, Page};
