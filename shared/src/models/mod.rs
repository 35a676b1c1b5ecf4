//! Data models
//!
//! Client-held projections of server state, shared between the storefront
//! client and anything that serves the same REST contract.
//! JSON field names are camelCase; ids arrive as strings or numbers and are
//! normalized to `String`.

pub mod address;
pub mod booking;
pub mod cart;
mod id;
pub mod order;
pub mod user;
pub mod voucher;

// Re-exports
pub use address::*;
pub use booking::*;
pub use cart::*;
pub use order::*;
pub use user::*;
pub use voucher::*;
