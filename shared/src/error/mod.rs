//! Unified error system for the storefront API
//!
//! - [`ErrorCode`]: numeric codes carried in the response envelope
//! - [`ErrorCategory`]: classification of codes by domain
//! - [`AppError`]: code + message, convertible into an [`ApiResponse`](crate::ApiResponse)
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (`200` is the envelope success code)
//! - 1xxx: Authentication errors
//! - 2xxx: Cart errors
//! - 3xxx: Voucher errors
//! - 4xxx: Order and address errors
//! - 5xxx: Payment errors
//! - 6xxx: Booking and routine errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//! use shared::ApiResponse;
//!
//! let err = AppError::with_message(ErrorCode::VoucherMinOrderNotMet, "Order total too low");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, 3004);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
