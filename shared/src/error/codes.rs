//! Error codes carried in the storefront response envelope
//!
//! Codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Cart errors
//! - 3xxx: Voucher errors
//! - 4xxx: Order and address errors
//! - 5xxx: Payment errors
//! - 6xxx: Booking and routine errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so the envelope `code` field can be compared
/// directly against [`ErrorCode::Success`] (`200`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Operation completed successfully
    Success = 200,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Account is disabled
    AccountDisabled = 1006,
    /// Permission denied
    PermissionDenied = 1101,

    // ==================== 2xxx: Cart ====================
    /// Cart not found
    CartNotFound = 2001,
    /// Cart has no items
    CartEmpty = 2002,
    /// Cart item not found
    CartItemNotFound = 2003,
    /// Product is out of stock
    ProductOutOfStock = 2004,
    /// Quantity is out of range
    InvalidQuantity = 2005,

    // ==================== 3xxx: Voucher ====================
    /// Voucher not found
    VoucherNotFound = 3001,
    /// Voucher is not owned by the user
    VoucherNotOwned = 3002,
    /// Voucher has expired
    VoucherExpired = 3003,
    /// Order total is below the voucher minimum
    VoucherMinOrderNotMet = 3004,
    /// Not enough points to exchange for the voucher
    InsufficientPoints = 3005,
    /// Voucher has already been used
    VoucherAlreadyUsed = 3006,

    // ==================== 4xxx: Order / Address ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order can no longer be cancelled
    OrderNotCancellable = 4002,
    /// Address not found
    AddressNotFound = 4101,
    /// Address is incomplete
    AddressInvalid = 4102,

    // ==================== 5xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 5001,
    /// Invalid payment method
    PaymentInvalidMethod = 5002,
    /// Gateway callback signature or amount did not verify
    PaymentVerificationFailed = 5003,
    /// Payment cancelled at the gateway
    PaymentCancelled = 5004,

    // ==================== 6xxx: Booking / Routine ====================
    /// Booking not found
    BookingNotFound = 6001,
    /// Booking can no longer be cancelled
    BookingNotCancellable = 6002,
    /// Routine not found
    RoutineNotFound = 6101,
    /// Routine step not found
    RoutineStepNotFound = 6102,
    /// Routine step already marked done
    RoutineStepAlreadyDone = 6103,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::PermissionDenied => "Permission denied",

            // Cart
            ErrorCode::CartNotFound => "Cart not found",
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::CartItemNotFound => "Cart item not found",
            ErrorCode::ProductOutOfStock => "Product is out of stock",
            ErrorCode::InvalidQuantity => "Quantity is out of range",

            // Voucher
            ErrorCode::VoucherNotFound => "Voucher not found",
            ErrorCode::VoucherNotOwned => "Voucher is not owned by this account",
            ErrorCode::VoucherExpired => "Voucher has expired",
            ErrorCode::VoucherMinOrderNotMet => "Order total is below the voucher minimum",
            ErrorCode::InsufficientPoints => "Not enough points",
            ErrorCode::VoucherAlreadyUsed => "Voucher has already been used",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderNotCancellable => "Order can no longer be cancelled",
            ErrorCode::AddressNotFound => "Address not found",
            ErrorCode::AddressInvalid => "Address is incomplete",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",
            ErrorCode::PaymentVerificationFailed => "Payment verification failed",
            ErrorCode::PaymentCancelled => "Payment was cancelled",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingNotCancellable => "Booking can no longer be cancelled",
            ErrorCode::RoutineNotFound => "Routine not found",
            ErrorCode::RoutineStepNotFound => "Routine step not found",
            ErrorCode::RoutineStepAlreadyDone => "Routine step is already done",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::RequiredField),
            200 => Ok(ErrorCode::Success),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::AccountDisabled),
            1101 => Ok(ErrorCode::PermissionDenied),

            // Cart
            2001 => Ok(ErrorCode::CartNotFound),
            2002 => Ok(ErrorCode::CartEmpty),
            2003 => Ok(ErrorCode::CartItemNotFound),
            2004 => Ok(ErrorCode::ProductOutOfStock),
            2005 => Ok(ErrorCode::InvalidQuantity),

            // Voucher
            3001 => Ok(ErrorCode::VoucherNotFound),
            3002 => Ok(ErrorCode::VoucherNotOwned),
            3003 => Ok(ErrorCode::VoucherExpired),
            3004 => Ok(ErrorCode::VoucherMinOrderNotMet),
            3005 => Ok(ErrorCode::InsufficientPoints),
            3006 => Ok(ErrorCode::VoucherAlreadyUsed),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderNotCancellable),
            4101 => Ok(ErrorCode::AddressNotFound),
            4102 => Ok(ErrorCode::AddressInvalid),

            // Payment
            5001 => Ok(ErrorCode::PaymentFailed),
            5002 => Ok(ErrorCode::PaymentInvalidMethod),
            5003 => Ok(ErrorCode::PaymentVerificationFailed),
            5004 => Ok(ErrorCode::PaymentCancelled),

            // Booking
            6001 => Ok(ErrorCode::BookingNotFound),
            6002 => Ok(ErrorCode::BookingNotCancellable),
            6101 => Ok(ErrorCode::RoutineNotFound),
            6102 => Ok(ErrorCode::RoutineStepNotFound),
            6103 => Ok(ErrorCode::RoutineStepAlreadyDone),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
