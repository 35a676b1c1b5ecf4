//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::CartNotFound
            | Self::CartItemNotFound
            | Self::VoucherNotFound
            | Self::OrderNotFound
            | Self::AddressNotFound
            | Self::BookingNotFound
            | Self::RoutineNotFound
            | Self::RoutineStepNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::VoucherAlreadyUsed
            | Self::OrderNotCancellable
            | Self::BookingNotCancellable
            | Self::RoutineStepAlreadyDone => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::SessionExpired
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::VoucherNotOwned => StatusCode::FORBIDDEN,

            // 422 Unprocessable Entity (business rules)
            Self::VoucherMinOrderNotMet
            | Self::VoucherExpired
            | Self::InsufficientPoints
            | Self::CartEmpty
            | Self::ProductOutOfStock => StatusCode::UNPROCESSABLE_ENTITY,

            // 402 Payment Required
            Self::PaymentFailed | Self::PaymentCancelled => StatusCode::PAYMENT_REQUIRED,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
