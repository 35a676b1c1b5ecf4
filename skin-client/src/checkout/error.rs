//! Checkout error taxonomy
//!
//! Every failure a shopper can trigger in the flow ends up here and is
//! turned into a transient [`Notice`]; none of them abort the flow.

use thiserror::Error;

use crate::error::ClientError;
use crate::pricing::format_vnd;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required selection is missing
    #[error("{0}")]
    Validation(String),

    /// The referenced voucher or address is not in the loaded set
    #[error("{0} not found")]
    NotFound(String),

    /// No cart snapshot has been loaded
    #[error("Your cart could not be loaded")]
    NoCart,

    /// The cart subtotal is below the voucher's minimum order value
    #[error(
        "Voucher {code} requires a minimum order of {}; add {} more to use it",
        format_vnd(*.min_order_value),
        format_vnd(*.shortfall)
    )]
    MinOrderNotMet {
        code: String,
        subtotal: f64,
        min_order_value: f64,
        shortfall: f64,
    },

    /// A voucher is already applied; remove it before choosing another
    #[error("Voucher {0} is already applied; remove it to choose another")]
    VoucherAlreadyApplied(String),

    /// An order submission is already in progress
    #[error("Your order is already being placed")]
    SubmissionInFlight,

    /// Network or server failure
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Error classes as shown to the shopper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    BusinessRule,
    Network,
    Server,
}

/// Transient, user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ErrorKind,
    pub message: String,
}

impl CheckoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::NoCart | Self::SubmissionInFlight => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MinOrderNotMet { .. } | Self::VoucherAlreadyApplied(_) => ErrorKind::BusinessRule,
            Self::Client(e) if e.is_transport() => ErrorKind::Network,
            Self::Client(_) => ErrorKind::Server,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Client(e) => e.user_message(),
            other => other.to_string(),
        }
    }

    pub fn notice(&self) -> Notice {
        Notice {
            kind: self.kind(),
            message: self.user_message(),
        }
    }
}

impl From<&ClientError> for Notice {
    fn from(err: &ClientError) -> Self {
        Notice {
            kind: if err.is_transport() {
                ErrorKind::Network
            } else {
                ErrorKind::Server
            },
            message: err.user_message(),
        }
    }
}
