//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Cart errors (2xxx)
    Cart,
    /// Voucher errors (3xxx)
    Voucher,
    /// Order and address errors (4xxx)
    Order,
    /// Payment errors (5xxx)
    Payment,
    /// Booking and routine errors (6xxx)
    Booking,
    /// System errors (9xxx); codes in unassigned ranges also land here
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Cart,
            3000..4000 => Self::Voucher,
            4000..5000 => Self::Order,
            5000..6000 => Self::Payment,
            6000..7000 => Self::Booking,
            // 9xxx, plus 7xxx/8xxx and anything past 9999 which have no owner
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Cart => "cart",
            Self::Voucher => "voucher",
            Self::Order => "order",
            Self::Payment => "payment",
            Self::Booking => "booking",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
