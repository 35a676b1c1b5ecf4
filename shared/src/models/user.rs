//! User and auth DTOs

use serde::{Deserialize, Serialize};

/// Account role flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Staff,
    Expert,
    Manager,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles allowed into the back-office
    pub fn is_back_office(&self) -> bool {
        matches!(self, Self::Staff | Self::Manager | Self::Admin)
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, deserialize_with = "super::id::opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Logout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// Current user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Loyalty points balance
    #[serde(default)]
    pub point: u32,
    #[serde(default)]
    pub roles: Vec<Role>,
}
