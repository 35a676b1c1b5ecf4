//! API Response types
//!
//! Every storefront endpoint answers with the same envelope:
//! ```json
//! { "code": 200, "message": "OK", "data": { ... } }
//! ```
//! `code == 200` means success; any other value is an [`ErrorCode`].
//! Some endpoints name the payload `result` instead of `data`; both are accepted.

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Envelope success code
pub const SUCCESS_CODE: u16 = 200;

fn success_code() -> u16 {
    SUCCESS_CODE
}

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (200 for success, an [`ErrorCode`] otherwise)
    #[serde(default = "success_code")]
    pub code: u16,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (present on success)
    #[serde(alias = "result", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: Some("OK".to_string()),
            data: Some(data),
        }
    }

    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The envelope code as a known [`ErrorCode`], if it is one
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::try_from(self.code).ok()
    }
}

impl ApiResponse<()> {
    /// Create a success response without data
    pub fn ok() -> Self {
        Self {
            code: SUCCESS_CODE,
            message: Some("OK".to_string()),
            data: None,
        }
    }

    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: Some(err.message.clone()),
            data: None,
        }
    }

    /// Create an error response from a raw code and message
    pub fn error_with_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code.code(),
            message: Some(err.message),
            data: None,
        }
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = if self.is_success() {
            http::StatusCode::OK
        } else {
            ErrorCode::try_from(self.code)
                .map(|c| c.http_status())
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
        };

        (status, Json(self)).into_response()
    }
}

/// A page of results
///
/// Accepts both `items`/`total` and the Spring-style `content`/`totalElements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new", alias = "content")]
    pub items: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default, alias = "totalElements")]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, size: u32) -> Self {
        let total_pages = if size > 0 {
            total.div_ceil(u64::from(size)) as u32
        } else {
            1
        };

        Self {
            items,
            page,
            size,
            total,
            total_pages,
        }
    }

    /// Single page holding every item
    pub fn single_page(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            page: 0,
            size: total as u32,
            total,
            total_pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert_eq!(response.code, 200);
        assert!(response.is_success());
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::with_message(ErrorCode::VoucherExpired, "SUMMER10 expired");
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, 3003);
        assert!(!response.is_success());
        assert_eq!(response.error_code(), Some(ErrorCode::VoucherExpired));
        assert_eq!(response.message.as_deref(), Some("SUMMER10 expired"));
    }

    #[test]
    fn test_api_response_accepts_result_alias() {
        let json = r#"{"code":200,"result":{"orderId":"o-1"}}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.data.unwrap()["orderId"], "o-1");
    }

    #[test]
    fn test_api_response_missing_code_defaults_to_success() {
        let response: ApiResponse<u32> = serde_json::from_str(r#"{"data":7}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.data, Some(7));
    }

    #[test]
    fn test_api_response_serialize_skips_empty() {
        let json = serde_json::to_string(&ApiResponse::<()>::ok()).unwrap();
        assert_eq!(json, r#"{"code":200,"message":"OK"}"#);
    }

    #[test]
    fn test_page_spring_aliases() {
        let json = r#"{"content":[1,2,3],"totalElements":13,"page":1,"size":3,"totalPages":5}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 13);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_page_new_computes_total_pages() {
        let page = Page::new(vec!["a"; 10], 95, 0, 10);
        assert_eq!(page.total_pages, 10);

        let page: Page<u8> = Page::new(vec![], 0, 0, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
    }
}
