//! Return from the payment gateway
//!
//! The gateway sends the shopper back with its own result in the query
//! string. A payment counts as successful only when the backend verifies the
//! callback (envelope code 200) and the gateway reported `00`.

use reqwest::Url;
use shared::ApiResponse;
use shared::models::PaymentCallbackResult;
use shared::response::SUCCESS_CODE;

use crate::client::SkinClient;

pub const GATEWAY_SUCCESS_CODE: &str = "00";
pub const PAYMENT_SUCCESS_ROUTE: &str = "/payment-success";
pub const PAYMENT_FAILED_ROUTE: &str = "/payment-failed";

/// Parsed gateway callback query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayReturn {
    raw_query: String,
    params: Vec<(String, String)>,
}

impl GatewayReturn {
    /// Parse `vnp_Amount=...&vnp_ResponseCode=...`, with or without the `?`
    pub fn parse(query: &str) -> Self {
        let raw_query = query.trim().trim_start_matches('?').to_string();
        let params = Url::parse(&format!("http://gateway.invalid/?{raw_query}"))
            .map(|url| url.query_pairs().into_owned().collect())
            .unwrap_or_default();
        Self { raw_query, params }
    }

    /// The query exactly as received, forwarded to the backend untouched
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn response_code(&self) -> Option<&str> {
        self.get("vnp_ResponseCode")
    }

    pub fn transaction_status(&self) -> Option<&str> {
        self.get("vnp_TransactionStatus")
    }

    /// Merchant reference; the order id on this backend
    pub fn txn_ref(&self) -> Option<&str> {
        self.get("vnp_TxnRef")
    }

    /// Amount in dong (the gateway sends it multiplied by 100)
    pub fn amount(&self) -> Option<f64> {
        self.get("vnp_Amount")?.parse::<f64>().ok().map(|a| a / 100.0)
    }

    pub fn gateway_succeeded(&self) -> bool {
        self.response_code() == Some(GATEWAY_SUCCESS_CODE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentVerdict {
    Success { order_id: Option<String> },
    Failed { reason: String },
}

impl PaymentVerdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn route(&self) -> &'static str {
        match self {
            Self::Success { .. } => PAYMENT_SUCCESS_ROUTE,
            Self::Failed { .. } => PAYMENT_FAILED_ROUTE,
        }
    }
}

/// Combine the backend's verification envelope with the gateway's own code
pub fn judge(gateway: &GatewayReturn, verification: &ApiResponse<PaymentCallbackResult>) -> PaymentVerdict {
    if verification.code != SUCCESS_CODE {
        return PaymentVerdict::Failed {
            reason: verification
                .message
                .clone()
                .unwrap_or_else(|| format!("Payment verification failed (code {})", verification.code)),
        };
    }
    if !gateway.gateway_succeeded() {
        return PaymentVerdict::Failed {
            reason: format!(
                "Payment gateway returned code {}",
                gateway.response_code().unwrap_or("none")
            ),
        };
    }

    let order_id = verification
        .data
        .as_ref()
        .and_then(|d| d.order_id.clone())
        .or_else(|| gateway.txn_ref().map(str::to_string));
    PaymentVerdict::Success { order_id }
}

/// Verify a gateway return with the backend and decide where to go
pub async fn verify_gateway_return(client: &SkinClient, query: &str) -> PaymentVerdict {
    let gateway = GatewayReturn::parse(query);

    let verdict = match client.payment_callback(gateway.raw_query()).await {
        Ok(verification) => judge(&gateway, &verification),
        Err(e) => {
            tracing::warn!(error = %e, "Payment verification call failed");
            PaymentVerdict::Failed {
                reason: e.user_message(),
            }
        }
    };

    tracing::info!(
        txn_ref = ?gateway.txn_ref(),
        response_code = ?gateway.response_code(),
        ?verdict,
        "Gateway return verified"
    );
    verdict
}
