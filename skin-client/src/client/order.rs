//! Order and payment endpoints

use shared::models::{CheckoutRequest, CheckoutResponse, Order, PaymentCallbackResult};
use shared::{ApiResponse, Page};

use crate::error::ClientResult;

use super::SkinClient;
use super::common::path_segment;

impl SkinClient {
    /// POST `/orders/checkout`
    ///
    /// The same `idempotency_key` must be reused when retrying a request
    /// whose outcome is unknown.
    pub async fn checkout(&self, request: &CheckoutRequest, idempotency_key: &str) -> ClientResult<CheckoutResponse> {
        self.post_idempotent("/orders/checkout", request, idempotency_key)
            .await
    }

    /// GET `/orders/payment-callback?<gateway query>`
    ///
    /// Returns the raw envelope: its code is half of the payment verdict.
    pub async fn payment_callback(&self, query: &str) -> ClientResult<ApiResponse<PaymentCallbackResult>> {
        let query = query.trim_start_matches('?');
        self.get_envelope(&format!("/orders/payment-callback?{query}"))
            .await
    }

    /// GET `/orders/my-orders?page&size`
    pub async fn my_orders(&self, page: u32, size: u32) -> ClientResult<Page<Order>> {
        self.get(&format!("/orders/my-orders?page={page}&size={size}"))
            .await
    }

    /// GET `/orders/:id`
    pub async fn order(&self, order_id: &str) -> ClientResult<Order> {
        self.get(&format!("/orders/{}", path_segment(order_id))).await
    }

    /// PUT `/orders/:id/cancel`; the response carries the new status
    pub async fn cancel_order(&self, order_id: &str) -> ClientResult<Order> {
        let order: Order = self.put_empty(&format!("/orders/{}/cancel", path_segment(order_id))).await?;
        tracing::info!(order_id, status = ?order.status, "Order cancel requested");
        Ok(order)
    }
}
