//! Voucher endpoints
//!
//! Two pools: vouchers the user owns, and vouchers they can still buy with
//! loyalty points. The exchange is atomic server-side.

use http::Method;
use shared::Page;
use shared::models::Voucher;

use crate::error::ClientResult;

use super::SkinClient;
use super::common::path_segment;

impl SkinClient {
    /// GET `/vouchers/my-voucher?page&size`
    pub async fn my_vouchers_page(&self, page: u32, size: u32) -> ClientResult<Page<Voucher>> {
        self.get(&format!("/vouchers/my-voucher?page={page}&size={size}"))
            .await
    }

    /// First page of owned vouchers at the configured page size
    pub async fn my_vouchers(&self) -> ClientResult<Vec<Voucher>> {
        let page = self
            .my_vouchers_page(0, self.config().voucher_page_size)
            .await?;
        Ok(page.items)
    }

    /// GET `/vouchers/available?page&size`
    pub async fn available_vouchers(&self, page: u32, size: u32) -> ClientResult<Page<Voucher>> {
        self.get(&format!("/vouchers/available?page={page}&size={size}"))
            .await
    }

    /// POST `/vouchers/:id/exchange`, spending points on a voucher
    pub async fn exchange_voucher(&self, voucher_id: &str) -> ClientResult<()> {
        self.call_unit::<()>(Method::POST, &format!("/vouchers/{}/exchange", path_segment(voucher_id)), None)
            .await?;
        tracing::info!(voucher_id, "Voucher exchanged for points");
        Ok(())
    }
}
