//! Cart endpoints

use http::Method;
use shared::models::{CartItemUpdate, CartSnapshot};

use crate::error::ClientResult;

use super::SkinClient;
use super::common::path_segment;

impl SkinClient {
    /// GET `/carts`
    pub async fn cart(&self) -> ClientResult<CartSnapshot> {
        self.get("/carts").await
    }

    /// Change a line's quantity, then re-fetch the cart
    pub async fn update_cart_item(&self, product_id: &str, quantity: u32) -> ClientResult<CartSnapshot> {
        let body = CartItemUpdate { quantity };
        self.call_unit(Method::PUT, &format!("/carts/items/{}", path_segment(product_id)), Some(&body))
            .await?;
        self.cart().await
    }

    /// Remove a line, then re-fetch the cart
    pub async fn remove_cart_item(&self, product_id: &str) -> ClientResult<CartSnapshot> {
        self.call_unit::<()>(Method::DELETE, &format!("/carts/items/{}", path_segment(product_id)), None)
            .await?;
        self.cart().await
    }
}
