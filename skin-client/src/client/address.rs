//! Address endpoints

use shared::models::{Address, AddressForm};

use crate::error::ClientResult;

use super::SkinClient;
use super::common::path_segment;

impl SkinClient {
    /// GET `/addresses`, in server order
    pub async fn addresses(&self) -> ClientResult<Vec<Address>> {
        self.get("/addresses").await
    }

    /// POST `/addresses`
    pub async fn create_address(&self, form: &AddressForm) -> ClientResult<Address> {
        self.post("/addresses", form).await
    }

    /// PUT `/addresses/:id`
    pub async fn update_address(&self, id: &str, form: &AddressForm) -> ClientResult<Address> {
        self.put(&format!("/addresses/{}", path_segment(id)), form).await
    }
}
