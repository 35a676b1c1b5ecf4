//! Address step
//!
//! Holds the loaded address list and the one selected for this checkout.
//! Create and edit always round-trip to the server and then reload the
//! whole list.

use shared::models::{Address, AddressForm, CartSnapshot};
use validator::Validate;

use crate::client::SkinClient;

use super::error::{CheckoutError, Notice};

pub const SELECT_ADDRESS_MESSAGE: &str = "Please select a delivery address";

#[derive(Debug, Clone, Default)]
pub struct AddressStep {
    addresses: Vec<Address>,
    selected: Option<String>,
    load_error: Option<Notice>,
}

impl AddressStep {
    pub fn new(addresses: Vec<Address>) -> Self {
        let mut step = Self::default();
        step.replace(addresses);
        step
    }

    /// Step built from a load result; a failed load is kept as a notice
    pub(crate) fn from_load(result: Result<Vec<Address>, crate::ClientError>) -> Self {
        match result {
            Ok(addresses) => Self::new(addresses),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load addresses");
                Self {
                    load_error: Some(Notice::from(&e)),
                    ..Self::default()
                }
            }
        }
    }

    /// Re-fetch the list, keeping the selection if it still exists
    pub async fn load(&mut self, client: &SkinClient) -> Result<(), CheckoutError> {
        match client.addresses().await {
            Ok(addresses) => {
                self.replace(addresses);
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                self.load_error = Some(Notice::from(&e));
                Err(e.into())
            }
        }
    }

    fn replace(&mut self, addresses: Vec<Address>) {
        self.addresses = addresses;

        let still_there = self
            .selected
            .as_deref()
            .is_some_and(|id| self.addresses.iter().any(|a| a.id == id));
        if !still_there {
            self.selected = self
                .addresses
                .iter()
                .find(|a| a.is_default)
                .map(|a| a.id.clone());
        }
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// No addresses yet; the view shows an explicit empty state
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn load_error(&self) -> Option<&Notice> {
        self.load_error.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&Address> {
        let id = self.selected.as_deref()?;
        self.addresses.iter().find(|a| a.id == id)
    }

    /// Local selection only; nothing is sent until checkout
    pub fn select(&mut self, address_id: &str) -> Result<&Address, CheckoutError> {
        let address = self
            .addresses
            .iter()
            .find(|a| a.id == address_id)
            .ok_or_else(|| CheckoutError::NotFound(format!("Address {address_id}")))?;
        self.selected = Some(address.id.clone());
        Ok(address)
    }

    /// Create an address, reload the list and select the new one
    pub async fn create(&mut self, client: &SkinClient, form: AddressForm) -> Result<Address, CheckoutError> {
        let form = validated(form)?;
        let created = client.create_address(&form).await?;
        tracing::info!(address_id = %created.id, "Address created");

        self.load(client).await?;
        self.selected = Some(created.id.clone());
        Ok(created)
    }

    /// Update an address and reload the list
    pub async fn edit(&mut self, client: &SkinClient, address_id: &str, form: AddressForm) -> Result<Address, CheckoutError> {
        let form = validated(form)?;
        let updated = client.update_address(address_id, &form).await?;
        tracing::info!(address_id = %updated.id, "Address updated");

        self.load(client).await?;
        Ok(updated)
    }

    /// Gate to the shipping step: `(cart_id, address_id)`
    pub fn continue_with(&self, cart: Option<&CartSnapshot>) -> Result<(String, String), CheckoutError> {
        let address = self
            .selected()
            .ok_or_else(|| CheckoutError::Validation(SELECT_ADDRESS_MESSAGE.into()))?;
        let cart = cart.ok_or(CheckoutError::NoCart)?;
        Ok((cart.cart_id.clone(), address.id.clone()))
    }
}

/// Trim, then check with the form's validation rules
fn validated(form: AddressForm) -> Result<AddressForm, CheckoutError> {
    let form = form.normalized();
    if let Err(errors) = form.validate() {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        let message = fields
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_deref()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CheckoutError::Validation(message));
    }
    Ok(form)
}
