//! Address Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub address_line: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// The server's `addressLine` if present, otherwise composed from parts
    pub fn full_address(&self) -> String {
        match self.address_line.as_deref() {
            Some(line) if !line.trim().is_empty() => line.to_string(),
            _ => compose_address_line(&self.street, &self.ward, &self.district, &self.city),
        }
    }
}

/// `street, ward, district, city`, skipping blank parts
pub fn compose_address_line(street: &str, ward: &str, district: &str, city: &str) -> String {
    [street, ward, district, city]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create / update address payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressForm {
    #[validate(length(min = 1, message = "Recipient name is required"))]
    pub name: String,
    #[validate(length(min = 9, max = 15, message = "Phone number must have 9 to 15 digits"))]
    pub phone: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    #[validate(length(min = 1, message = "Ward is required"))]
    pub ward: String,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl AddressForm {
    /// Trims every field and fills in `addressLine`
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.phone,
            &mut self.city,
            &mut self.district,
            &mut self.ward,
            &mut self.street,
        ] {
            *field = field.trim().to_string();
        }
        self.address_line = Some(compose_address_line(
            &self.street,
            &self.ward,
            &self.district,
            &self.city,
        ));
        self
    }
}
