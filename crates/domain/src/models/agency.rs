//! Agency domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{double_option, non_null, FieldMap, IntoFieldMap};

/// A real-estate agency employing realtors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub contact_info: String,
    /// Fraction of the sale price, e.g. `0.03`.
    pub commission_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAgencyRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    pub address: String,
    #[validate(length(min = 1, max = 255, message = "Contact info must be 1-255 characters"))]
    pub contact_info: String,
    #[validate(range(min = 0.0, max = 1.0, message = "Commission rate must be between 0 and 1"))]
    pub commission_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAgencyRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Contact info must be 1-255 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub contact_info: Option<String>,
    #[validate(range(min = 0.0, max = 1.0, message = "Commission rate must be between 0 and 1"))]
    #[serde(default, deserialize_with = "double_option")]
    pub commission_rate: Option<Option<f64>>,
}

impl IntoFieldMap for CreateAgencyRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("name", self.name)
            .with("address", self.address)
            .with("contact_info", self.contact_info)
            .with("commission_rate", self.commission_rate)
    }
}

impl IntoFieldMap for UpdateAgencyRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("name", self.name)
            .set_if_present("address", self.address)
            .set_if_present("contact_info", self.contact_info)
            .set_patch("commission_rate", self.commission_rate);
        fields
    }
}
