//! Condition domain models: the state an apartment is offered in.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub for_sale: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateConditionRequest {
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    pub for_sale: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateConditionRequest {
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[serde(default, deserialize_with = "non_null")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "non_null")]
    pub for_sale: Option<bool>,
}

impl IntoFieldMap for CreateConditionRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("description", self.description)
            .with("price", self.price)
            .with("for_sale", self.for_sale)
    }
}

impl IntoFieldMap for UpdateConditionRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("description", self.description)
            .set_if_present("price", self.price)
            .set_if_present("for_sale", self.for_sale);
        fields
    }
}
