//! Apartment domain models.
//!
//! Only the apartment type is mandatory. An apartment without an owner is
//! unassigned inventory; house, condition and status may be filled in later.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{double_option, non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: i64,
    pub house_id: Option<i64>,
    pub apartment_type_id: i64,
    pub owner_id: Option<i64>,
    pub condition_id: Option<i64>,
    pub status_id: Option<i64>,
    pub apartment_number: String,
    pub square_meters: f64,
    pub owner_price: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApartmentRequest {
    #[validate(range(min = 1, message = "house_id must be a positive id"))]
    pub house_id: Option<i64>,
    #[validate(range(min = 1, message = "apartment_type_id must be a positive id"))]
    pub apartment_type_id: i64,
    #[validate(range(min = 1, message = "owner_id must be a positive id"))]
    pub owner_id: Option<i64>,
    #[validate(range(min = 1, message = "condition_id must be a positive id"))]
    pub condition_id: Option<i64>,
    #[validate(range(min = 1, message = "status_id must be a positive id"))]
    pub status_id: Option<i64>,
    #[validate(length(min = 1, max = 20, message = "Apartment number must be 1-20 characters"))]
    pub apartment_number: String,
    #[validate(range(min = 1.0, max = 10000.0, message = "square_meters must be between 1 and 10000"))]
    pub square_meters: f64,
    #[validate(range(min = 0.0, message = "owner_price must not be negative"))]
    pub owner_price: f64,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApartmentRequest {
    #[validate(range(min = 1, message = "house_id must be a positive id"))]
    #[serde(default, deserialize_with = "double_option")]
    pub house_id: Option<Option<i64>>,
    #[validate(range(min = 1, message = "apartment_type_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub apartment_type_id: Option<i64>,
    #[validate(range(min = 1, message = "owner_id must be a positive id"))]
    #[serde(default, deserialize_with = "double_option")]
    pub owner_id: Option<Option<i64>>,
    #[validate(range(min = 1, message = "condition_id must be a positive id"))]
    #[serde(default, deserialize_with = "double_option")]
    pub condition_id: Option<Option<i64>>,
    #[validate(range(min = 1, message = "status_id must be a positive id"))]
    #[serde(default, deserialize_with = "double_option")]
    pub status_id: Option<Option<i64>>,
    #[validate(length(min = 1, max = 20, message = "Apartment number must be 1-20 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub apartment_number: Option<String>,
    #[validate(range(min = 1.0, max = 10000.0, message = "square_meters must be between 1 and 10000"))]
    #[serde(default, deserialize_with = "non_null")]
    pub square_meters: Option<f64>,
    #[validate(range(min = 0.0, message = "owner_price must not be negative"))]
    #[serde(default, deserialize_with = "non_null")]
    pub owner_price: Option<f64>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl IntoFieldMap for CreateApartmentRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("house_id", self.house_id)
            .with("apartment_type_id", self.apartment_type_id)
            .with("owner_id", self.owner_id)
            .with("condition_id", self.condition_id)
            .with("status_id", self.status_id)
            .with("apartment_number", self.apartment_number)
            .with("square_meters", self.square_meters)
            .with("owner_price", self.owner_price)
            .with("description", self.description)
    }
}

impl IntoFieldMap for UpdateApartmentRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_patch("house_id", self.house_id)
            .set_if_present("apartment_type_id", self.apartment_type_id)
            .set_patch("owner_id", self.owner_id)
            .set_patch("condition_id", self.condition_id)
            .set_patch("status_id", self.status_id)
            .set_if_present("apartment_number", self.apartment_number)
            .set_if_present("square_meters", self.square_meters)
            .set_if_present("owner_price", self.owner_price)
            .set_patch("description", self.description);
        fields
    }
}
