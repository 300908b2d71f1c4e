//! House domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{double_option, non_null, FieldMap, IntoFieldMap};

/// A building on a street.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: i64,
    pub street_id: i64,
    pub house_number: String,
    /// References `house_types`.
    pub type_id: i64,
    pub floors: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHouseRequest {
    #[validate(range(min = 1, message = "street_id must be a positive id"))]
    pub street_id: i64,
    #[validate(length(min = 1, max = 20, message = "House number must be 1-20 characters"))]
    pub house_number: String,
    #[validate(range(min = 1, message = "type_id must be a positive id"))]
    pub type_id: i64,
    #[validate(range(min = 1, max = 200, message = "Floors must be between 1 and 200"))]
    pub floors: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHouseRequest {
    #[validate(range(min = 1, message = "street_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub street_id: Option<i64>,
    #[validate(length(min = 1, max = 20, message = "House number must be 1-20 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub house_number: Option<String>,
    #[validate(range(min = 1, message = "type_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub type_id: Option<i64>,
    #[validate(range(min = 1, max = 200, message = "Floors must be between 1 and 200"))]
    #[serde(default, deserialize_with = "double_option")]
    pub floors: Option<Option<i32>>,
}

impl IntoFieldMap for CreateHouseRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("street_id", self.street_id)
            .with("house_number", self.house_number)
            .with("type_id", self.type_id)
            .with("floors", self.floors)
    }
}

impl IntoFieldMap for UpdateHouseRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("street_id", self.street_id)
            .set_if_present("house_number", self.house_number)
            .set_if_present("type_id", self.type_id)
            .set_patch("floors", self.floors);
        fields
    }
}
