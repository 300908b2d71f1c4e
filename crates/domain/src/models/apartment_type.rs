//! Apartment type domain models (studio, two-room furnished, ...).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{double_option, non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentType {
    pub id: i64,
    pub num_rooms: Option<i32>,
    pub is_furnished: Option<bool>,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApartmentTypeRequest {
    #[validate(range(min = 0, max = 50, message = "num_rooms must be between 0 and 50"))]
    pub num_rooms: Option<i32>,
    pub is_furnished: Option<bool>,
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApartmentTypeRequest {
    #[validate(range(min = 0, max = 50, message = "num_rooms must be between 0 and 50"))]
    #[serde(default, deserialize_with = "double_option")]
    pub num_rooms: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub is_furnished: Option<Option<bool>>,
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
}

impl IntoFieldMap for CreateApartmentTypeRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("num_rooms", self.num_rooms)
            .with("is_furnished", self.is_furnished)
            .with("description", self.description)
    }
}

impl IntoFieldMap for UpdateApartmentTypeRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_patch("num_rooms", self.num_rooms)
            .set_patch("is_furnished", self.is_furnished)
            .set_if_present("description", self.description);
        fields
    }
}
