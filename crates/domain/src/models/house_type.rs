//! House type domain models (panel, brick, townhouse, ...).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{double_option, non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseType {
    pub id: i64,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHouseTypeRequest {
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "Type must be 1-50 characters"))]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHouseTypeRequest {
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "double_option")]
    #[validate(length(min = 1, max = 50, message = "Type must be 1-50 characters"))]
    pub kind: Option<Option<String>>,
}

impl IntoFieldMap for CreateHouseTypeRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("description", self.description)
            .with("type", self.kind)
    }
}

impl IntoFieldMap for UpdateHouseTypeRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("description", self.description)
            .set_patch("type", self.kind);
        fields
    }
}
