//! Street domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub id: i64,
    pub district_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStreetRequest {
    #[validate(range(min = 1, message = "district_id must be a positive id"))]
    pub district_id: i64,
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStreetRequest {
    #[validate(range(min = 1, message = "district_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub district_id: Option<i64>,
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
}

impl IntoFieldMap for CreateStreetRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("district_id", self.district_id)
            .with("name", self.name)
    }
}

impl IntoFieldMap for UpdateStreetRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("district_id", self.district_id)
            .set_if_present("name", self.name);
        fields
    }
}
