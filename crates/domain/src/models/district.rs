//! District domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{non_null, FieldMap, IntoFieldMap};

/// A city district; streets belong to exactly one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDistrictRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDistrictRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
}

impl IntoFieldMap for CreateDistrictRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new().with("name", self.name)
    }
}

impl IntoFieldMap for UpdateDistrictRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.set_if_present("name", self.name);
        fields
    }
}
