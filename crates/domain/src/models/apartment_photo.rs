//! Apartment photo domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentPhoto {
    pub id: i64,
    pub apartment_id: i64,
    pub photo_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApartmentPhotoRequest {
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    pub apartment_id: i64,
    #[validate(url(message = "photo_url must be a valid URL"))]
    #[validate(length(max = 2048, message = "photo_url must be at most 2048 characters"))]
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApartmentPhotoRequest {
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub apartment_id: Option<i64>,
    #[validate(url(message = "photo_url must be a valid URL"))]
    #[validate(length(max = 2048, message = "photo_url must be at most 2048 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub photo_url: Option<String>,
}

impl IntoFieldMap for CreateApartmentPhotoRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("apartment_id", self.apartment_id)
            .with("photo_url", self.photo_url)
    }
}

impl IntoFieldMap for UpdateApartmentPhotoRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("apartment_id", self.apartment_id)
            .set_if_present("photo_url", self.photo_url);
        fields
    }
}
