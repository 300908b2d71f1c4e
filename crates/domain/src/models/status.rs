//! Listing status domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{double_option, non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub date_listed: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatusRequest {
    pub date_listed: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub date_listed: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_active: Option<bool>,
}

impl IntoFieldMap for CreateStatusRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("date_listed", self.date_listed)
            .with("is_active", self.is_active)
    }
}

impl IntoFieldMap for UpdateStatusRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_patch("date_listed", self.date_listed)
            .set_if_present("is_active", self.is_active);
        fields
    }
}
