//! Analytics events: a buyer interacting with an apartment listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{non_null, FieldMap, IntoFieldMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub id: i64,
    pub buyer_id: i64,
    pub apartment_id: i64,
    pub event_type: String,
    pub event_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnalyticsEventRequest {
    #[validate(range(min = 1, message = "buyer_id must be a positive id"))]
    pub buyer_id: i64,
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    pub apartment_id: i64,
    #[validate(length(min = 1, max = 50, message = "event_type must be 1-50 characters"))]
    pub event_type: String,
    /// Defaults to the time of insert.
    pub event_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAnalyticsEventRequest {
    #[validate(range(min = 1, message = "buyer_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub buyer_id: Option<i64>,
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub apartment_id: Option<i64>,
    #[validate(length(min = 1, max = 50, message = "event_type must be 1-50 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub event_timestamp: Option<DateTime<Utc>>,
}

impl IntoFieldMap for CreateAnalyticsEventRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new()
            .with("buyer_id", self.buyer_id)
            .with("apartment_id", self.apartment_id)
            .with("event_type", self.event_type);
        fields.set_if_present("event_timestamp", self.event_timestamp);
        fields
    }
}

impl IntoFieldMap for UpdateAnalyticsEventRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("buyer_id", self.buyer_id)
            .set_if_present("apartment_id", self.apartment_id)
            .set_if_present("event_type", self.event_type)
            .set_if_present("event_timestamp", self.event_timestamp);
        fields
    }
}
