//! Sale domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{non_null, FieldMap, IntoFieldMap};

/// A completed apartment sale. `seller_id` references an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub apartment_id: i64,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub realtor_id: i64,
    pub sale_date: DateTime<Utc>,
    pub sale_price: f64,
    pub commission: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSaleRequest {
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    pub apartment_id: i64,
    #[validate(range(min = 1, message = "buyer_id must be a positive id"))]
    pub buyer_id: i64,
    #[validate(range(min = 1, message = "seller_id must be a positive id"))]
    pub seller_id: i64,
    #[validate(range(min = 1, message = "realtor_id must be a positive id"))]
    pub realtor_id: i64,
    pub sale_date: DateTime<Utc>,
    #[validate(range(min = 0.0, message = "sale_price must not be negative"))]
    pub sale_price: f64,
    #[validate(range(min = 0.0, message = "commission must not be negative"))]
    pub commission: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSaleRequest {
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub apartment_id: Option<i64>,
    #[validate(range(min = 1, message = "buyer_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub buyer_id: Option<i64>,
    #[validate(range(min = 1, message = "seller_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub seller_id: Option<i64>,
    #[validate(range(min = 1, message = "realtor_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub realtor_id: Option<i64>,
    #[serde(default, deserialize_with = "non_null")]
    pub sale_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0.0, message = "sale_price must not be negative"))]
    #[serde(default, deserialize_with = "non_null")]
    pub sale_price: Option<f64>,
    #[validate(range(min = 0.0, message = "commission must not be negative"))]
    #[serde(default, deserialize_with = "non_null")]
    pub commission: Option<f64>,
    #[serde(default, deserialize_with = "non_null")]
    pub profit: Option<f64>,
}

impl IntoFieldMap for CreateSaleRequest {
    fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .with("apartment_id", self.apartment_id)
            .with("buyer_id", self.buyer_id)
            .with("seller_id", self.seller_id)
            .with("realtor_id", self.realtor_id)
            .with("sale_date", self.sale_date)
            .with("sale_price", self.sale_price)
            .with("commission", self.commission)
            .with("profit", self.profit)
    }
}

impl IntoFieldMap for UpdateSaleRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("apartment_id", self.apartment_id)
            .set_if_present("buyer_id", self.buyer_id)
            .set_if_present("seller_id", self.seller_id)
            .set_if_present("realtor_id", self.realtor_id)
            .set_if_present("sale_date", self.sale_date)
            .set_if_present("sale_price", self.sale_price)
            .set_if_present("commission", self.commission)
            .set_if_present("profit", self.profit);
        fields
    }
}
