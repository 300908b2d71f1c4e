//! Sale-or-rental transactions (`sales_rent` table).
//!
//! A row is either a one-time sale or a rental over a date range. The `kind`
//! column says which, and a CHECK constraint keeps the other variant's
//! columns null. Here that becomes [`TransactionTerms`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::fields::{double_option, non_null, FieldMap, FieldValue, IntoFieldMap};

/// Discriminator stored in `sales_rent.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Rental,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Rental => "rental",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(TransactionKind::Sale),
            "rental" => Ok(TransactionKind::Rental),
            other => Err(TransactionError::UnknownKind(other.to_string())),
        }
    }
}

/// Terms that differ between a sale and a rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransactionTerms {
    Sale {
        sale_date: DateTime<Utc>,
        sale_price: f64,
    },
    Rental {
        rent_start: DateTime<Utc>,
        rent_end: Option<DateTime<Utc>>,
        rent_price: f64,
    },
}

impl TransactionTerms {
    pub fn kind(&self) -> TransactionKind {
        match self {
            TransactionTerms::Sale { .. } => TransactionKind::Sale,
            TransactionTerms::Rental { .. } => TransactionKind::Rental,
        }
    }

    /// Rebuilds the terms from the flat nullable columns of a row.
    pub fn from_columns(
        kind: &str,
        sale_date: Option<DateTime<Utc>>,
        sale_price: Option<f64>,
        rent_start: Option<DateTime<Utc>>,
        rent_end: Option<DateTime<Utc>>,
        rent_price: Option<f64>,
    ) -> Result<Self, TransactionError> {
        match kind.parse::<TransactionKind>()? {
            TransactionKind::Sale => match (sale_date, sale_price) {
                (Some(sale_date), Some(sale_price)) => Ok(TransactionTerms::Sale {
                    sale_date,
                    sale_price,
                }),
                _ => Err(TransactionError::MissingTerms(TransactionKind::Sale)),
            },
            TransactionKind::Rental => match (rent_start, rent_price) {
                (Some(rent_start), Some(rent_price)) => Ok(TransactionTerms::Rental {
                    rent_start,
                    rent_end,
                    rent_price,
                }),
                _ => Err(TransactionError::MissingTerms(TransactionKind::Rental)),
            },
        }
    }

    /// Writes every variant column, nulling the ones the variant does not use,
    /// so switching kind on update leaves no stale terms behind.
    fn write_into(self, fields: &mut FieldMap) {
        fields.set("kind", self.kind().as_str());
        match self {
            TransactionTerms::Sale {
                sale_date,
                sale_price,
            } => {
                fields
                    .set("sale_date", sale_date)
                    .set("sale_price", sale_price)
                    .set("rent_start", FieldValue::Null)
                    .set("rent_end", FieldValue::Null)
                    .set("rent_price", FieldValue::Null);
            }
            TransactionTerms::Rental {
                rent_start,
                rent_end,
                rent_price,
            } => {
                fields
                    .set("sale_date", FieldValue::Null)
                    .set("sale_price", FieldValue::Null)
                    .set("rent_start", rent_start)
                    .set("rent_end", rent_end)
                    .set("rent_price", rent_price);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionError {
    #[error("unknown transaction kind '{0}'")]
    UnknownKind(String),

    #[error("{0} transaction is missing its date or price")]
    MissingTerms(TransactionKind),
}

/// Prices must be non-negative and a rental may not end before it starts.
pub fn validate_terms(terms: &TransactionTerms) -> Result<(), ValidationError> {
    let (price, range_ok) = match terms {
        TransactionTerms::Sale { sale_price, .. } => (*sale_price, true),
        TransactionTerms::Rental {
            rent_start,
            rent_end,
            rent_price,
        } => (*rent_price, rent_end.map_or(true, |end| end >= *rent_start)),
    };

    if price < 0.0 {
        let mut err = ValidationError::new("negative_price");
        err.message = Some("Price must not be negative".into());
        return Err(err);
    }
    if !range_ok {
        let mut err = ValidationError::new("rent_range");
        err.message = Some("rent_end must not be before rent_start".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRent {
    pub id: i64,
    pub apartment_id: i64,
    /// References `buyers`.
    pub renter_id: i64,
    /// References `owners.owners_id`.
    pub owner_id: i64,
    pub realtor_id: i64,
    pub commission: f64,
    pub profit: f64,
    #[serde(flatten)]
    pub terms: TransactionTerms,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSalesRentRequest {
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    pub apartment_id: i64,
    #[validate(range(min = 1, message = "renter_id must be a positive id"))]
    pub renter_id: i64,
    #[validate(range(min = 1, message = "owner_id must be a positive id"))]
    pub owner_id: i64,
    #[validate(range(min = 1, message = "realtor_id must be a positive id"))]
    pub realtor_id: i64,
    #[validate(range(min = 0.0, message = "commission must not be negative"))]
    pub commission: f64,
    pub profit: f64,
    #[serde(flatten)]
    #[validate(custom(function = "validate_terms"))]
    pub terms: TransactionTerms,
}

/// Partial update. Terms are replaced as a whole; individual rent dates can
/// still be patched through `rent_end` while the row stays a rental. The two
/// are mutually exclusive.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_terms_patch"))]
pub struct UpdateSalesRentRequest {
    #[validate(range(min = 1, message = "apartment_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub apartment_id: Option<i64>,
    #[validate(range(min = 1, message = "renter_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub renter_id: Option<i64>,
    #[validate(range(min = 1, message = "owner_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub owner_id: Option<i64>,
    #[validate(range(min = 1, message = "realtor_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub realtor_id: Option<i64>,
    #[validate(range(min = 0.0, message = "commission must not be negative"))]
    #[serde(default, deserialize_with = "non_null")]
    pub commission: Option<f64>,
    #[serde(default, deserialize_with = "non_null")]
    pub profit: Option<f64>,
    #[validate(custom(function = "validate_terms"))]
    #[serde(default, deserialize_with = "non_null")]
    pub terms: Option<TransactionTerms>,
    #[serde(default, deserialize_with = "double_option")]
    pub rent_end: Option<Option<DateTime<Utc>>>,
}

fn validate_terms_patch(request: &UpdateSalesRentRequest) -> Result<(), ValidationError> {
    if request.terms.is_some() && request.rent_end.is_some() {
        let mut err = ValidationError::new("terms_conflict");
        err.message = Some("Send rent_end inside terms when replacing terms".into());
        return Err(err);
    }
    Ok(())
}

impl IntoFieldMap for CreateSalesRentRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new()
            .with("apartment_id", self.apartment_id)
            .with("renter_id", self.renter_id)
            .with("owner_id", self.owner_id)
            .with("realtor_id", self.realtor_id)
            .with("commission", self.commission)
            .with("profit", self.profit);
        self.terms.write_into(&mut fields);
        fields
    }
}

impl IntoFieldMap for UpdateSalesRentRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields
            .set_if_present("apartment_id", self.apartment_id)
            .set_if_present("renter_id", self.renter_id)
            .set_if_present("owner_id", self.owner_id)
            .set_if_present("realtor_id", self.realtor_id)
            .set_if_present("commission", self.commission)
            .set_if_present("profit", self.profit);
        if let Some(terms) = self.terms {
            terms.write_into(&mut fields);
        } else {
            fields.set_patch("rent_end", self.rent_end);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sale_request_from_json() {
        let request: CreateSalesRentRequest = serde_json::from_value(serde_json::json!({
            "apartment_id": 1,
            "renter_id": 2,
            "owner_id": 3,
            "realtor_id": 4,
            "commission": 3000.0,
            "profit": 97000.0,
            "kind": "sale",
            "sale_date": "2024-05-01T12:00:00Z",
            "sale_price": 100000.0
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.terms.kind(), TransactionKind::Sale);

        let fields = request.into_field_map();
        assert_eq!(fields.get("kind"), Some(&FieldValue::Text("sale".into())));
        assert_eq!(fields.get("rent_start"), Some(&FieldValue::Null));
        assert_eq!(fields.get("sale_price"), Some(&FieldValue::Float(100000.0)));
    }

    #[test]
    fn test_rental_request_open_ended() {
        let request: CreateSalesRentRequest = serde_json::from_value(serde_json::json!({
            "apartment_id": 1,
            "renter_id": 2,
            "owner_id": 3,
            "realtor_id": 4,
            "commission": 150.0,
            "profit": 850.0,
            "kind": "rental",
            "rent_start": "2024-05-01T12:00:00Z",
            "rent_end": null,
            "rent_price": 1000.0
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        let fields = request.into_field_map();
        assert_eq!(fields.get("sale_date"), Some(&FieldValue::Null));
        assert_eq!(fields.get("rent_end"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_rental_ending_before_start_rejected() {
        let terms = TransactionTerms::Rental {
            rent_start: day(10),
            rent_end: Some(day(9)),
            rent_price: 900.0,
        };
        let err = validate_terms(&terms).unwrap_err();
        assert_eq!(err.code, "rent_range");
    }

    #[test]
    fn test_from_columns_sale_and_rental() {
        let sale =
            TransactionTerms::from_columns("sale", Some(day(1)), Some(5.0), None, None, None)
                .unwrap();
        assert_eq!(sale.kind(), TransactionKind::Sale);

        let rental = TransactionTerms::from_columns(
            "rental",
            None,
            None,
            Some(day(1)),
            Some(day(30)),
            Some(700.0),
        )
        .unwrap();
        assert_eq!(
            rental,
            TransactionTerms::Rental {
                rent_start: day(1),
                rent_end: Some(day(30)),
                rent_price: 700.0
            }
        );
    }

    #[test]
    fn test_from_columns_rejects_incomplete_rows() {
        let err = TransactionTerms::from_columns("rental", Some(day(1)), Some(5.0), None, None, None)
            .unwrap_err();
        assert_eq!(err, TransactionError::MissingTerms(TransactionKind::Rental));

        let err = TransactionTerms::from_columns("lease", None, None, None, None, None).unwrap_err();
        assert!(matches!(err, TransactionError::UnknownKind(k) if k == "lease"));
    }

    #[test]
    fn test_serialized_transaction_is_flat_and_tagged() {
        let record = SalesRent {
            id: 7,
            apartment_id: 1,
            renter_id: 2,
            owner_id: 3,
            realtor_id: 4,
            commission: 10.0,
            profit: 90.0,
            terms: TransactionTerms::Sale {
                sale_date: day(2),
                sale_price: 100.0,
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "sale");
        assert_eq!(json["sale_price"], 100.0);
        assert!(json.get("rent_start").is_none());
    }

    #[test]
    fn test_update_rent_end_only() {
        let request: UpdateSalesRentRequest =
            serde_json::from_value(serde_json::json!({ "rent_end": "2024-06-01T00:00:00Z" }))
                .unwrap();
        let fields = request.into_field_map();
        assert_eq!(fields.columns().collect::<Vec<_>>(), vec!["rent_end"]);
    }

    #[test]
    fn test_update_with_terms_and_rent_end_rejected() {
        let request: UpdateSalesRentRequest = serde_json::from_value(serde_json::json!({
            "terms": {
                "kind": "rental",
                "rent_start": "2024-05-01T12:00:00Z",
                "rent_price": 1000.0
            },
            "rent_end": "2024-06-01T00:00:00Z"
        }))
        .unwrap();
        let err = request.validate().unwrap_err();
        assert!(err.errors().contains_key("__all__"));
    }

    #[test]
    fn test_update_rejects_null_terms() {
        let result =
            serde_json::from_value::<UpdateSalesRentRequest>(serde_json::json!({ "terms": null }));
        assert!(result.is_err());
    }
}
