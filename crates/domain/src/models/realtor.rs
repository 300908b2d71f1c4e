//! Realtor domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::account::{Account, AccountPatch, NewAccount};
use crate::fields::{non_null, FieldMap, IntoFieldMap};

/// A realtor working for one agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realtor {
    pub id: i64,
    pub agency_id: i64,
    #[serde(flatten)]
    pub account: Account,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRealtorRequest {
    #[validate(range(min = 1, message = "agency_id must be a positive id"))]
    pub agency_id: i64,
    #[serde(flatten)]
    #[validate(nested)]
    pub account: NewAccount,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRealtorRequest {
    #[validate(range(min = 1, message = "agency_id must be a positive id"))]
    #[serde(default, deserialize_with = "non_null")]
    pub agency_id: Option<i64>,
    #[serde(flatten)]
    #[validate(nested)]
    pub account: AccountPatch,
}

impl IntoFieldMap for CreateRealtorRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new().with("agency_id", self.agency_id);
        self.account.write_into(&mut fields);
        fields
    }
}

impl IntoFieldMap for UpdateRealtorRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.set_if_present("agency_id", self.agency_id);
        self.account.write_into(&mut fields);
        fields
    }
}
