//! Buyer domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::account::{Account, AccountPatch, NewAccount};
use crate::fields::{FieldMap, IntoFieldMap};

/// A buyer or renter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: i64,
    #[serde(flatten)]
    pub account: Account,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBuyerRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub account: NewAccount,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBuyerRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub account: AccountPatch,
}

impl IntoFieldMap for CreateBuyerRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        self.account.write_into(&mut fields);
        fields
    }
}

impl IntoFieldMap for UpdateBuyerRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        self.account.write_into(&mut fields);
        fields
    }
}
