//! Owner domain models.
//!
//! Owners are keyed by `owners_id`, not `id`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::account::{Account, AccountPatch, NewAccount};
use crate::fields::{FieldMap, IntoFieldMap};

/// A property owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub owners_id: i64,
    #[serde(flatten)]
    pub account: Account,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOwnerRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub account: NewAccount,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOwnerRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub account: AccountPatch,
}

impl IntoFieldMap for CreateOwnerRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        self.account.write_into(&mut fields);
        fields
    }
}

impl IntoFieldMap for UpdateOwnerRequest {
    fn into_field_map(self) -> FieldMap {
        let mut fields = FieldMap::new();
        self.account.write_into(&mut fields);
        fields
    }
}
