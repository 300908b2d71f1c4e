//! Login-bearing people: realtors, owners and buyers share these columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::fields::{non_null, FieldMap};

/// Column holding the Argon2 PHC string.
pub const PASSWORD_COLUMN: &str = "password";

/// Account columns as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    /// Argon2 hash; never leaves the service.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub name: String,
    pub contact_info: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

/// Account columns supplied on creation. `password` is clear text here and is
/// hashed before it is written.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAccount {
    #[validate(custom(function = "shared::validation::validate_username"))]
    pub username: String,

    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Contact info must be 1-255 characters"))]
    pub contact_info: String,

    pub birth_date: NaiveDate,

    #[validate(length(min = 1, max = 20, message = "Gender must be 1-20 characters"))]
    pub gender: String,
}

/// Partial account update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AccountPatch {
    #[validate(custom(function = "shared::validation::validate_username"))]
    #[serde(default, deserialize_with = "non_null")]
    pub username: Option<String>,

    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    #[serde(default, deserialize_with = "non_null")]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Contact info must be 1-255 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub contact_info: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    pub birth_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 20, message = "Gender must be 1-20 characters"))]
    #[serde(default, deserialize_with = "non_null")]
    pub gender: Option<String>,
}

impl NewAccount {
    pub(crate) fn write_into(self, fields: &mut FieldMap) {
        fields
            .set("username", self.username)
            .set(PASSWORD_COLUMN, self.password)
            .set("name", self.name)
            .set("contact_info", self.contact_info)
            .set("birth_date", self.birth_date)
            .set("gender", self.gender);
    }
}

impl AccountPatch {
    pub(crate) fn write_into(self, fields: &mut FieldMap) {
        fields
            .set_if_present("username", self.username)
            .set_if_present(PASSWORD_COLUMN, self.password)
            .set_if_present("name", self.name)
            .set_if_present("contact_info", self.contact_info)
            .set_if_present("birth_date", self.birth_date)
            .set_if_present("gender", self.gender);
    }
}
