//! Database entity definitions.
//!
//! Entities are direct mappings to database rows. Each implements
//! [`crate::repository::Record`], tying it to its table descriptor.

pub mod account;
pub mod agency;
pub mod apartment;
pub mod catalog;
pub mod location;
pub mod transaction;

pub use account::{BuyerEntity, OwnerEntity, RealtorEntity};
pub use agency::AgencyEntity;
pub use apartment::{ApartmentEntity, ApartmentPhotoEntity};
pub use catalog::{ApartmentTypeEntity, ConditionEntity, StatusEntity};
pub use location::{DistrictEntity, HouseEntity, HouseTypeEntity, StreetEntity};
pub use transaction::{AnalyticsEventEntity, SaleEntity, SalesRentEntity};
