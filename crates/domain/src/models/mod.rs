//! Domain models for the realty back office.
//!
//! Each entity has a read model plus create and partial-update requests that
//! validate themselves and convert into a [`crate::fields::FieldMap`].

pub mod account;
pub mod agency;
pub mod analytics;
pub mod apartment;
pub mod apartment_photo;
pub mod apartment_type;
pub mod buyer;
pub mod condition;
pub mod district;
pub mod house;
pub mod house_type;
pub mod owner;
pub mod realtor;
pub mod sale;
pub mod sales_rent;
pub mod status;
pub mod street;

pub use account::{Account, AccountPatch, NewAccount, PASSWORD_COLUMN};
pub use agency::{Agency, CreateAgencyRequest, UpdateAgencyRequest};
pub use analytics::{AnalyticsEvent, CreateAnalyticsEventRequest, UpdateAnalyticsEventRequest};
pub use apartment::{Apartment, CreateApartmentRequest, UpdateApartmentRequest};
pub use apartment_photo::{
    ApartmentPhoto, CreateApartmentPhotoRequest, UpdateApartmentPhotoRequest,
};
pub use apartment_type::{ApartmentType, CreateApartmentTypeRequest, UpdateApartmentTypeRequest};
pub use buyer::{Buyer, CreateBuyerRequest, UpdateBuyerRequest};
pub use condition::{Condition, CreateConditionRequest, UpdateConditionRequest};
pub use district::{CreateDistrictRequest, District, UpdateDistrictRequest};
pub use house::{CreateHouseRequest, House, UpdateHouseRequest};
pub use house_type::{CreateHouseTypeRequest, HouseType, UpdateHouseTypeRequest};
pub use owner::{CreateOwnerRequest, Owner, UpdateOwnerRequest};
pub use realtor::{CreateRealtorRequest, Realtor, UpdateRealtorRequest};
pub use sale::{CreateSaleRequest, Sale, UpdateSaleRequest};
pub use sales_rent::{
    CreateSalesRentRequest, SalesRent, TransactionError, TransactionKind, TransactionTerms,
    UpdateSalesRentRequest,
};
pub use status::{CreateStatusRequest, Status, UpdateStatusRequest};
pub use street::{CreateStreetRequest, Street, UpdateStreetRequest};
