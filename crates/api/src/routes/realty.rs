//! The realty resources and their URL segments.

use axum::Router;
use domain::fields::FieldMap;
use domain::models::*;
use persistence::entities::*;

use super::resources::{hash_password_field, resource_routes, Resource};
use crate::app::AppState;
use crate::error::ApiError;

macro_rules! resource {
    ($name:ident, $path:literal, $entity:ty, $model:ty, $create:ty, $update:ty) => {
        pub struct $name;

        impl Resource for $name {
            type Entity = $entity;
            type Model = $model;
            type Create = $create;
            type Update = $update;
            const PATH: &'static str = $path;
        }
    };
}

/// Same as `resource!` but hashes the account password before writing.
macro_rules! account_resource {
    ($name:ident, $path:literal, $entity:ty, $model:ty, $create:ty, $update:ty) => {
        pub struct $name;

        impl Resource for $name {
            type Entity = $entity;
            type Model = $model;
            type Create = $create;
            type Update = $update;
            const PATH: &'static str = $path;

            fn prepare(fields: &mut FieldMap) -> Result<(), ApiError> {
                hash_password_field(fields)
            }
        }
    };
}

resource!(Agencies, "agencies", AgencyEntity, Agency, CreateAgencyRequest, UpdateAgencyRequest);
account_resource!(Realtors, "realtors", RealtorEntity, Realtor, CreateRealtorRequest, UpdateRealtorRequest);
account_resource!(Owners, "owners", OwnerEntity, Owner, CreateOwnerRequest, UpdateOwnerRequest);
account_resource!(Buyers, "buyers", BuyerEntity, Buyer, CreateBuyerRequest, UpdateBuyerRequest);
resource!(Districts, "districts", DistrictEntity, District, CreateDistrictRequest, UpdateDistrictRequest);
resource!(Streets, "streets", StreetEntity, Street, CreateStreetRequest, UpdateStreetRequest);
resource!(HouseTypes, "house-types", HouseTypeEntity, HouseType, CreateHouseTypeRequest, UpdateHouseTypeRequest);
resource!(Houses, "houses", HouseEntity, House, CreateHouseRequest, UpdateHouseRequest);
resource!(ApartmentTypes, "apartment-types", ApartmentTypeEntity, ApartmentType, CreateApartmentTypeRequest, UpdateApartmentTypeRequest);
resource!(Conditions, "conditions", ConditionEntity, Condition, CreateConditionRequest, UpdateConditionRequest);
resource!(Statuses, "statuses", StatusEntity, Status, CreateStatusRequest, UpdateStatusRequest);
resource!(Apartments, "apartments", ApartmentEntity, Apartment, CreateApartmentRequest, UpdateApartmentRequest);
resource!(ApartmentPhotos, "apartment-photos", ApartmentPhotoEntity, ApartmentPhoto, CreateApartmentPhotoRequest, UpdateApartmentPhotoRequest);
resource!(Sales, "sales", SaleEntity, Sale, CreateSaleRequest, UpdateSaleRequest);
resource!(SalesRents, "sales-rent", SalesRentEntity, SalesRent, CreateSalesRentRequest, UpdateSalesRentRequest);
resource!(Analytics, "analytics", AnalyticsEventEntity, AnalyticsEvent, CreateAnalyticsEventRequest, UpdateAnalyticsEventRequest);

/// CRUD routes for every realty entity.
pub fn realty_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Agencies>())
        .merge(resource_routes::<Realtors>())
        .merge(resource_routes::<Owners>())
        .merge(resource_routes::<Buyers>())
        .merge(resource_routes::<Districts>())
        .merge(resource_routes::<Streets>())
        .merge(resource_routes::<HouseTypes>())
        .merge(resource_routes::<Houses>())
        .merge(resource_routes::<ApartmentTypes>())
        .merge(resource_routes::<Conditions>())
        .merge(resource_routes::<Statuses>())
        .merge(resource_routes::<Apartments>())
        .merge(resource_routes::<ApartmentPhotos>())
        .merge(resource_routes::<Sales>())
        .merge(resource_routes::<SalesRents>())
        .merge(resource_routes::<Analytics>())
}
