//! Domain layer: option shapes, response records, and validated values (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CoordinateOptions, LATITUDE, LOCATION, LONGITUDE, LocationOptions, QueryParams,
    SearchOptions, TERM, ToParameters,
};
pub use response::{
    Business, BusinessDetail, Category, Coordinates, Deal, DealOption, GiftCertificate,
    GiftCertificateOption, Hours, Location, Open, Region, Review, SearchResult, UnusedBalances,
    User,
};
pub use validation::ValidationError;
pub use value::{ApiKey, BusinessId, PriceLevel, SortBy, Transaction, Weekday};
