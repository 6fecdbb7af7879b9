//! Typed Rust client for the Yelp Fusion business API.
//!
//! The crate is split into a domain layer of option shapes and response records, a
//! transport layer for URL assembly and wire-format quirks, and a small client layer that
//! performs one authenticated GET per call.
//!
//! ```rust,no_run
//! use yelp_fusion::{ApiKey, CoordinateOptions, LocationOptions, SearchOptions, YelpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yelp_fusion::YelpError> {
//!     let client = YelpClient::new(ApiKey::new("...")?);
//!
//!     let coffee = client.search_simple("coffee", "San Francisco, CA").await?;
//!     println!("{} matches", coffee.total);
//!
//!     let near = LocationOptions::new("Berkeley")
//!         .with_coordinates(CoordinateOptions::new(37.87, -122.27));
//!     let options = SearchOptions::new(near).term("pizza").limit(10);
//!     let _pizza = client.search(&options).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, HttpResponse, HttpTransport, TransportFailure, YelpClient, YelpClientBuilder,
    YelpError,
};
pub use domain::{
    ApiKey, Business, BusinessDetail, BusinessId, Category, CoordinateOptions, Coordinates, Deal,
    DealOption, GiftCertificate, GiftCertificateOption, Hours, Location, LocationOptions, Open,
    PriceLevel, QueryParams, Region, Review, SearchOptions, SearchResult, SortBy, ToParameters,
    Transaction, UnusedBalances, User, ValidationError, Weekday,
};
pub use reqwest::header::HeaderMap;
pub use transport::TransportError;
pub use url::Url;
