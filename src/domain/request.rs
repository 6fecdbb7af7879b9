use std::collections::BTreeMap;

use crate::domain::validation::ValidationError;
use crate::domain::value::{PriceLevel, SortBy};

/// Flat query-parameter mapping sent to the search endpoint.
pub type QueryParams = BTreeMap<String, String>;

/// An option shape that validates itself and contributes query parameters.
pub trait ToParameters {
    fn to_parameters(&self) -> Result<QueryParams, ValidationError>;
}

pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const LOCATION: &str = "location";
pub const TERM: &str = "term";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// A geo-point to search near. Both coordinates are required by [`ToParameters`];
/// `None` means "not specified", which is distinct from `Some(0.0)`.
pub struct CoordinateOptions {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CoordinateOptions {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    fn complete(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl ToParameters for CoordinateOptions {
    fn to_parameters(&self) -> Result<QueryParams, ValidationError> {
        if self.latitude.is_none() {
            return Err(ValidationError::MissingRequired { field: LATITUDE });
        }
        let (latitude, longitude) = self
            .complete()
            .ok_or(ValidationError::MissingRequired { field: LONGITUDE })?;

        let mut params = QueryParams::new();
        push_coordinates(&mut params, latitude, longitude);
        Ok(params)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Free-text location, optionally disambiguated by a coordinate hint.
///
/// At least one of the two must be usable: non-empty text, or a hint with both coordinates.
/// Text is forwarded exactly as given.
pub struct LocationOptions {
    /// Combination of address, neighborhood, city, state or zip, and optional country.
    pub location: String,
    pub coordinates: Option<CoordinateOptions>,
}

impl LocationOptions {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            coordinates: None,
        }
    }

    /// Attach a coordinate hint for the geocoder.
    pub fn with_coordinates(mut self, coordinates: CoordinateOptions) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

impl From<CoordinateOptions> for LocationOptions {
    fn from(value: CoordinateOptions) -> Self {
        Self {
            location: String::new(),
            coordinates: Some(value),
        }
    }
}

impl From<&str> for LocationOptions {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocationOptions {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl ToParameters for LocationOptions {
    fn to_parameters(&self) -> Result<QueryParams, ValidationError> {
        let location_provided = !self.location.is_empty();
        let coordinates = self.coordinates.as_ref().and_then(CoordinateOptions::complete);

        if !location_provided && coordinates.is_none() {
            return Err(ValidationError::MissingRequired { field: LOCATION });
        }

        let mut params = QueryParams::new();
        if location_provided {
            params.insert(LOCATION.to_owned(), self.location.clone());
        }
        if let Some((latitude, longitude)) = coordinates {
            push_coordinates(&mut params, latitude, longitude);
        }
        Ok(params)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Full search request: a mandatory location plus pass-through filters.
///
/// Filters are forwarded verbatim; limits such as the maximum radius are left to the server.
pub struct SearchOptions {
    pub location: LocationOptions,
    pub term: Option<String>,
    /// Category aliases, e.g. `coffee`, `bars`.
    pub categories: Vec<String>,
    /// Search radius in meters.
    pub radius: Option<u32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<SortBy>,
    pub price: Vec<PriceLevel>,
    pub open_now: Option<bool>,
    /// Unix timestamp (seconds).
    pub open_at: Option<i64>,
    pub locale: Option<String>,
    /// Any other parameter accepted by the search endpoint. Typed filters above win on
    /// key collision.
    pub extra: BTreeMap<String, String>,
}

impl SearchOptions {
    pub fn new(location: impl Into<LocationOptions>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn category(mut self, alias: impl Into<String>) -> Self {
        self.categories.push(alias.into());
        self
    }

    pub fn radius(mut self, meters: u32) -> Self {
        self.radius = Some(meters);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn price(mut self, level: PriceLevel) -> Self {
        self.price.push(level);
        self
    }

    pub fn open_now(mut self, open_now: bool) -> Self {
        self.open_now = Some(open_now);
        self
    }

    pub fn open_at(mut self, unix_seconds: i64) -> Self {
        self.open_at = Some(unix_seconds);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Forward an arbitrary parameter to the search endpoint.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    fn filters(&self) -> Vec<(&'static str, String)> {
        let mut filters = Vec::new();
        if let Some(term) = &self.term {
            filters.push((TERM, term.clone()));
        }
        if !self.categories.is_empty() {
            filters.push(("categories", self.categories.join(",")));
        }
        if let Some(radius) = self.radius {
            filters.push(("radius", radius.to_string()));
        }
        if let Some(limit) = self.limit {
            filters.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            filters.push(("offset", offset.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            filters.push(("sort_by", sort_by.as_str().to_owned()));
        }
        if !self.price.is_empty() {
            let price = self
                .price
                .iter()
                .map(|level| level.filter_value().to_string())
                .collect::<Vec<_>>()
                .join(",");
            filters.push(("price", price));
        }
        if let Some(open_now) = self.open_now {
            filters.push(("open_now", open_now.to_string()));
        }
        if let Some(open_at) = self.open_at {
            filters.push(("open_at", open_at.to_string()));
        }
        if let Some(locale) = &self.locale {
            filters.push(("locale", locale.clone()));
        }
        filters
    }
}

impl ToParameters for SearchOptions {
    fn to_parameters(&self) -> Result<QueryParams, ValidationError> {
        let mut params = self.location.to_parameters()?;
        params.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        params.extend(
            self.filters()
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value)),
        );
        Ok(params)
    }
}

fn push_coordinates(params: &mut QueryParams, latitude: f64, longitude: f64) {
    params.insert(LATITUDE.to_owned(), latitude.to_string());
    params.insert(LONGITUDE.to_owned(), longitude.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &QueryParams) -> Vec<&str> {
        params.keys().map(String::as_str).collect()
    }

    #[test]
    fn coordinates_render_minimal_decimals() {
        let params = CoordinateOptions::new(37.9, -122.5).to_parameters().unwrap();
        assert_eq!(keys(&params), vec!["latitude", "longitude"]);
        assert_eq!(params["latitude"], "37.9");
        assert_eq!(params["longitude"], "-122.5");
    }

    #[test]
    fn coordinates_round_trip_through_decimal_parser() {
        for (lat, lng) in [(0.0, 0.0), (-89.999_999, 179.123_456_789), (1e-7, -1e-7)] {
            let params = CoordinateOptions::new(lat, lng).to_parameters().unwrap();
            assert!(!params["latitude"].contains('e'), "{params:?}");
            let parsed_lat: f64 = params["latitude"].parse().unwrap();
            let parsed_lng: f64 = params["longitude"].parse().unwrap();
            assert!((parsed_lat - lat).abs() < f64::EPSILON);
            assert!((parsed_lng - lng).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn zero_coordinate_is_not_treated_as_missing() {
        let params = CoordinateOptions::new(0.0, 0.0).to_parameters().unwrap();
        assert_eq!(params["latitude"], "0");
        assert_eq!(params["longitude"], "0");
    }

    #[test]
    fn coordinates_require_both_values() {
        let err = CoordinateOptions {
            latitude: None,
            longitude: Some(1.0),
        }
        .to_parameters()
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired { field: LATITUDE });

        let err = CoordinateOptions {
            latitude: Some(1.0),
            longitude: None,
        }
        .to_parameters()
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired { field: LONGITUDE });
    }

    #[test]
    fn location_text_is_forwarded_unchanged() {
        let params = LocationOptions::new("  Mission District, San Francisco ")
            .to_parameters()
            .unwrap();
        assert_eq!(keys(&params), vec!["location"]);
        assert_eq!(params["location"], "  Mission District, San Francisco ");
    }

    #[test]
    fn location_with_hint_emits_all_three_keys() {
        let params = LocationOptions::new("Berkeley")
            .with_coordinates(CoordinateOptions::new(37.87, -122.27))
            .to_parameters()
            .unwrap();
        assert_eq!(keys(&params), vec!["latitude", "location", "longitude"]);
        assert_eq!(params["location"], "Berkeley");
        assert_eq!(params["latitude"], "37.87");
        assert_eq!(params["longitude"], "-122.27");
    }

    #[test]
    fn empty_location_with_hint_emits_coordinates_only() {
        let params = LocationOptions::from(CoordinateOptions::new(37.9, -122.5))
            .to_parameters()
            .unwrap();
        assert_eq!(keys(&params), vec!["latitude", "longitude"]);
    }

    #[test]
    fn empty_location_without_usable_hint_is_missing_required() {
        let missing = ValidationError::MissingRequired { field: LOCATION };

        assert_eq!(LocationOptions::new("").to_parameters(), Err(missing.clone()));

        let partial = LocationOptions::new("").with_coordinates(CoordinateOptions {
            latitude: Some(37.0),
            longitude: None,
        });
        assert_eq!(partial.to_parameters(), Err(missing));
    }

    #[test]
    fn whitespace_location_is_forwarded_verbatim() {
        let params = LocationOptions::new("   ").to_parameters().unwrap();
        assert_eq!(keys(&params), vec!["location"]);
        assert_eq!(params["location"], "   ");

        let params = LocationOptions::new(" ")
            .with_coordinates(CoordinateOptions::new(1.0, 2.0))
            .to_parameters()
            .unwrap();
        assert_eq!(keys(&params), vec!["latitude", "location", "longitude"]);
        assert_eq!(params["location"], " ");
        assert_eq!(params["latitude"], "1");
    }

    #[test]
    fn text_with_partial_hint_drops_the_hint() {
        let params = LocationOptions::new("Oakland")
            .with_coordinates(CoordinateOptions {
                latitude: None,
                longitude: Some(-122.2),
            })
            .to_parameters()
            .unwrap();
        assert_eq!(keys(&params), vec!["location"]);
    }

    #[test]
    fn search_options_merge_filters_over_location() {
        let options = SearchOptions::new("San Francisco, CA")
            .term("coffee")
            .category("coffee")
            .category("cafes")
            .radius(1500)
            .limit(20)
            .offset(40)
            .sort_by(SortBy::Rating)
            .price(PriceLevel::Inexpensive)
            .price(PriceLevel::Moderate)
            .open_now(true)
            .locale("en_US");

        let params = options.to_parameters().unwrap();
        assert_eq!(params["location"], "San Francisco, CA");
        assert_eq!(params["term"], "coffee");
        assert_eq!(params["categories"], "coffee,cafes");
        assert_eq!(params["radius"], "1500");
        assert_eq!(params["limit"], "20");
        assert_eq!(params["offset"], "40");
        assert_eq!(params["sort_by"], "rating");
        assert_eq!(params["price"], "1,2");
        assert_eq!(params["open_now"], "true");
        assert_eq!(params["locale"], "en_US");
    }

    #[test]
    fn search_options_own_keys_win_on_collision() {
        let options = SearchOptions::new("Denver")
            .param("location", "Boulder")
            .param("attributes", "hot_and_new")
            .param("limit", "5")
            .limit(10);

        let params = options.to_parameters().unwrap();
        assert_eq!(params["location"], "Boulder");
        assert_eq!(params["attributes"], "hot_and_new");
        assert_eq!(params["limit"], "10");
    }

    #[test]
    fn search_options_propagate_location_failure() {
        let err = SearchOptions::new("").term("tacos").to_parameters().unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired { field: LOCATION });
    }

    #[test]
    fn default_search_options_emit_only_location_keys() {
        let params = SearchOptions::new(CoordinateOptions::new(37.9, -122.5))
            .to_parameters()
            .unwrap();
        assert_eq!(keys(&params), vec!["latitude", "longitude"]);
    }
}
