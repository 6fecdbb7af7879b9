use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;
use crate::domain::value::{PriceLevel, Transaction, Weekday};
use crate::transport::lenient::{flag, known_or_none, null_default, one_or_many};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    #[serde(deserialize_with = "null_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_default")]
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Suggested map bounds for a search result.
pub struct Region {
    #[serde(deserialize_with = "null_default")]
    pub center: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Machine-usable key, accepted by the `categories` search filter.
    #[serde(alias = "Alias", deserialize_with = "null_default")]
    pub alias: String,
    #[serde(alias = "Title", deserialize_with = "null_default")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_default")]
    pub address1: String,
    #[serde(deserialize_with = "null_default")]
    pub address2: String,
    #[serde(deserialize_with = "null_default")]
    pub address3: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
    /// ISO 3166-2 subdivision code.
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    /// ISO 3166-1 alpha-2 country code. Some payloads send it as `county`.
    #[serde(alias = "county", deserialize_with = "null_default")]
    pub country: String,
    #[serde(deserialize_with = "null_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "null_default")]
    pub cross_streets: String,
    #[serde(deserialize_with = "null_default")]
    pub display_address: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub neighborhoods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(alias = "image_URL", deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// 1.0 to 5.0 in half-star steps.
    #[serde(deserialize_with = "null_default")]
    pub rating: f64,
    /// Star image, 84x17.
    #[serde(deserialize_with = "null_default")]
    pub rating_image_url: String,
    /// Star image, 50x10.
    #[serde(deserialize_with = "null_default")]
    pub rating_image_small_url: String,
    /// Star image, 166x30.
    #[serde(alias = "Rating_image_large_url", deserialize_with = "null_default")]
    pub rating_image_large_url: String,
    #[serde(alias = "text", deserialize_with = "null_default")]
    pub excerpt: String,
    /// Unix seconds.
    #[serde(alias = "Time_created", deserialize_with = "null_default")]
    pub time_created: f64,
    #[serde(deserialize_with = "null_default")]
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DealOption {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(alias = "Purchase_URL", deserialize_with = "null_default")]
    pub purchase_url: String,
    /// Cents.
    #[serde(deserialize_with = "null_default")]
    pub price: f64,
    #[serde(alias = "Formatted_price", deserialize_with = "null_default")]
    pub formatted_price: String,
    /// Cents.
    #[serde(alias = "Original_price", deserialize_with = "null_default")]
    pub original_price: f64,
    #[serde(alias = "Formatted_original_price", deserialize_with = "null_default")]
    pub formatted_original_price: String,
    #[serde(alias = "Is_quantity_limited", deserialize_with = "flag")]
    pub is_quantity_limited: bool,
    /// Present only for quantity-limited options.
    #[serde(alias = "Remaining_count", skip_serializing_if = "Option::is_none")]
    pub remaining_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Deal {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(alias = "image_URL", deserialize_with = "null_default")]
    pub image_url: String,
    /// ISO 4217.
    #[serde(deserialize_with = "null_default")]
    pub currency_code: String,
    /// Unix seconds.
    #[serde(deserialize_with = "null_default")]
    pub time_start: f64,
    /// Present only when the deal ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<f64>,
    /// Present only when the deal is popular.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    /// Newline-separated details.
    #[serde(deserialize_with = "null_default")]
    pub what_you_get: String,
    #[serde(alias = "Important_restrictions", skip_serializing_if = "Option::is_none")]
    pub important_restrictions: Option<String>,
    #[serde(alias = "Additional_restrictions", skip_serializing_if = "Option::is_none")]
    pub additional_restrictions: Option<String>,
    #[serde(alias = "Options", deserialize_with = "null_default")]
    pub options: Vec<DealOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How unused gift certificate balances are returned.
pub enum UnusedBalances {
    Cash,
    Credit,
}

impl FromStr for UnusedBalances {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("cash") {
            Ok(Self::Cash)
        } else if value.eq_ignore_ascii_case("credit") {
            Ok(Self::Credit)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftCertificateOption {
    /// Cents.
    #[serde(deserialize_with = "null_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_default")]
    pub formatted_price: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftCertificate {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(alias = "image_URL", deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub currency_code: String,
    /// Unrecognized values decode as `None`.
    #[serde(deserialize_with = "known_or_none")]
    pub unused_balances: Option<UnusedBalances>,
    #[serde(deserialize_with = "null_default")]
    pub options: Vec<GiftCertificateOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One opening window. A day appears more than once when the business has several
/// windows on that day.
pub struct Open {
    /// 0 (Monday) to 6 (Sunday).
    #[serde(deserialize_with = "null_default")]
    pub day: u8,
    /// 24-hour `HHMM`.
    #[serde(deserialize_with = "null_default")]
    pub start: String,
    /// 24-hour `HHMM`.
    #[serde(deserialize_with = "null_default")]
    pub end: String,
    #[serde(deserialize_with = "flag")]
    pub is_overnight: bool,
}

impl Open {
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_index(self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hours {
    /// Currently always `REGULAR`.
    #[serde(deserialize_with = "null_default")]
    pub hours_type: String,
    #[serde(alias = "Is_open_now", deserialize_with = "flag")]
    pub is_open_now: bool,
    #[serde(alias = "Open", deserialize_with = "null_default")]
    pub open: Vec<Open>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// A business as returned by search (shallow) or embedded in [`BusinessDetail`].
pub struct Business {
    #[serde(deserialize_with = "null_default")]
    pub alias: String,
    #[serde(deserialize_with = "null_default")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "null_default")]
    pub coordinates: Coordinates,
    #[serde(deserialize_with = "null_default")]
    pub display_phone: String,
    /// Meters from the search point. Present only when the query supplied coordinates
    /// or a location the server could geocode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(alias = "image_URL", deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "flag")]
    pub is_closed: bool,
    #[serde(deserialize_with = "null_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// E.164, e.g. `+14159083801`. Empty when the business lists no phone.
    #[serde(deserialize_with = "null_default")]
    pub phone: String,
    /// `$` to `$$$$`, or empty.
    #[serde(deserialize_with = "null_default")]
    pub price: String,
    #[serde(deserialize_with = "null_default")]
    pub rating: f64,
    #[serde(deserialize_with = "null_default")]
    pub review_count: u32,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub transactions: Vec<String>,
}

impl Business {
    pub fn price_level(&self) -> Option<PriceLevel> {
        PriceLevel::from_symbol(&self.price)
    }

    /// Known transaction tags; unrecognized tags are skipped.
    pub fn transactions(&self) -> impl Iterator<Item = Transaction> + '_ {
        self.transactions.iter().filter_map(|tag| tag.parse().ok())
    }

    /// Parse [`Business::phone`] with the `phonenumber` crate.
    pub fn phone_number(&self) -> Result<phonenumber::PhoneNumber, ValidationError> {
        let raw = self.phone.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "phone" });
        }
        phonenumber::parse(None, raw).map_err(|_| ValidationError::InvalidPhoneNumber {
            input: raw.to_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Full business record from `/v3/businesses/{id}`.
pub struct BusinessDetail {
    #[serde(flatten)]
    pub business: Business,
    #[serde(alias = "hours ", deserialize_with = "one_or_many")]
    pub hours: Vec<Hours>,
    /// Whether the business has been claimed by its owner.
    #[serde(alias = "Is_claimed", deserialize_with = "flag")]
    pub is_claimed: bool,
    #[serde(deserialize_with = "null_default")]
    pub photos: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub reviews: Vec<Review>,
    #[serde(deserialize_with = "null_default")]
    pub deals: Vec<Deal>,
    #[serde(deserialize_with = "null_default")]
    pub gift_certificates: Vec<GiftCertificate>,
}

impl BusinessDetail {
    /// The `REGULAR` opening hours, if the business publishes any.
    pub fn regular_hours(&self) -> Option<&Hours> {
        self.hours
            .iter()
            .find(|hours| hours.hours_type.eq_ignore_ascii_case("REGULAR"))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Result of a search. `total` counts all matches and may exceed `businesses.len()`.
pub struct SearchResult {
    #[serde(deserialize_with = "null_default")]
    pub region: Region,
    #[serde(deserialize_with = "null_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_default")]
    pub businesses: Vec<Business>,
}
