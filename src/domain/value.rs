use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Yelp Fusion API key, presented as a bearer token.
///
/// Invariant: non-empty after trimming and made of visible ASCII only, so it always forms a
/// valid `Authorization` header value. `Debug` never prints the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Name used for this value in validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ValidationError::InvalidHeaderValue { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Yelp business id or alias, as accepted by `/v3/businesses/{id}`.
///
/// Invariant: non-empty after trimming.
pub struct BusinessId(String);

impl BusinessId {
    /// Name used for this value in validation errors.
    pub const FIELD: &'static str = "id";

    /// Create a validated [`BusinessId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Price tier of a business, `$` through `$$$$`.
pub enum PriceLevel {
    Inexpensive,
    Moderate,
    Pricey,
    UltraHighEnd,
}

impl PriceLevel {
    /// Number used by the `price` search filter (`1`..=`4`).
    pub fn filter_value(self) -> u8 {
        match self {
            Self::Inexpensive => 1,
            Self::Moderate => 2,
            Self::Pricey => 3,
            Self::UltraHighEnd => 4,
        }
    }

    /// Dollar-sign form used in business records.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inexpensive => "$",
            Self::Moderate => "$$",
            Self::Pricey => "$$$",
            Self::UltraHighEnd => "$$$$",
        }
    }

    /// Parse the dollar-sign form. Returns `None` for anything else, including `""`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol.trim() {
            "$" => Self::Inexpensive,
            "$$" => Self::Moderate,
            "$$$" => Self::Pricey,
            "$$$$" => Self::UltraHighEnd,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Sort order accepted by the `sort_by` search filter.
pub enum SortBy {
    #[default]
    BestMatch,
    Rating,
    ReviewCount,
    Distance,
}

impl SortBy {
    /// Value sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestMatch => "best_match",
            Self::Rating => "rating",
            Self::ReviewCount => "review_count",
            Self::Distance => "distance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Transaction tags a business can be registered for.
pub enum Transaction {
    Pickup,
    Delivery,
    RestaurantReservation,
}

impl Transaction {
    /// Tag as it appears in the `transactions` array.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
            Self::RestaurantReservation => "restaurant_reservation",
        }
    }
}

impl FromStr for Transaction {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "pickup" => Self::Pickup,
            "delivery" => Self::Delivery,
            "restaurant_reservation" => Self::RestaurantReservation,
            _ => return Err(()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Day of week as numbered by the hours records: `0` is Monday, `6` is Sunday.
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Map a `0..=6` day number to a [`Weekday`].
    pub fn from_index(day: u8) -> Option<Self> {
        Some(match day {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            6 => Self::Sunday,
            _ => return None,
        })
    }
}
