use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Room category a guest can request when a room is priced per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Single,
    Double,
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomCategory::Single => write!(f, "single"),
            RoomCategory::Double => write!(f, "double"),
        }
    }
}

/// Nightly pricing of a room: one flat price, or one price per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomRates {
    Flat(f64),
    ByCategory(BTreeMap<RoomCategory, f64>),
}

impl RoomRates {
    pub fn flat(price: f64) -> Self {
        RoomRates::Flat(price)
    }

    pub fn by_category(prices: impl IntoIterator<Item = (RoomCategory, f64)>) -> Self {
        RoomRates::ByCategory(prices.into_iter().collect())
    }

    /// A usable nightly price is finite and strictly positive.
    pub fn is_valid_rate(price: f64) -> bool {
        price.is_finite() && price > 0.0
    }

    /// True when at least one category (or the flat price) yields a usable rate.
    pub fn has_resolvable_rate(&self) -> bool {
        match self {
            RoomRates::Flat(price) => Self::is_valid_rate(*price),
            RoomRates::ByCategory(prices) => prices.values().any(|p| Self::is_valid_rate(*p)),
        }
    }
}

/// A bookable hotel room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rates: RoomRates,
    pub max_guests: u32,
    pub is_available: bool,
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub const DEFAULT_MAX_GUESTS: u32 = 2;

    /// Creates an available room with default capacity.
    ///
    /// The `id` is left for the store to assign.
    pub fn new(name: impl Into<String>, rates: RoomRates) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            rates,
            max_guests: Self::DEFAULT_MAX_GUESTS,
            is_available: true,
            amenities: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[allow(dead_code)]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_max_guests(mut self, max_guests: u32) -> Self {
        self.max_guests = max_guests;
        self
    }

    pub fn can_host(&self, guests: u32) -> bool {
        self.is_available && guests <= self.max_guests
    }
}
