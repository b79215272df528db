use serde::Deserialize;

use crate::domain::RoomRates;

// DTOs for Room
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rates: RoomRates,
    pub max_guests: Option<u32>,
    pub is_available: Option<bool>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl RoomCreate {
    pub fn new(name: impl Into<String>, rates: RoomRates) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            rates,
            max_guests: None,
            is_available: None,
            amenities: Vec::new(),
        }
    }

    pub fn with_max_guests(mut self, max_guests: u32) -> Self {
        self.max_guests = Some(max_guests);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rates: Option<RoomRates>,
    pub max_guests: Option<u32>,
    pub is_available: Option<bool>,
    pub amenities: Option<Vec<String>>,
}
