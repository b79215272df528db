use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Room, RoomRates};
use super::dtos::{RoomCreate, RoomPatch};
use super::error::RoomError;

fn check_rates(rates: &RoomRates) -> Result<(), RoomError> {
    if rates.has_resolvable_rate() {
        Ok(())
    } else {
        Err(RoomError::ValidationError(
            "room must have at least one positive nightly rate".to_string(),
        ))
    }
}

fn check_name(name: &str) -> Result<(), RoomError> {
    if name.trim().is_empty() {
        return Err(RoomError::ValidationError("room name is required".to_string()));
    }
    Ok(())
}

fn check_capacity(max_guests: u32) -> Result<(), RoomError> {
    if max_guests == 0 {
        return Err(RoomError::ValidationError(
            "room must accommodate at least one guest".to_string(),
        ));
    }
    Ok(())
}

impl Entity for Room {
    const KIND: &'static str = "room";

    type Id = String;
    type CreateParams = RoomCreate;
    type Patch = RoomPatch;
    type Action = ();
    type ActionResult = ();
    type Error = RoomError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Room from creation parameters.
    ///
    /// Capacity defaults to two guests and the room starts out available.
    fn from_create_params(id: String, params: RoomCreate) -> Result<Self, RoomError> {
        check_name(&params.name)?;
        check_rates(&params.rates)?;
        let max_guests = params.max_guests.unwrap_or(Room::DEFAULT_MAX_GUESTS);
        check_capacity(max_guests)?;

        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            rates: params.rates,
            max_guests,
            is_available: params.is_available.unwrap_or(true),
            amenities: params.amenities,
            created_at: Utc::now(),
        })
    }

    /// Updates the room's listing, pricing and availability.
    ///
    /// # Errors
    /// Rejects a blank name, rates with no usable nightly price and zero capacity.
    fn on_update(&mut self, patch: RoomPatch) -> Result<(), RoomError> {
        if let Some(name) = &patch.name {
            check_name(name)?;
        }
        if let Some(rates) = patch.rates {
            check_rates(&rates)?;
            self.rates = rates;
        }
        if let Some(max_guests) = patch.max_guests {
            check_capacity(max_guests)?;
            self.max_guests = max_guests;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(is_available) = patch.is_available {
            self.is_available = is_available;
        }
        if let Some(amenities) = patch.amenities {
            self.amenities = amenities;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), RoomError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomCategory;

    #[test]
    fn test_create_applies_defaults() {
        let room = Room::from_create_params(
            "room_1".to_string(),
            RoomCreate::new("Deluxe", RoomRates::flat(2500.0)),
        )
        .unwrap();

        assert_eq!(room.id, "room_1");
        assert_eq!(room.max_guests, 2);
        assert!(room.is_available);
    }

    #[test]
    fn test_create_rejects_unpriced_room() {
        let err = Room::from_create_params(
            "room_1".to_string(),
            RoomCreate::new("Empty", RoomRates::by_category([(RoomCategory::Single, 0.0)])),
        )
        .unwrap_err();
        assert!(matches!(err, RoomError::ValidationError(_)));
    }

    #[test]
    fn test_patch_rejects_bad_rates() {
        let mut room = Room::new("Deluxe", RoomRates::flat(2500.0)).with_id("room_1");
        let patch = RoomPatch {
            rates: Some(RoomRates::flat(-1.0)),
            ..RoomPatch::default()
        };
        assert!(room.on_update(patch).is_err());

        let patch = RoomPatch {
            is_available: Some(false),
            max_guests: Some(4),
            ..RoomPatch::default()
        };
        room.on_update(patch).unwrap();
        assert!(!room.is_available);
        assert_eq!(room.max_guests, 4);
    }

    #[test]
    fn test_patch_rejects_blank_name() {
        let mut room = Room::new("Deluxe", RoomRates::flat(2500.0)).with_id("room_1");
        for name in ["", "   "] {
            let patch = RoomPatch {
                name: Some(name.to_string()),
                ..RoomPatch::default()
            };
            assert!(matches!(room.on_update(patch), Err(RoomError::ValidationError(_))));
        }
        assert_eq!(room.name, "Deluxe");
    }
}
