use thiserror::Error;

use crate::lifecycle::LifecycleError;
use crate::pricing::PricingError;

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),
    #[error("Room not found: {0}")]
    RoomNotFound(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Room {0} is not available for booking")]
    RoomUnavailable(String),
    #[error("Room {room_id} accepts at most {max_guests} guests, {requested} requested")]
    GuestLimitExceeded {
        room_id: String,
        max_guests: u32,
        requested: u32,
    },
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error("Booking validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(BookingError);
