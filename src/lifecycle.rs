//! Booking status lifecycle.
//!
//! ```text
//! pending ──► confirmed ──► completed
//!    │           │  └─────► checked-in ──► checked-out
//!    └──► cancelled ◄┘
//! ```
//!
//! `cancelled`, `completed` and `checked-out` are terminal.

use thiserror::Error;

use crate::domain::{Booking, BookingStatus};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifecycleError {
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

pub fn allowed_transitions(from: BookingStatus) -> &'static [BookingStatus] {
    use BookingStatus::*;
    match from {
        Pending => &[Confirmed, Cancelled],
        Confirmed => &[Completed, Cancelled, CheckedIn],
        CheckedIn => &[CheckedOut],
        Cancelled | Completed | CheckedOut => &[],
    }
}

pub fn is_terminal(status: BookingStatus) -> bool {
    allowed_transitions(status).is_empty()
}

pub fn validate_transition(from: BookingStatus, to: BookingStatus) -> Result<(), LifecycleError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(LifecycleError::InvalidTransition { from, to })
    }
}

/// Moves a booking to `new_status`, leaving every other field as it was.
pub fn transition(booking: &Booking, new_status: BookingStatus) -> Result<Booking, LifecycleError> {
    validate_transition(booking.status, new_status)?;
    Ok(Booking {
        status: new_status,
        ..booking.clone()
    })
}
