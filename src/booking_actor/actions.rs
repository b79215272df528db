use crate::domain::BookingStatus;

/// Custom actions for Booking entities.
#[derive(Debug, Clone)]
pub enum BookingAction {
    /// Moves the booking to a new status along the lifecycle graph.
    ///
    /// # Errors
    /// Fails with an invalid-transition error when the target is not
    /// reachable from the current status.
    Transition(BookingStatus),
}

/// Results from BookingActions - variants match 1:1 with BookingAction
#[derive(Debug, Clone)]
pub enum BookingActionResult {
    Transitioned(crate::domain::Booking),
}
