use chrono::Utc;
use validator::ValidateEmail;

use crate::actor_framework::Entity;
use crate::domain::{Booking, BookingStatus};
use crate::lifecycle;
use crate::pricing::PricingError;
use super::actions::{BookingAction, BookingActionResult};
use super::dtos::{BookingCreate, BookingPatch};
use super::error::BookingError;

impl Entity for Booking {
    const KIND: &'static str = "booking";

    type Id = String;
    type CreateParams = BookingCreate;
    type Patch = BookingPatch;
    type Action = BookingAction;
    type ActionResult = BookingActionResult;
    type Error = BookingError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Booking from a priced request.
    ///
    /// # Notes
    /// Every booking starts out `pending` and is stamped with the creation time.
    fn from_create_params(id: String, params: BookingCreate) -> Result<Self, BookingError> {
        let BookingCreate { request, pricing } = params;
        if request.check_out <= request.check_in {
            return Err(PricingError::InvalidDateRange {
                check_in: request.check_in,
                check_out: request.check_out,
            }
            .into());
        }

        Ok(Self {
            id,
            user_id: request.user_id,
            customer_name: request.customer_name,
            email: request.email,
            contact_number: request.contact_number,
            room_id: request.room_id,
            room_category: request.room_category,
            check_in: request.check_in,
            check_out: request.check_out,
            number_of_guests: request.number_of_guests,
            special_requests: request.special_requests,
            payment_method: request.payment_method,
            nights: pricing.nights(),
            nightly_rate: pricing.nightly_rate(),
            total_price: pricing.total_price(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, patch: BookingPatch) -> Result<(), BookingError> {
        if let Some(email) = patch.email {
            if !email.validate_email() {
                return Err(BookingError::ValidationError(format!("invalid email: {email}")));
            }
            self.email = email;
        }
        if let Some(contact_number) = patch.contact_number {
            self.contact_number = contact_number;
        }
        if let Some(special_requests) = patch.special_requests {
            self.special_requests = Some(special_requests);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: BookingAction) -> Result<BookingActionResult, BookingError> {
        match action {
            BookingAction::Transition(status) => {
                *self = lifecycle::transition(self, status)?;
                Ok(BookingActionResult::Transitioned(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingRequest, Room, RoomRates};
    use crate::lifecycle::LifecycleError;
    use crate::pricing::price_booking;
    use chrono::NaiveDate;

    fn priced_create() -> BookingCreate {
        let room = Room::new("Deluxe", RoomRates::flat(2500.0)).with_id("room_1");
        let request = BookingRequest::new(
            "Ana Reyes",
            "ana@example.com",
            "09181234567",
            "room_1",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
        );
        let pricing = price_booking(&room, &request).unwrap();
        BookingCreate { request, pricing }
    }

    #[test]
    fn test_new_booking_is_pending_and_priced() {
        let booking = Booking::from_create_params("booking_1".to_string(), priced_create()).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.nights, 3);
        assert_eq!(booking.total_price, booking.nightly_rate * f64::from(booking.nights));
    }

    #[test]
    fn test_patch_cannot_touch_price() {
        let mut booking = Booking::from_create_params("booking_1".to_string(), priced_create()).unwrap();
        booking
            .on_update(BookingPatch {
                special_requests: Some("Late check-in".to_string()),
                ..BookingPatch::default()
            })
            .unwrap();
        assert_eq!(booking.special_requests.as_deref(), Some("Late check-in"));
        assert_eq!(booking.total_price, 7500.0);

        let err = booking
            .on_update(BookingPatch {
                email: Some("nope".to_string()),
                ..BookingPatch::default()
            })
            .unwrap_err();
        assert!(matches!(err, BookingError::ValidationError(_)));
    }

    #[test]
    fn test_transition_action() {
        let mut booking = Booking::from_create_params("booking_1".to_string(), priced_create()).unwrap();

        booking
            .handle_action(BookingAction::Transition(BookingStatus::Cancelled))
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);

        let err = booking
            .handle_action(BookingAction::Transition(BookingStatus::Confirmed))
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::Lifecycle(LifecycleError::InvalidTransition {
                from: BookingStatus::Cancelled,
                to: BookingStatus::Confirmed,
            })
        );
    }
}
