use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

use crate::actor_framework::ResourceClient;
use crate::booking_actor::{BookingAction, BookingActionResult, BookingCreate, BookingError, BookingPatch};
use crate::clients::{RoomClient, UserClient};
use crate::domain::{cmp_sequential_ids, Booking, BookingRequest, BookingStatus, Room};
use crate::lifecycle;
use crate::pricing::{self, PricingResult};
use crate::room_actor::RoomError;
use crate::user_actor::UserError;

/// Client for the Booking store.
///
/// Creating a booking is orchestrated here: the request is validated, the
/// room is resolved through the Room store, the stay is priced, and only then
/// is the booking persisted as `pending`.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<Booking>,
    room_client: RoomClient,
    user_client: UserClient,
}

impl BookingClient {
    pub fn new(inner: ResourceClient<Booking>, room_client: RoomClient, user_client: UserClient) -> Self {
        Self {
            inner,
            room_client,
            user_client,
        }
    }

    #[instrument(
        skip(self, request),
        fields(room_id = %request.room_id, check_in = %request.check_in, check_out = %request.check_out)
    )]
    pub async fn create_booking(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        info!("Processing create_booking request");

        let room = self.resolve_room(&request).await?;

        if let Some(user_id) = &request.user_id {
            match self.user_client.get_user(user_id.clone()).await {
                Ok(user) => debug!(user_name = %user.name, "User validation successful"),
                Err(UserError::NotFound(id)) => {
                    error!("User not found");
                    return Err(BookingError::UserNotFound(id));
                }
                Err(e) => {
                    error!(error = %e, "User validation failed");
                    return Err(BookingError::ActorCommunicationError(e.to_string()));
                }
            }
        }

        let pricing = pricing::price_booking(&room, &request).map_err(|e| {
            warn!(error = %e, "Pricing rejected");
            BookingError::from(e)
        })?;

        let booking = self
            .inner
            .create(BookingCreate { request, pricing })
            .await?;

        info!(
            booking_id = %booking.id,
            nights = booking.nights,
            total_price = booking.total_price,
            "Booking created"
        );
        Ok(booking)
    }

    /// Prices a request exactly as `create_booking` would, without storing it.
    #[instrument(skip(self, request), fields(room_id = %request.room_id))]
    pub async fn quote(&self, request: BookingRequest) -> Result<PricingResult, BookingError> {
        let room = self.resolve_room(&request).await?;
        Ok(pricing::price_booking(&room, &request)?)
    }

    #[instrument(skip(self))]
    pub async fn update_booking(&self, id: String, patch: BookingPatch) -> Result<Booking, BookingError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// All bookings, newest first.
    #[instrument(skip(self))]
    pub async fn list_bookings_newest_first(&self) -> Result<Vec<Booking>, BookingError> {
        debug!("Sending request");
        let mut bookings = self.inner.list().await?;
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| cmp_sequential_ids(&b.id, &a.id)));
        Ok(bookings)
    }

    #[instrument(skip(self))]
    pub async fn transition_status(&self, id: String, status: BookingStatus) -> Result<Booking, BookingError> {
        debug!("Sending request");
        match self.inner.perform_action(id, BookingAction::Transition(status)).await? {
            BookingActionResult::Transitioned(booking) => {
                info!(booking_id = %booking.id, status = %booking.status, "Booking status updated");
                if lifecycle::is_terminal(booking.status) {
                    debug!(booking_id = %booking.id, "Booking closed");
                }
                Ok(booking)
            }
        }
    }

    /// Validates the request and fetches its room, checking capacity and availability.
    async fn resolve_room(&self, request: &BookingRequest) -> Result<Room, BookingError> {
        request.validate().map_err(|e| {
            warn!(error = %e, "Request validation failed");
            BookingError::ValidationError(e.to_string())
        })?;

        let room = match self.room_client.get_room(request.room_id.clone()).await {
            Ok(room) => {
                info!(room_name = %room.name, "Room lookup successful");
                room
            }
            Err(RoomError::NotFound(id)) => {
                error!("Room not found");
                return Err(BookingError::RoomNotFound(id));
            }
            Err(e) => {
                error!(error = %e, "Room lookup failed");
                return Err(BookingError::ActorCommunicationError(e.to_string()));
            }
        };

        if !room.is_available {
            return Err(BookingError::RoomUnavailable(room.id));
        }
        if request.number_of_guests > room.max_guests {
            return Err(BookingError::GuestLimitExceeded {
                room_id: room.id,
                max_guests: room.max_guests,
                requested: request.number_of_guests,
            });
        }
        Ok(room)
    }
}

impl_client_methods!(BookingClient, Booking, BookingError, booking);
