use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::booking_actor::BookingError;
use crate::clients::{BookingClient, RoomClient, UserClient};
use crate::domain::{cmp_sequential_ids, Booking, BookingStatus, Room, User};
use crate::room_actor::{RoomCreate, RoomError, RoomPatch};
use crate::user_actor::UserError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    #[error("Admin access required: {0}")]
    Forbidden(String),
    #[error(transparent)]
    Room(#[from] RoomError),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    User(#[from] UserError),
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rooms: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub total_users: usize,
    pub total_revenue: f64,
}

/// Back-office operations. Every call names the acting user, who must hold
/// the admin role.
#[derive(Clone)]
pub struct AdminClient {
    room_client: RoomClient,
    booking_client: BookingClient,
    user_client: UserClient,
}

impl AdminClient {
    pub fn new(room_client: RoomClient, booking_client: BookingClient, user_client: UserClient) -> Self {
        Self {
            room_client,
            booking_client,
            user_client,
        }
    }

    async fn authorize(&self, admin_id: &str) -> Result<User, AdminError> {
        match self.user_client.get_user(admin_id.to_string()).await {
            Ok(user) if user.is_admin() => Ok(user),
            Ok(_) | Err(UserError::NotFound(_)) => {
                warn!(admin_id, "Admin check failed");
                Err(AdminError::Forbidden(admin_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn dashboard(&self, admin_id: &str) -> Result<DashboardStats, AdminError> {
        self.authorize(admin_id).await?;

        let rooms = self.room_client.list_rooms().await?;
        let bookings = self.booking_client.list_bookings().await?;
        let customers = self.user_client.list_customers().await?;

        let stats = DashboardStats {
            total_rooms: rooms.len(),
            total_bookings: bookings.len(),
            pending_bookings: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count(),
            total_users: customers.len(),
            total_revenue: bookings
                .iter()
                .filter(|b| b.status.counts_as_revenue())
                .map(|b| b.total_price)
                .sum(),
        };
        debug!(?stats, "Dashboard computed");
        Ok(stats)
    }

    #[instrument(skip(self))]
    pub async fn recent_bookings(&self, admin_id: &str, limit: usize) -> Result<Vec<Booking>, AdminError> {
        self.authorize(admin_id).await?;
        let mut bookings = self.booking_client.list_bookings_newest_first().await?;
        bookings.truncate(limit);
        Ok(bookings)
    }

    #[instrument(skip(self))]
    pub async fn list_bookings(&self, admin_id: &str) -> Result<Vec<Booking>, AdminError> {
        self.authorize(admin_id).await?;
        Ok(self.booking_client.list_bookings_newest_first().await?)
    }

    /// Moves a booking along its lifecycle on behalf of an administrator.
    #[instrument(skip(self))]
    pub async fn update_booking_status(
        &self,
        admin_id: &str,
        booking_id: String,
        status: BookingStatus,
    ) -> Result<Booking, AdminError> {
        let admin = self.authorize(admin_id).await?;
        let booking = self.booking_client.transition_status(booking_id, status).await?;
        info!(admin = %admin.name, booking_id = %booking.id, status = %booking.status, "Status changed by admin");
        Ok(booking)
    }

    #[instrument(skip(self))]
    pub async fn list_rooms(&self, admin_id: &str) -> Result<Vec<Room>, AdminError> {
        self.authorize(admin_id).await?;
        let mut rooms = self.room_client.list_rooms().await?;
        rooms.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| cmp_sequential_ids(&b.id, &a.id)));
        Ok(rooms)
    }

    #[instrument(skip(self, room))]
    pub async fn create_room(&self, admin_id: &str, room: RoomCreate) -> Result<Room, AdminError> {
        self.authorize(admin_id).await?;
        Ok(self.room_client.create_room(room).await?)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_room(&self, admin_id: &str, room_id: String, patch: RoomPatch) -> Result<Room, AdminError> {
        self.authorize(admin_id).await?;
        Ok(self.room_client.update_room(room_id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_room(&self, admin_id: &str, room_id: String) -> Result<(), AdminError> {
        self.authorize(admin_id).await?;
        Ok(self.room_client.delete_room(room_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_customers(&self, admin_id: &str) -> Result<Vec<User>, AdminError> {
        self.authorize(admin_id).await?;
        Ok(self.user_client.list_customers().await?)
    }
}
