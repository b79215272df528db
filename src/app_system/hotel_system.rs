use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::clients::{AdminClient, BookingClient, RoomClient, UserClient};
use crate::config::HotelConfig;
use crate::domain::{Booking, Room, User};

/// Builds an id generator producing `prefix_1`, `prefix_2`, ...
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting the Room, User and Booking stores, wiring their
/// clients together, and handling shutdown.
pub struct HotelSystem {
    pub room_client: RoomClient,
    pub user_client: UserClient,
    pub booking_client: BookingClient,
    pub admin_client: AdminClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl HotelSystem {
    #[instrument(name = "hotel_system", skip(config), fields(capacity = config.channel_capacity))]
    pub fn new(config: &HotelConfig) -> Self {
        info!("Starting hotel system");

        // Stores without dependencies first
        let (room_actor, room_resource_client) =
            ResourceActor::<Room>::new(config.channel_capacity, sequential_ids("room"));
        let room_client = RoomClient::new(room_resource_client);
        let room_handle = tokio::spawn(room_actor.run());

        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(config.channel_capacity, sequential_ids("user"));
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // Booking store, orchestrated through the room and user clients
        let (booking_actor, booking_resource_client) =
            ResourceActor::<Booking>::new(config.channel_capacity, sequential_ids("booking"));
        let booking_client =
            BookingClient::new(booking_resource_client, room_client.clone(), user_client.clone());
        let booking_handle = tokio::spawn(booking_actor.run());

        let admin_client = AdminClient::new(
            room_client.clone(),
            booking_client.clone(),
            user_client.clone(),
        );

        info!("Hotel system started");

        Self {
            room_client,
            user_client,
            booking_client,
            admin_client,
            handles: vec![room_handle, user_handle, booking_handle],
        }
    }

    /// Stops every store and waits for its task to finish.
    ///
    /// Bookings go first since they depend on rooms and users.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down hotel system");

        let _ = self.booking_client.shutdown().await;
        let _ = self.user_client.shutdown().await;
        let _ = self.room_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Store task failed");
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Hotel system shutdown complete");
        Ok(())
    }
}
