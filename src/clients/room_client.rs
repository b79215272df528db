use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{cmp_sequential_ids, Room};
use crate::room_actor::{RoomCreate, RoomError, RoomPatch};

/// Client for the Room store.
#[derive(Clone)]
pub struct RoomClient {
    inner: ResourceClient<Room>,
}

impl_basic_client!(RoomClient, Room, RoomError, room);

impl RoomClient {
    #[instrument(skip(self), fields(room_name = %room.name))]
    pub async fn create_room(&self, room: RoomCreate) -> Result<Room, RoomError> {
        debug!("Sending request");
        let room = self.inner.create(room).await?;
        info!(room_id = %room.id, "Room created");
        Ok(room)
    }

    #[instrument(skip(self))]
    pub async fn update_room(&self, id: String, patch: RoomPatch) -> Result<Room, RoomError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Rooms currently open for booking, oldest listing first.
    #[instrument(skip(self))]
    pub async fn list_available_rooms(&self) -> Result<Vec<Room>, RoomError> {
        self.search_rooms(None).await
    }

    /// Available rooms that fit the party. A missing guest count means one guest.
    #[instrument(skip(self))]
    pub async fn search_rooms(&self, guests: Option<u32>) -> Result<Vec<Room>, RoomError> {
        debug!("Sending request");
        let guests = guests.unwrap_or(1);
        let mut rooms: Vec<Room> = self
            .inner
            .list()
            .await?
            .into_iter()
            .filter(|room| room.can_host(guests))
            .collect();
        rooms.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| cmp_sequential_ids(&a.id, &b.id)));
        debug!(count = rooms.len(), "Rooms matched");
        Ok(rooms)
    }
}
