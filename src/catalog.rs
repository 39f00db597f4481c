use crate::data::sample_rooms;
use crate::error::Result;
use crate::filter;
use crate::models::Room;
use async_trait::async_trait;

/// Source of room listings. The desktop build only ships the in-memory
/// catalogue; a remote backend can implement the same trait.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list_rooms(&self) -> Result<Vec<Room>>;

    async fn find_room(&self, id: i64) -> Result<Option<Room>>;

    /// Other rooms in the same location as `room`, in catalogue order.
    async fn similar_rooms(&self, room: &Room, limit: usize) -> Result<Vec<Room>>;
}

pub struct InMemoryRooms {
    rooms: Vec<Room>,
}

impl InMemoryRooms {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn sample() -> Self {
        Self::new(sample_rooms())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

#[async_trait]
impl RoomRepository for InMemoryRooms {
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        Ok(self.rooms.clone())
    }

    async fn find_room(&self, id: i64) -> Result<Option<Room>> {
        Ok(self.rooms.iter().find(|room| room.id == id).cloned())
    }

    async fn similar_rooms(&self, room: &Room, limit: usize) -> Result<Vec<Room>> {
        Ok(filter::similar_rooms(&self.rooms, room, limit))
    }
}
