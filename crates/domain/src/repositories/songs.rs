use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::entities::songs::{InsertSongEntity, SongEntity};
use crate::value_objects::songs::ListSongsFilter;

#[async_trait]
#[automock]
pub trait SongRepository {
    async fn insert_song(&self, insert_song_entity: InsertSongEntity) -> Result<Uuid>;
    async fn list_songs(&self, filter: &ListSongsFilter) -> Result<Vec<SongEntity>>;
    async fn find_song_by_id(&self, song_id: Uuid) -> Result<SongEntity>;
    async fn list_liked_songs(&self, user_id: Uuid) -> Result<Vec<SongEntity>>;
}
