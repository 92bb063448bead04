use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::entities::liked_songs::{InsertLikedSongEntity, LikedSongEntity};

#[async_trait]
#[automock]
pub trait LikedSongRepository {
    async fn find_like(&self, user_id: Uuid, song_id: Uuid) -> Result<Option<LikedSongEntity>>;
    async fn like(&self, insert_liked_song_entity: InsertLikedSongEntity) -> Result<()>;
    async fn unlike(&self, user_id: Uuid, song_id: Uuid) -> Result<()>;
}
