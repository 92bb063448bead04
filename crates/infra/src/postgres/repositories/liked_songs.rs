use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::postgres::postgres_connection::PgPoolSquad;
use domain::{
    entities::liked_songs::{InsertLikedSongEntity, LikedSongEntity},
    repositories::liked_songs::LikedSongRepository,
    schema::liked_songs,
};

pub struct LikedSongPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl LikedSongPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl LikedSongRepository for LikedSongPostgres {
    async fn find_like(&self, user_id: Uuid, song_id: Uuid) -> Result<Option<LikedSongEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = liked_songs::table
            .filter(liked_songs::user_id.eq(user_id))
            .filter(liked_songs::song_id.eq(song_id))
            .select(LikedSongEntity::as_select())
            .first::<LikedSongEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn like(&self, insert_liked_song_entity: InsertLikedSongEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(liked_songs::table)
            .values(&insert_liked_song_entity)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn unlike(&self, user_id: Uuid, song_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(
            liked_songs::table
                .filter(liked_songs::user_id.eq(user_id))
                .filter(liked_songs::song_id.eq(song_id)),
        )
        .execute(&mut conn)?;

        Ok(())
    }
}
