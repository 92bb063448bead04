use anyhow::Result;
use async_trait::async_trait;
use diesel::{insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::postgres::postgres_connection::PgPoolSquad;
use domain::{
    entities::songs::{InsertSongEntity, SongEntity},
    repositories::songs::SongRepository,
    schema::{liked_songs, songs},
    value_objects::{enums::sort_order::SortOrder, songs::ListSongsFilter},
};

pub struct SongPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SongPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SongRepository for SongPostgres {
    async fn insert_song(&self, insert_song_entity: InsertSongEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(songs::table)
            .values(&insert_song_entity)
            .returning(songs::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn list_songs(&self, filter: &ListSongsFilter) -> Result<Vec<SongEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = songs::table.select(SongEntity::as_select()).into_boxed();

        if let Some(title) = &filter.title {
            query = query.filter(songs::title.ilike(format!("%{}%", title)));
        }

        query = match filter.sort_order {
            SortOrder::Asc => query.order(songs::created_at.asc()),
            SortOrder::Desc => query.order(songs::created_at.desc()),
        };

        let results = query.load::<SongEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_song_by_id(&self, song_id: Uuid) -> Result<SongEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = songs::table
            .filter(songs::id.eq(song_id))
            .select(SongEntity::as_select())
            .first::<SongEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list_liked_songs(&self, user_id: Uuid) -> Result<Vec<SongEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = liked_songs::table
            .inner_join(songs::table.on(liked_songs::song_id.eq(songs::id)))
            .select(SongEntity::as_select())
            .filter(liked_songs::user_id.eq(user_id))
            .order(liked_songs::created_at.desc())
            .load::<SongEntity>(&mut conn)?;

        Ok(results)
    }
}
