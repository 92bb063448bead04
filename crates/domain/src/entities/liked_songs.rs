use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::schema::liked_songs;

/// Association row: its existence means "this user likes this song".
#[derive(Debug, Clone, Serialize, Selectable, Queryable)]
#[diesel(table_name = liked_songs)]
pub struct LikedSongEntity {
    pub user_id: Uuid,
    pub song_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = liked_songs)]
pub struct InsertLikedSongEntity {
    pub user_id: Uuid,
    pub song_id: Uuid,
    pub created_at: DateTime<Utc>,
}
