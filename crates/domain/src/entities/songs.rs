use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::schema::songs;

#[derive(Debug, Clone, Serialize, Identifiable, Selectable, Queryable)]
#[diesel(table_name = songs)]
pub struct SongEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub song_path: String,
    pub image_path: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = songs)]
pub struct InsertSongEntity {
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub song_path: String,
    pub image_path: String,
    pub created_at: DateTime<Utc>,
}
