use std::sync::Arc;

use anyhow::Result;
use tracing::error;
use uuid::Uuid;

use domain::{
    entities::songs::SongEntity,
    repositories::songs::SongRepository,
    value_objects::{enums::sort_order::SortOrder, songs::ListSongsFilter},
};

/// Read-only pass-throughs over the song catalog. Listings resolve store
/// errors to an empty result (log only); the by-id lookup propagates the
/// error to the caller.
pub struct SongQueriesUseCase<R>
where
    R: SongRepository + Send + Sync + 'static,
{
    song_repository: Arc<R>,
}

impl<R> SongQueriesUseCase<R>
where
    R: SongRepository + Send + Sync + 'static,
{
    pub fn new(song_repository: Arc<R>) -> Self {
        Self { song_repository }
    }

    pub async fn list_songs(&self) -> Vec<SongEntity> {
        let filter = ListSongsFilter {
            sort_order: SortOrder::Desc,
            ..Default::default()
        };

        match self.song_repository.list_songs(&filter).await {
            Ok(songs) => songs,
            Err(err) => {
                error!(db_error = ?err, "song_queries: failed to list songs");
                Vec::new()
            }
        }
    }

    pub async fn search_songs_by_title(&self, title: &str) -> Vec<SongEntity> {
        if title.trim().is_empty() {
            return self.list_songs().await;
        }

        let filter = ListSongsFilter {
            title: Some(title.to_string()),
            sort_order: SortOrder::Desc,
        };

        match self.song_repository.list_songs(&filter).await {
            Ok(songs) => songs,
            Err(err) => {
                error!(
                    title,
                    db_error = ?err,
                    "song_queries: failed to search songs by title"
                );
                Vec::new()
            }
        }
    }

    pub async fn get_song_by_id(&self, song_id: Uuid) -> Result<SongEntity> {
        self.song_repository.find_song_by_id(song_id).await
    }

    pub async fn list_liked_songs(&self, user_id: Uuid) -> Vec<SongEntity> {
        match self.song_repository.list_liked_songs(user_id).await {
            Ok(songs) => songs,
            Err(err) => {
                error!(
                    %user_id,
                    db_error = ?err,
                    "song_queries: failed to list liked songs"
                );
                Vec::new()
            }
        }
    }
}
