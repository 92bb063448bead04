use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use domain::{
    entities::songs::InsertSongEntity,
    repositories::{songs::SongRepository, storage::SongStorageClient},
    value_objects::storage::StorageBucket,
};

use crate::interfaces::{
    notify::{NotificationSink, ViewRefresher},
    tokens::UploadTokenGenerator,
};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing fields";
pub const SONG_UPLOAD_FAILED_MESSAGE: &str = "Failed to upload song.";
pub const IMAGE_UPLOAD_FAILED_MESSAGE: &str = "Failed to upload image.";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Successfully uploaded!";

#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct SongUploadRequest {
    pub title: String,
    pub author: String,
    pub song: Option<UploadFile>,
    pub image: Option<UploadFile>,
}

#[derive(Debug)]
pub struct ValidatedSongUpload {
    pub title: String,
    pub author: String,
    pub song: UploadFile,
    pub image: UploadFile,
}

impl SongUploadRequest {
    /// All four fields are mandatory; a submission is all or nothing.
    /// Returns the names of the missing fields so nothing downstream has
    /// to re-check presence.
    pub fn validate(self) -> Result<ValidatedSongUpload, Vec<&'static str>> {
        let mut missing = Vec::new();

        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.author.trim().is_empty() {
            missing.push("author");
        }

        let song = match self.song {
            Some(file) if !file.bytes.is_empty() => Some(file),
            _ => {
                missing.push("song");
                None
            }
        };
        let image = match self.image {
            Some(file) if !file.bytes.is_empty() => Some(file),
            _ => {
                missing.push("image");
                None
            }
        };

        match (song, image) {
            (Some(song), Some(image)) if missing.is_empty() => Ok(ValidatedSongUpload {
                title: self.title,
                author: self.author,
                song,
                image,
            }),
            _ => Err(missing),
        }
    }
}

#[derive(Debug, Error)]
pub enum SongUploadError {
    #[error("Missing fields")]
    MissingFields(Vec<&'static str>),
    #[error("Failed to upload song.")]
    SongUpload(#[source] anyhow::Error),
    #[error("Failed to upload image.")]
    ImageUpload(#[source] anyhow::Error),
    #[error("{0}")]
    RecordInsert(String),
}

pub type UploadResult<T> = std::result::Result<T, SongUploadError>;

/// Three-step publish workflow: audio upload, image upload, song row insert.
/// Strictly sequential; every failure is terminal for the run and surfaces
/// exactly one notification. There is no retry and no compensation: a
/// resubmission mints a fresh token, so it never collides with the orphaned
/// objects a failed run may have left behind.
pub struct SongUploadUseCase<R, S, T, N, V>
where
    R: SongRepository + Send + Sync + 'static,
    S: SongStorageClient + Send + Sync + 'static,
    T: UploadTokenGenerator + 'static,
    N: NotificationSink + 'static,
    V: ViewRefresher + 'static,
{
    song_repository: Arc<R>,
    storage_client: Arc<S>,
    token_generator: Arc<T>,
    notifier: Arc<N>,
    view_refresher: Arc<V>,
}

impl<R, S, T, N, V> SongUploadUseCase<R, S, T, N, V>
where
    R: SongRepository + Send + Sync + 'static,
    S: SongStorageClient + Send + Sync + 'static,
    T: UploadTokenGenerator + 'static,
    N: NotificationSink + 'static,
    V: ViewRefresher + 'static,
{
    pub fn new(
        song_repository: Arc<R>,
        storage_client: Arc<S>,
        token_generator: Arc<T>,
        notifier: Arc<N>,
        view_refresher: Arc<V>,
    ) -> Self {
        Self {
            song_repository,
            storage_client,
            token_generator,
            notifier,
            view_refresher,
        }
    }

    pub async fn upload(&self, user_id: Uuid, request: SongUploadRequest) -> UploadResult<Uuid> {
        info!(
            %user_id,
            title = %request.title,
            "song_upload: upload requested"
        );

        let validated = match request.validate() {
            Ok(validated) => validated,
            Err(missing) => {
                warn!(
                    %user_id,
                    missing_fields = ?missing,
                    "song_upload: rejected before any network call"
                );
                self.notifier.error(MISSING_FIELDS_MESSAGE);
                return Err(SongUploadError::MissingFields(missing));
            }
        };

        let token = self.token_generator.generate();
        let song_key = format!("song-{}-{}", validated.title, token);
        let image_key = format!("image-{}-{}", validated.title, token);

        let song_path = self
            .storage_client
            .upload_object(
                StorageBucket::Songs,
                &song_key,
                validated.song.bytes,
                &validated.song.content_type,
            )
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    object_key = %song_key,
                    storage_error = ?err,
                    "song_upload: song upload failed"
                );
                self.notifier.error(SONG_UPLOAD_FAILED_MESSAGE);
                SongUploadError::SongUpload(err)
            })?;

        // No rollback of the song object from here on: a failed run leaves
        // it orphaned, and the next run's fresh token steers clear of it.
        let image_path = self
            .storage_client
            .upload_object(
                StorageBucket::Images,
                &image_key,
                validated.image.bytes,
                &validated.image.content_type,
            )
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    object_key = %image_key,
                    storage_error = ?err,
                    "song_upload: image upload failed"
                );
                self.notifier.error(IMAGE_UPLOAD_FAILED_MESSAGE);
                SongUploadError::ImageUpload(err)
            })?;

        let now = Utc::now();
        let insert_song_entity = InsertSongEntity {
            user_id,
            title: validated.title,
            author: validated.author,
            song_path,
            image_path,
            created_at: now,
        };

        let song_id = self
            .song_repository
            .insert_song(insert_song_entity)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    db_error = ?err,
                    "song_upload: failed to insert song row"
                );
                // The store's own message travels to the user verbatim.
                let message = err.to_string();
                self.notifier.error(&message);
                SongUploadError::RecordInsert(message)
            })?;

        info!(%user_id, %song_id, "song_upload: song published");
        self.notifier.success(UPLOAD_SUCCESS_MESSAGE);
        self.view_refresher.refresh();

        Ok(song_id)
    }
}
