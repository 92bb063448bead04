use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::notify::{TracingNotificationSink, TracingViewRefresher};
use application::{
    interfaces::{
        notify::{NotificationSink, ViewRefresher},
        tokens::{UploadTokenGenerator, UuidTokenGenerator},
    },
    usecases::{
        song_queries::SongQueriesUseCase,
        song_upload::{SongUploadError, SongUploadRequest, SongUploadUseCase, UploadFile},
    },
};
use domain::repositories::{songs::SongRepository, storage::SongStorageClient};
use infra::postgres::{postgres_connection::PgPoolSquad, repositories::songs::SongPostgres};

#[derive(Debug, Deserialize)]
pub struct ListSongsQuery {
    title: Option<String>,
}

pub fn routes<S>(db_pool: Arc<PgPoolSquad>, storage_client: Arc<S>) -> Router
where
    S: SongStorageClient + Send + Sync + 'static,
{
    let song_repository = Arc::new(SongPostgres::new(Arc::clone(&db_pool)));

    let song_queries_usecase = SongQueriesUseCase::new(Arc::clone(&song_repository));
    let song_upload_usecase = SongUploadUseCase::new(
        song_repository,
        storage_client,
        Arc::new(UuidTokenGenerator),
        Arc::new(TracingNotificationSink),
        Arc::new(TracingViewRefresher),
    );

    Router::new()
        .route("/", get(list_songs))
        .route("/:song_id", get(get_song_by_id))
        .with_state(Arc::new(song_queries_usecase))
        .merge(
            Router::new()
                .route("/", post(upload_song))
                .with_state(Arc::new(song_upload_usecase)),
        )
}

pub async fn list_songs<R>(
    State(song_queries_usecase): State<Arc<SongQueriesUseCase<R>>>,
    Query(query): Query<ListSongsQuery>,
) -> impl IntoResponse
where
    R: SongRepository + Send + Sync + 'static,
{
    let songs = match query.title {
        Some(title) => song_queries_usecase.search_songs_by_title(&title).await,
        None => song_queries_usecase.list_songs().await,
    };

    Json(songs).into_response()
}

pub async fn get_song_by_id<R>(
    State(song_queries_usecase): State<Arc<SongQueriesUseCase<R>>>,
    Path(song_id): Path<Uuid>,
) -> impl IntoResponse
where
    R: SongRepository + Send + Sync + 'static,
{
    match song_queries_usecase.get_song_by_id(song_id).await {
        Ok(song) => Json(song).into_response(),
        Err(e) => {
            let error_message = e.to_string();
            if error_message.contains("Record not found") {
                (StatusCode::NOT_FOUND, "Song not found").into_response()
            } else {
                (StatusCode::INTERNAL_SERVER_ERROR, error_message).into_response()
            }
        }
    }
}

pub async fn upload_song<R, S, T, N, V>(
    State(song_upload_usecase): State<Arc<SongUploadUseCase<R, S, T, N, V>>>,
    auth: AuthUser,
    multipart: Multipart,
) -> impl IntoResponse
where
    R: SongRepository + Send + Sync + 'static,
    S: SongStorageClient + Send + Sync + 'static,
    T: UploadTokenGenerator + 'static,
    N: NotificationSink + 'static,
    V: ViewRefresher + 'static,
{
    let request = match parse_upload_form(multipart).await {
        Ok(request) => request,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };

    match song_upload_usecase.upload(auth.user_id, request).await {
        Ok(song_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": song_id })),
        )
            .into_response(),
        Err(err) => {
            let status = match &err {
                SongUploadError::MissingFields(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, err.to_string()).into_response()
        }
    }
}

/// Maps multipart fields onto the upload request. Presence checks stay in
/// the use case's validation step; this only collects what was sent.
async fn parse_upload_form(mut multipart: Multipart) -> Result<SongUploadRequest, String> {
    let mut request = SongUploadRequest::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => return Err("Invalid multipart payload".to_string()),
        };

        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => {
                request.title = field
                    .text()
                    .await
                    .map_err(|_| "Invalid title field".to_string())?;
            }
            "author" => {
                request.author = field
                    .text()
                    .await
                    .map_err(|_| "Invalid author field".to_string())?;
            }
            "song" | "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        mime_guess::from_path(&file_name)
                            .first_or_octet_stream()
                            .to_string()
                    });
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| format!("Invalid {} field", name))?;

                let file = UploadFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                };

                if name == "song" {
                    request.song = Some(file);
                } else {
                    request.image = Some(file);
                }
            }
            _ => {}
        }
    }

    Ok(request)
}
