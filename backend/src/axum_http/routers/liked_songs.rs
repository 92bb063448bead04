use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use crate::auth::{AuthUser, MaybeAuthUser};
use crate::notify::{TracingNotificationSink, TracingViewRefresher};
use application::{
    interfaces::notify::{NotificationSink, ViewRefresher},
    usecases::{
        like_toggle::{LikeToggleOutcome, LikeToggleUseCase},
        song_queries::SongQueriesUseCase,
    },
};
use domain::repositories::{liked_songs::LikedSongRepository, songs::SongRepository};
use infra::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::{liked_songs::LikedSongPostgres, songs::SongPostgres},
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let song_repository = Arc::new(SongPostgres::new(Arc::clone(&db_pool)));
    let liked_song_repository = Arc::new(LikedSongPostgres::new(Arc::clone(&db_pool)));

    let song_queries_usecase = SongQueriesUseCase::new(song_repository);
    let like_toggle_usecase = LikeToggleUseCase::new(
        liked_song_repository,
        Arc::new(TracingNotificationSink),
        Arc::new(TracingViewRefresher),
    );

    Router::new()
        .route("/", get(list_liked_songs))
        .with_state(Arc::new(song_queries_usecase))
        .merge(
            Router::new()
                .route("/:song_id", get(like_state))
                .route("/:song_id/toggle", post(toggle_like))
                .with_state(Arc::new(like_toggle_usecase)),
        )
}

pub async fn list_liked_songs<R>(
    State(song_queries_usecase): State<Arc<SongQueriesUseCase<R>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    R: SongRepository + Send + Sync + 'static,
{
    let songs = song_queries_usecase.list_liked_songs(auth.user_id).await;
    Json(songs).into_response()
}

pub async fn like_state<L, N, V>(
    State(like_toggle_usecase): State<Arc<LikeToggleUseCase<L, N, V>>>,
    auth: MaybeAuthUser,
    Path(song_id): Path<Uuid>,
) -> impl IntoResponse
where
    L: LikedSongRepository + Send + Sync + 'static,
    N: NotificationSink + 'static,
    V: ViewRefresher + 'static,
{
    let state = like_toggle_usecase
        .current_state(auth.user_id(), song_id)
        .await;

    Json(serde_json::json!({ "state": state })).into_response()
}

pub async fn toggle_like<L, N, V>(
    State(like_toggle_usecase): State<Arc<LikeToggleUseCase<L, N, V>>>,
    auth: MaybeAuthUser,
    Path(song_id): Path<Uuid>,
) -> impl IntoResponse
where
    L: LikedSongRepository + Send + Sync + 'static,
    N: NotificationSink + 'static,
    V: ViewRefresher + 'static,
{
    // Read-then-toggle mirrors the client behavior: two independent round
    // trips, last write wins.
    let user_id = auth.user_id();
    let current = like_toggle_usecase.current_state(user_id, song_id).await;

    match like_toggle_usecase.toggle(user_id, song_id, current).await {
        Ok(LikeToggleOutcome::AuthRequired) => {
            (StatusCode::UNAUTHORIZED, "Authentication required").into_response()
        }
        Ok(LikeToggleOutcome::Toggled(state)) => {
            Json(serde_json::json!({ "state": state })).into_response()
        }
        Err(err) => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.message).into_response()
        }
    }
}
