use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use domain::{
    entities::liked_songs::InsertLikedSongEntity,
    repositories::liked_songs::LikedSongRepository,
    value_objects::enums::like_states::LikeState,
};

use crate::interfaces::notify::{NotificationSink, ViewRefresher};

pub const LIKE_SUCCESS_MESSAGE: &str = "Success";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggleOutcome {
    /// No authenticated user: the caller must show the authentication
    /// prompt instead; no store call was made.
    AuthRequired,
    Toggled(LikeState),
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct LikeToggleError {
    pub message: String,
    /// The state the pair is still in: a failed mutation never flips it.
    pub retained: LikeState,
}

/// Two-state machine per (user, song) pair. The existence check and the
/// toggle are independent round trips; two rapid toggles can race and the
/// last write wins, with no optimistic-concurrency guard.
pub struct LikeToggleUseCase<L, N, V>
where
    L: LikedSongRepository + Send + Sync + 'static,
    N: NotificationSink + 'static,
    V: ViewRefresher + 'static,
{
    liked_song_repository: Arc<L>,
    notifier: Arc<N>,
    view_refresher: Arc<V>,
}

impl<L, N, V> LikeToggleUseCase<L, N, V>
where
    L: LikedSongRepository + Send + Sync + 'static,
    N: NotificationSink + 'static,
    V: ViewRefresher + 'static,
{
    pub fn new(liked_song_repository: Arc<L>, notifier: Arc<N>, view_refresher: Arc<V>) -> Self {
        Self {
            liked_song_repository,
            notifier,
            view_refresher,
        }
    }

    /// Single existence read. Unauthenticated callers, read errors, and
    /// absent rows all resolve to `NotLiked`; a read error is log-only.
    pub async fn current_state(&self, user_id: Option<Uuid>, song_id: Uuid) -> LikeState {
        let Some(user_id) = user_id else {
            return LikeState::NotLiked;
        };

        match self
            .liked_song_repository
            .find_like(user_id, song_id)
            .await
        {
            Ok(Some(_)) => LikeState::Liked,
            Ok(None) => LikeState::NotLiked,
            Err(err) => {
                warn!(
                    %user_id,
                    %song_id,
                    db_error = ?err,
                    "like_toggle: failed to load like state, defaulting to not-liked"
                );
                LikeState::NotLiked
            }
        }
    }

    pub async fn toggle(
        &self,
        user_id: Option<Uuid>,
        song_id: Uuid,
        current: LikeState,
    ) -> Result<LikeToggleOutcome, LikeToggleError> {
        let Some(user_id) = user_id else {
            info!(%song_id, "like_toggle: unauthenticated toggle, auth prompt required");
            return Ok(LikeToggleOutcome::AuthRequired);
        };

        match current {
            LikeState::NotLiked => {
                let insert_liked_song_entity = InsertLikedSongEntity {
                    user_id,
                    song_id,
                    created_at: Utc::now(),
                };

                if let Err(err) = self
                    .liked_song_repository
                    .like(insert_liked_song_entity)
                    .await
                {
                    error!(
                        %user_id,
                        %song_id,
                        db_error = ?err,
                        "like_toggle: failed to insert like"
                    );
                    let message = err.to_string();
                    self.notifier.error(&message);
                    return Err(LikeToggleError {
                        message,
                        retained: LikeState::NotLiked,
                    });
                }

                info!(%user_id, %song_id, "like_toggle: song liked");
                self.notifier.success(LIKE_SUCCESS_MESSAGE);
                self.view_refresher.refresh();
                Ok(LikeToggleOutcome::Toggled(LikeState::Liked))
            }
            LikeState::Liked => {
                if let Err(err) = self.liked_song_repository.unlike(user_id, song_id).await {
                    error!(
                        %user_id,
                        %song_id,
                        db_error = ?err,
                        "like_toggle: failed to delete like"
                    );
                    let message = err.to_string();
                    self.notifier.error(&message);
                    return Err(LikeToggleError {
                        message,
                        retained: LikeState::Liked,
                    });
                }

                // The unlike path stays silent; only the like path notifies.
                info!(%user_id, %song_id, "like_toggle: song unliked");
                self.view_refresher.refresh();
                Ok(LikeToggleOutcome::Toggled(LikeState::NotLiked))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::notify::{MockNotificationSink, MockViewRefresher};
    use domain::entities::liked_songs::LikedSongEntity;
    use domain::repositories::liked_songs::MockLikedSongRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn unauthenticated_toggle_requires_auth_and_touches_nothing() {
        let mut liked_song_repository = MockLikedSongRepository::new();
        liked_song_repository.expect_like().times(0);
        liked_song_repository.expect_unlike().times(0);

        let usecase = LikeToggleUseCase::new(
            Arc::new(liked_song_repository),
            Arc::new(MockNotificationSink::new()),
            Arc::new(MockViewRefresher::new()),
        );

        let outcome = usecase
            .toggle(None, Uuid::new_v4(), LikeState::NotLiked)
            .await
            .unwrap();

        assert_eq!(outcome, LikeToggleOutcome::AuthRequired);
    }

    #[tokio::test]
    async fn like_then_unlike_round_trips_with_one_insert_and_one_delete() {
        let user_id = Uuid::new_v4();
        let song_id = Uuid::new_v4();

        let mut liked_song_repository = MockLikedSongRepository::new();
        liked_song_repository
            .expect_like()
            .withf(move |entity| entity.user_id == user_id && entity.song_id == song_id)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        liked_song_repository
            .expect_unlike()
            .with(eq(user_id), eq(song_id))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let mut notifier = MockNotificationSink::new();
        // Only the like direction notifies; the unlike stays silent.
        notifier
            .expect_success()
            .withf(|message| message == LIKE_SUCCESS_MESSAGE)
            .times(1)
            .return_const(());

        let mut view_refresher = MockViewRefresher::new();
        view_refresher.expect_refresh().times(2).return_const(());

        let usecase = LikeToggleUseCase::new(
            Arc::new(liked_song_repository),
            Arc::new(notifier),
            Arc::new(view_refresher),
        );

        let liked = usecase
            .toggle(Some(user_id), song_id, LikeState::NotLiked)
            .await
            .unwrap();
        assert_eq!(liked, LikeToggleOutcome::Toggled(LikeState::Liked));

        let unliked = usecase
            .toggle(Some(user_id), song_id, LikeState::Liked)
            .await
            .unwrap();
        assert_eq!(unliked, LikeToggleOutcome::Toggled(LikeState::NotLiked));
    }

    #[tokio::test]
    async fn failed_delete_retains_liked_state() {
        let user_id = Uuid::new_v4();
        let song_id = Uuid::new_v4();

        let mut liked_song_repository = MockLikedSongRepository::new();
        liked_song_repository
            .expect_unlike()
            .with(eq(user_id), eq(song_id))
            .times(1)
            .returning(|_, _| Box::pin(async { Err(anyhow::anyhow!("connection reset")) }));

        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_error()
            .withf(|message| message == "connection reset")
            .times(1)
            .return_const(());

        let usecase = LikeToggleUseCase::new(
            Arc::new(liked_song_repository),
            Arc::new(notifier),
            Arc::new(MockViewRefresher::new()),
        );

        let err = usecase
            .toggle(Some(user_id), song_id, LikeState::Liked)
            .await
            .unwrap_err();

        assert_eq!(err.retained, LikeState::Liked);
        assert_eq!(err.message, "connection reset");
    }

    #[tokio::test]
    async fn failed_insert_retains_not_liked_state() {
        let user_id = Uuid::new_v4();
        let song_id = Uuid::new_v4();

        let mut liked_song_repository = MockLikedSongRepository::new();
        liked_song_repository
            .expect_like()
            .times(1)
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("permission denied")) }));

        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_error()
            .withf(|message| message == "permission denied")
            .times(1)
            .return_const(());

        let usecase = LikeToggleUseCase::new(
            Arc::new(liked_song_repository),
            Arc::new(notifier),
            Arc::new(MockViewRefresher::new()),
        );

        let err = usecase
            .toggle(Some(user_id), song_id, LikeState::NotLiked)
            .await
            .unwrap_err();

        assert_eq!(err.retained, LikeState::NotLiked);
    }

    #[tokio::test]
    async fn current_state_defaults_to_not_liked_on_read_error() {
        let mut liked_song_repository = MockLikedSongRepository::new();
        liked_song_repository
            .expect_find_like()
            .times(1)
            .returning(|_, _| Box::pin(async { Err(anyhow::anyhow!("timeout")) }));

        let usecase = LikeToggleUseCase::new(
            Arc::new(liked_song_repository),
            Arc::new(MockNotificationSink::new()),
            Arc::new(MockViewRefresher::new()),
        );

        let state = usecase
            .current_state(Some(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert_eq!(state, LikeState::NotLiked);
    }

    #[tokio::test]
    async fn current_state_reads_the_association_row() {
        let user_id = Uuid::new_v4();
        let song_id = Uuid::new_v4();

        let mut liked_song_repository = MockLikedSongRepository::new();
        liked_song_repository
            .expect_find_like()
            .with(eq(user_id), eq(song_id))
            .times(1)
            .returning(move |user_id, song_id| {
                Box::pin(async move {
                    Ok(Some(LikedSongEntity {
                        user_id,
                        song_id,
                        created_at: Utc::now(),
                    }))
                })
            });

        let usecase = LikeToggleUseCase::new(
            Arc::new(liked_song_repository),
            Arc::new(MockNotificationSink::new()),
            Arc::new(MockViewRefresher::new()),
        );

        let state = usecase.current_state(Some(user_id), song_id).await;
        assert_eq!(state, LikeState::Liked);
    }

    #[tokio::test]
    async fn current_state_is_not_liked_without_a_session() {
        let mut liked_song_repository = MockLikedSongRepository::new();
        liked_song_repository.expect_find_like().times(0);

        let usecase = LikeToggleUseCase::new(
            Arc::new(liked_song_repository),
            Arc::new(MockNotificationSink::new()),
            Arc::new(MockViewRefresher::new()),
        );

        let state = usecase.current_state(None, Uuid::new_v4()).await;
        assert_eq!(state, LikeState::NotLiked);
    }
}
