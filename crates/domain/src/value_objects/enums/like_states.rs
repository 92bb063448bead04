use serde::Serialize;

/// Per (user, song) like state. The default is `NotLiked`: an unauthenticated
/// caller, a failed read, or an absent association row all resolve to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LikeState {
    Liked,
    #[default]
    NotLiked,
}
