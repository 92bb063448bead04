/// User-facing notification surface. Fire-and-forget: callers never wait
/// for or act on delivery.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Invalidation hook for cached views that depend on songs or likes.
#[cfg_attr(test, mockall::automock)]
pub trait ViewRefresher: Send + Sync {
    fn refresh(&self);
}
