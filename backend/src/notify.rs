use application::interfaces::notify::{NotificationSink, ViewRefresher};
use tracing::{debug, info, warn};

/// Server-side rendering of the notification surface: the message also
/// travels in the HTTP response body, so here it only needs to reach the
/// logs as a structured event.
#[derive(Debug, Clone, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn success(&self, message: &str) {
        info!(notification = "success", message, "notify: user notification");
    }

    fn error(&self, message: &str) {
        warn!(notification = "error", message, "notify: user notification");
    }
}

#[derive(Debug, Clone, Default)]
pub struct TracingViewRefresher;

impl ViewRefresher for TracingViewRefresher {
    fn refresh(&self) {
        debug!("notify: dependent views marked stale");
    }
}
