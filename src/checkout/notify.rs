//! User notification capability.
//!
//! The original surface fired toasts through a global channel; here every
//! component takes an explicit sink so orchestration stays decoupled from any
//! particular toast UI. Notifications are fire-and-forget and must never
//! block the flow.

use tracing::{error, info};

/// Non-blocking sink for user-visible notices.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Default sink that routes notices through `tracing`. Useful headless and in
/// demos; UI hosts supply their own toast-backed sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn success(&self, message: &str) {
        info!(kind = "success", "{message}");
    }

    fn error(&self, message: &str) {
        error!(kind = "error", "{message}");
    }

    fn info(&self, message: &str) {
        info!(kind = "info", "{message}");
    }
}
