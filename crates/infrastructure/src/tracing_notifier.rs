use async_trait::async_trait;
use entitle_application::{Notice, NoticeSeverity, Notifier};

/// Notifier that writes notices to the tracing log.
///
/// Used wherever no interactive notification surface exists, such as the API
/// composition root and headless tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a new tracing notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notice: Notice) {
        match notice.severity {
            NoticeSeverity::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeSeverity::Error => tracing::error!(message = %notice.message, "notice"),
        }
    }
}
