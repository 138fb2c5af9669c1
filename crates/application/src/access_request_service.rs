use std::sync::Arc;

use entitle_core::AppResult;
use entitle_domain::{AccessRequest, AccessRequestDraft, ApplicationId};

use crate::ports::{AccessRequestStore, Notice, Notifier};

/// Validates and records requests for access to an application role.
#[derive(Clone)]
pub struct AccessRequestService {
    store: Arc<dyn AccessRequestStore>,
    notifier: Arc<dyn Notifier>,
}

impl AccessRequestService {
    /// Creates a new access request service.
    #[must_use]
    pub fn new(store: Arc<dyn AccessRequestStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Validates a request draft and records it.
    ///
    /// Local validation failures (missing role or reason) never reach the
    /// store; store failures are surfaced as an error notice and the draft
    /// is left to the caller for retry.
    pub async fn submit_request(
        &self,
        application_id: ApplicationId,
        requested_for: &str,
        draft: &AccessRequestDraft,
    ) -> AppResult<AccessRequest> {
        let request = draft.validate(application_id, requested_for)?;

        match self.store.append_request(request.clone()).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success(format!(
                        "Access request for role '{}' submitted",
                        request.role_code().as_str()
                    )))
                    .await;
                Ok(request)
            }
            Err(error) => {
                self.notifier
                    .notify(Notice::error(format!(
                        "Error submitting access request: {error}"
                    )))
                    .await;
                Err(error)
            }
        }
    }

    /// Returns all recorded requests, oldest first.
    pub async fn list_requests(&self) -> AppResult<Vec<AccessRequest>> {
        self.store.list_requests().await
    }
}
