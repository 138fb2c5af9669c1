use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use entitle_core::{AppError, AppResult};
use entitle_domain::{Application, ApplicationDraft, ApplicationId};
use tokio::sync::RwLock;

use crate::ports::{ApplicationDirectory, Notice, Notifier};
use crate::selection::{ApplicationSelection, RoleSelection};

mod roles;
mod submit;


/// Outcome of a confirmation prompt shown before a destructive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user accepted the prompt.
    Confirmed,
    /// The user dismissed the prompt; the operation is a no-op.
    Dismissed,
}

/// Coordinator for creating, editing, and validating an application together
/// with its nested role collection.
///
/// Bridges the application form draft, the two selection stores, and the
/// directory submission path. Exactly one of create mode (no selected
/// application) and edit mode holds at any time.
pub struct ApplicationEditor {
    directory: Arc<dyn ApplicationDirectory>,
    notifier: Arc<dyn Notifier>,
    applications: ApplicationSelection,
    roles: RoleSelection,
    draft: RwLock<ApplicationDraft>,
    submitting: AtomicBool,
}

impl ApplicationEditor {
    /// Creates an editor in create mode over the given stores.
    #[must_use]
    pub fn new(
        directory: Arc<dyn ApplicationDirectory>,
        notifier: Arc<dyn Notifier>,
        applications: ApplicationSelection,
        roles: RoleSelection,
    ) -> Self {
        Self {
            directory,
            notifier,
            applications,
            roles,
            draft: RwLock::new(ApplicationDraft::default()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Fetches the full application list from the directory into the
    /// application selection store.
    pub async fn refresh_applications(&self) -> AppResult<Vec<Application>> {
        let applications = self.directory.list_applications().await?;
        self.applications
            .set_applications(applications.clone())
            .await;
        Ok(applications)
    }

    /// Resets to create mode: no selection, empty working list, default draft.
    pub async fn start_create(&self) {
        self.clear_selection_and_form().await;
    }

    /// Enters edit mode for a persisted application.
    ///
    /// Copies the application's roles into the working list and loads the
    /// draft from its values.
    pub async fn start_edit(&self, application: Application) {
        *self.draft.write().await = ApplicationDraft::from_application(&application);
        self.roles
            .set_roles(application.profile().roles().to_vec())
            .await;
        self.roles.set_selected_role(None).await;
        self.applications.set_selected(Some(application)).await;
    }

    /// Returns a copy of the current form draft.
    pub async fn draft(&self) -> ApplicationDraft {
        self.draft.read().await.clone()
    }

    /// Replaces the form draft wholesale, as field bindings do on change.
    pub async fn set_draft(&self, draft: ApplicationDraft) {
        *self.draft.write().await = draft;
    }

    /// Discards in-progress edits without calling the directory. Idempotent.
    pub async fn cancel(&self) {
        self.clear_selection_and_form().await;
    }

    /// Returns whether a submission is currently in flight, for disabling
    /// the submit affordance.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Deletes an application after confirmation.
    ///
    /// On success the cached list is reloaded, and when the deleted entry
    /// was the one being edited the editor drops back to create mode so a
    /// just-deleted application cannot keep being edited.
    pub async fn delete_application(
        &self,
        id: &ApplicationId,
        confirmation: Confirmation,
    ) -> AppResult<bool> {
        if confirmation == Confirmation::Dismissed {
            return Ok(false);
        }

        match self.directory.delete_application(id).await {
            Ok(receipt) => {
                self.reload_applications_quietly().await;
                self.notifier
                    .notify(Notice::success(format!(
                        "Application with ID {} deleted successfully",
                        receipt.id
                    )))
                    .await;

                let selected = self.applications.selected().await;
                if selected.is_some_and(|application| application.id() == &receipt.id) {
                    self.clear_selection_and_form().await;
                }
                Ok(true)
            }
            Err(error) => {
                self.notifier
                    .notify(Notice::error(format!(
                        "Error deleting application: {error}"
                    )))
                    .await;
                Err(error)
            }
        }
    }

    async fn clear_selection_and_form(&self) {
        self.applications.set_selected(None).await;
        self.roles.set_selected_role(None).await;
        self.roles.set_roles(Vec::new()).await;
        *self.draft.write().await = ApplicationDraft::default();
    }

    /// List refresh after a confirmed write; a stale cache is reported but
    /// never fails the operation that caused it.
    async fn reload_applications_quietly(&self) {
        if let Err(error) = self.refresh_applications().await {
            self.notifier
                .notify(Notice::error(format!(
                    "Error refreshing applications: {error}"
                )))
                .await;
        }
    }
}
