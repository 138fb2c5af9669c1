use super::*;

/// Releases the in-flight flag on every exit path of a submission.
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ApplicationEditor {
    /// Validates the full form and submits it to the directory.
    ///
    /// Create mode calls the directory create operation; edit mode calls the
    /// update operation with the authoritative id taken from the selection
    /// store, never from user input. Local validation failures never reach
    /// the directory. On success the cached list is reloaded and the editor
    /// resets to create-mode defaults; on a directory failure the draft and
    /// selections are left untouched for retry.
    pub async fn submit(&self) -> AppResult<Application> {
        let _guard = self.begin_submission()?;

        let draft = self.draft.read().await.clone();
        let working_roles = self.roles.roles().await;

        let profile = match draft.validate(&working_roles) {
            Ok(profile) => profile,
            Err(issues) => {
                self.notifier
                    .notify(Notice::error("Please fill in all required fields"))
                    .await;
                return Err(issues.into());
            }
        };

        let selected = self.applications.selected().await;
        let outcome = match &selected {
            Some(existing) => {
                self.directory
                    .update_application(Application::new(existing.id().clone(), profile))
                    .await
            }
            None => self.directory.create_application(profile).await,
        };

        match outcome {
            Ok(saved) => {
                self.reload_applications_quietly().await;
                let verb = if selected.is_some() {
                    "updated"
                } else {
                    "created"
                };
                self.notifier
                    .notify(Notice::success(format!(
                        "Application '{}' {verb} successfully",
                        saved.profile().name().as_str()
                    )))
                    .await;
                self.clear_selection_and_form().await;
                Ok(saved)
            }
            Err(error) => {
                let verb = if selected.is_some() {
                    "updating"
                } else {
                    "creating"
                };
                self.notifier
                    .notify(Notice::error(format!("Error {verb} application: {error}")))
                    .await;
                Err(error)
            }
        }
    }

    /// Claims the single submission slot; a second submit while one is in
    /// flight is rejected without touching any state.
    fn begin_submission(&self) -> AppResult<SubmitGuard<'_>> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::Conflict(
                "a submission is already in flight".to_owned(),
            ));
        }

        Ok(SubmitGuard(&self.submitting))
    }
}
