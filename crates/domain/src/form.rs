use entitle_core::AppError;

use crate::application::{Application, ApplicationProfile, PersonRef};
use crate::role::{AccessType, Audience, Role};

/// A single validation finding, attached to the form field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Path of the offending field (`app_name`, `retention_days`, `roles`, ...).
    pub path: &'static str,
    /// Human-readable message shown next to the field.
    pub message: String,
}

/// Ordered collection of validation findings for one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftIssues(Vec<FieldIssue>);

impl DraftIssues {
    fn push(&mut self, path: &'static str, message: impl Into<String>) {
        self.0.push(FieldIssue {
            path,
            message: message.into(),
        });
    }

    /// Returns whether any issue was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the recorded issues in field order.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.0
    }

    /// Returns whether an issue is attached to the given field path.
    #[must_use]
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|issue| issue.path == path)
    }
}

impl std::fmt::Display for DraftIssues {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for issue in &self.0 {
            if !first {
                write!(formatter, "; ")?;
            }
            write!(formatter, "{}: {}", issue.path, issue.message)?;
            first = false;
        }
        Ok(())
    }
}

impl From<DraftIssues> for AppError {
    fn from(value: DraftIssues) -> Self {
        Self::Validation(value.to_string())
    }
}

/// In-progress application form state, loosely typed until validated.
///
/// The role collection is deliberately absent: the working role list held by
/// the role selection store is the single source of truth and is passed to
/// [`ApplicationDraft::validate`] at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    /// Application display name.
    pub app_name: String,
    /// Free-text description.
    pub app_description: String,
    /// Whether inactive users should be purged.
    pub delete_inactive_users: bool,
    /// Inactivity retention window; required when the purge flag is set.
    pub retention_days: Option<u32>,
    /// Business owner picked from the directory.
    pub business_owner: Option<PersonRef>,
    /// Additional application administrators.
    pub application_admins: Vec<PersonRef>,
}

impl ApplicationDraft {
    /// Loads a draft from a persisted application for edit mode.
    #[must_use]
    pub fn from_application(application: &Application) -> Self {
        let profile = application.profile();
        Self {
            app_name: profile.name().as_str().to_owned(),
            app_description: profile.description().unwrap_or_default().to_owned(),
            delete_inactive_users: profile.delete_inactive_users(),
            retention_days: profile.retention_days(),
            business_owner: profile.business_owner().cloned(),
            application_admins: profile.application_admins().to_vec(),
        }
    }

    /// Validates the draft together with the working role list.
    ///
    /// The retention invariant is re-checked here, not only at input time,
    /// because the purge flag can be toggled after the day count was cleared.
    pub fn validate(&self, roles: &[Role]) -> Result<ApplicationProfile, DraftIssues> {
        let mut issues = DraftIssues::default();

        if self.app_name.trim().is_empty() {
            issues.push("app_name", "App Name is required");
        }

        if self.delete_inactive_users && self.retention_days.is_none() {
            issues.push(
                "retention_days",
                "Retention days are required when deleting inactive users.",
            );
        }

        if self.retention_days == Some(0) {
            issues.push("retention_days", "Retention days must be a positive number");
        }

        if roles.is_empty() {
            issues.push("roles", "At least one role is required");
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        let description =
            (!self.app_description.trim().is_empty()).then(|| self.app_description.clone());

        ApplicationProfile::new(
            self.app_name.clone(),
            description,
            self.delete_inactive_users,
            self.retention_days,
            self.business_owner.clone(),
            self.application_admins.clone(),
            roles.to_vec(),
        )
        .map_err(|error| {
            // Only role-code duplication can slip past the field checks above.
            let mut issues = DraftIssues::default();
            issues.push("roles", error.to_string());
            issues
        })
    }
}

/// In-progress role sub-form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDraft {
    /// Role code, the role's identity within the application.
    pub code: String,
    /// Role display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Eligible subject categories.
    pub access_types: Vec<AccessType>,
    /// Audiences the role is scoped to.
    pub secure_to: Vec<Audience>,
}

impl RoleDraft {
    /// Loads a draft from an existing role for edit mode.
    #[must_use]
    pub fn from_role(role: &Role) -> Self {
        Self {
            code: role.code().as_str().to_owned(),
            name: role.name().as_str().to_owned(),
            description: role.description().unwrap_or_default().to_owned(),
            access_types: role.access_types().to_vec(),
            secure_to: role.secure_to().to_vec(),
        }
    }

    /// Validates the draft into a role.
    pub fn validate(&self) -> Result<Role, DraftIssues> {
        let mut issues = DraftIssues::default();

        if self.code.trim().is_empty() {
            issues.push("code", "Role code is required");
        }
        if self.name.trim().is_empty() {
            issues.push("name", "Role name is required");
        }
        if self.access_types.is_empty() {
            issues.push("access_types", "At least one access type is required");
        }
        if self.secure_to.is_empty() {
            issues.push("secure_to", "At least one audience is required");
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        let description = (!self.description.trim().is_empty()).then(|| self.description.clone());

        role_from_checked_draft(self, description)
    }
}

fn role_from_checked_draft(
    draft: &RoleDraft,
    description: Option<String>,
) -> Result<Role, DraftIssues> {
    Role::new(
        draft.code.clone(),
        draft.name.clone(),
        description,
        draft.access_types.clone(),
        draft.secure_to.clone(),
    )
    .map_err(|error| {
        let mut issues = DraftIssues::default();
        issues.push("role", error.to_string());
        issues
    })
}
