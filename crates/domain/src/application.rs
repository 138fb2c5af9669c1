use entitle_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Identifier assigned to an application by the directory on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(NonEmptyString);

impl ApplicationId {
    /// Creates a validated application identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.as_str())
    }
}

/// Reference to a person in the corporate directory, as picked from an
/// autocomplete field. Either part may be blank on historic records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    /// Directory identifier of the person.
    pub id: String,
    /// Display label shown in pickers.
    pub label: String,
}

/// The identity-free content of an application: everything the editor can
/// change, validated as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationProfile {
    name: NonEmptyString,
    description: Option<String>,
    delete_inactive_users: bool,
    retention_days: Option<u32>,
    business_owner: Option<PersonRef>,
    application_admins: Vec<PersonRef>,
    roles: Vec<Role>,
}

impl ApplicationProfile {
    /// Creates a validated application profile.
    ///
    /// Enforces the cross-field retention invariant (`retention_days`
    /// required and positive whenever `delete_inactive_users` is set), a
    /// non-empty role collection, and role-code uniqueness.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        delete_inactive_users: bool,
        retention_days: Option<u32>,
        business_owner: Option<PersonRef>,
        application_admins: Vec<PersonRef>,
        roles: Vec<Role>,
    ) -> AppResult<Self> {
        if delete_inactive_users && retention_days.is_none() {
            return Err(AppError::Validation(
                "retention days are required when deleting inactive users".to_owned(),
            ));
        }

        if retention_days == Some(0) {
            return Err(AppError::Validation(
                "retention days must be a positive number".to_owned(),
            ));
        }

        if roles.is_empty() {
            return Err(AppError::Validation(
                "at least one role is required".to_owned(),
            ));
        }

        for (index, role) in roles.iter().enumerate() {
            let duplicated = roles[..index]
                .iter()
                .any(|earlier| earlier.code() == role.code());
            if duplicated {
                return Err(AppError::Conflict(format!(
                    "role code '{}' appears more than once",
                    role.code().as_str()
                )));
            }
        }

        let description = description.and_then(|value| {
            let trimmed = value.trim().to_owned();
            (!trimmed.is_empty()).then_some(trimmed)
        });

        Ok(Self {
            name: NonEmptyString::new(name)?,
            description,
            delete_inactive_users,
            retention_days,
            business_owner,
            application_admins,
            roles,
        })
    }

    /// Returns the application display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns an optional application description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether inactive users are purged from this application.
    #[must_use]
    pub fn delete_inactive_users(&self) -> bool {
        self.delete_inactive_users
    }

    /// Returns the inactivity retention window in days, when configured.
    #[must_use]
    pub fn retention_days(&self) -> Option<u32> {
        self.retention_days
    }

    /// Returns the business owner reference, when recorded.
    #[must_use]
    pub fn business_owner(&self) -> Option<&PersonRef> {
        self.business_owner.as_ref()
    }

    /// Returns the application administrator references.
    #[must_use]
    pub fn application_admins(&self) -> &[PersonRef] {
        &self.application_admins
    }

    /// Returns the role collection in display order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

/// A persisted application: directory-assigned identity plus profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    profile: ApplicationProfile,
}

impl Application {
    /// Pairs a directory-assigned identifier with an application profile.
    #[must_use]
    pub fn new(id: ApplicationId, profile: ApplicationProfile) -> Self {
        Self { id, profile }
    }

    /// Returns the directory-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    /// Returns the application profile.
    #[must_use]
    pub fn profile(&self) -> &ApplicationProfile {
        &self.profile
    }

    /// Splits the application into its identifier and profile.
    #[must_use]
    pub fn into_parts(self) -> (ApplicationId, ApplicationProfile) {
        (self.id, self.profile)
    }
}
