//! Access request types for the request-access flow.

use chrono::{DateTime, Utc};
use entitle_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ApplicationId;

/// Unique identifier for a submitted access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessRequestId(Uuid);

impl AccessRequestId {
    /// Creates a new random request identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AccessRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccessRequestId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Lightweight reference to a role as picked from a role selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    /// Role code within the application.
    pub code: String,
    /// Role display name.
    pub name: String,
}

/// Form state for an access request before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRequestDraft {
    /// The role being requested.
    pub role: RoleRef,
    /// Business justification for the request.
    pub reason: String,
}

impl AccessRequestDraft {
    /// Validates the draft for the given application and requesting user.
    pub fn validate(
        &self,
        application_id: ApplicationId,
        requested_for: impl Into<String>,
    ) -> AppResult<AccessRequest> {
        if self.role.code.trim().is_empty() {
            return Err(AppError::Validation("Role is required".to_owned()));
        }
        if self.reason.trim().is_empty() {
            return Err(AppError::Validation("Reason is required".to_owned()));
        }

        Ok(AccessRequest {
            id: AccessRequestId::new(),
            application_id,
            role_code: NonEmptyString::new(self.role.code.clone())?,
            role_name: self.role.name.clone(),
            reason: NonEmptyString::new(self.reason.clone())?,
            requested_for: NonEmptyString::new(requested_for)?,
            requested_at: Utc::now(),
        })
    }
}

/// A validated, submitted request for a role on an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    id: AccessRequestId,
    application_id: ApplicationId,
    role_code: NonEmptyString,
    role_name: String,
    reason: NonEmptyString,
    requested_for: NonEmptyString,
    requested_at: DateTime<Utc>,
}

impl AccessRequest {
    /// Returns the request identifier.
    #[must_use]
    pub fn id(&self) -> AccessRequestId {
        self.id
    }

    /// Returns the application the request targets.
    #[must_use]
    pub fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    /// Returns the requested role code.
    #[must_use]
    pub fn role_code(&self) -> &NonEmptyString {
        &self.role_code
    }

    /// Returns the requested role display name.
    #[must_use]
    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    /// Returns the business justification.
    #[must_use]
    pub fn reason(&self) -> &NonEmptyString {
        &self.reason
    }

    /// Returns the user the access is requested for.
    #[must_use]
    pub fn requested_for(&self) -> &NonEmptyString {
        &self.requested_for
    }

    /// Returns when the request was submitted.
    #[must_use]
    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessRequestDraft, RoleRef};
    use crate::application::ApplicationId;

    fn app_id() -> ApplicationId {
        match ApplicationId::new("APP001") {
            Ok(id) => id,
            Err(error) => panic!("fixture id should be valid: {error}"),
        }
    }

    #[test]
    fn request_requires_a_role() {
        let draft = AccessRequestDraft {
            role: RoleRef::default(),
            reason: "Need to track hours".to_owned(),
        };
        assert!(draft.validate(app_id(), "1").is_err());
    }

    #[test]
    fn request_requires_a_reason() {
        let draft = AccessRequestDraft {
            role: RoleRef {
                code: "USER".to_owned(),
                name: "Standard User".to_owned(),
            },
            reason: "  ".to_owned(),
        };
        assert!(draft.validate(app_id(), "1").is_err());
    }

    #[test]
    fn valid_request_captures_role_and_requester() {
        let draft = AccessRequestDraft {
            role: RoleRef {
                code: "USER".to_owned(),
                name: "Standard User".to_owned(),
            },
            reason: "Need to track hours".to_owned(),
        };
        let request = match draft.validate(app_id(), "1") {
            Ok(request) => request,
            Err(error) => panic!("draft should validate: {error}"),
        };
        assert_eq!(request.role_code().as_str(), "USER");
        assert_eq!(request.requested_for().as_str(), "1");
        assert_eq!(request.application_id().as_str(), "APP001");
    }
}
