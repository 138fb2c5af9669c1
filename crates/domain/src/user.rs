//! Directory user types for access search and request flows.

use chrono::{DateTime, Utc};
use entitle_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one
    /// `@`, local part and domain are non-empty, domain contains at least
    /// one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let parts: Vec<&str> = trimmed.splitn(2, '@').collect();
        if parts.len() != 2 {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// A user record in the corporate directory, as surfaced by access search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    id: NonEmptyString,
    name: NonEmptyString,
    email: EmailAddress,
    roles: Vec<String>,
    last_access: DateTime<Utc>,
    added_by: NonEmptyString,
    added_at: DateTime<Utc>,
}

impl DirectoryUser {
    /// Creates a validated directory user record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<String>,
        last_access: DateTime<Utc>,
        added_by: impl Into<String>,
        added_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        if roles.is_empty() {
            return Err(AppError::Validation(
                "at least one role is required".to_owned(),
            ));
        }

        Ok(Self {
            id: NonEmptyString::new(id)?,
            name: NonEmptyString::new(name)?,
            email: EmailAddress::new(email)?,
            roles,
            last_access,
            added_by: NonEmptyString::new(added_by)?,
            added_at,
        })
    }

    /// Returns the directory identifier.
    #[must_use]
    pub fn id(&self) -> &NonEmptyString {
        &self.id
    }

    /// Returns the user display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the user email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the role names currently held by the user.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Returns when the user last accessed any governed application.
    #[must_use]
    pub fn last_access(&self) -> DateTime<Utc> {
        self.last_access
    }

    /// Returns who added the user to the directory.
    #[must_use]
    pub fn added_by(&self) -> &NonEmptyString {
        &self.added_by
    }

    /// Returns when the user was added.
    #[must_use]
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Returns whether the user matches a search term over name or email,
    /// case-insensitively.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let lowered = term.to_lowercase();
        self.name.as_str().to_lowercase().contains(&lowered)
            || self.email.as_str().contains(&lowered)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{DirectoryUser, EmailAddress};

    #[test]
    fn email_requires_mailbox_and_domain() {
        assert!(EmailAddress::new("john.doe").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("john.doe@example").is_err());
        assert!(EmailAddress::new("john.doe@example.com").is_ok());
    }

    #[test]
    fn email_normalizes_case_and_whitespace() {
        let email = EmailAddress::new("  John.Doe@Example.COM ");
        assert!(matches!(email, Ok(email) if email.as_str() == "john.doe@example.com"));
    }

    #[test]
    fn directory_user_requires_at_least_one_role() {
        let user = DirectoryUser::new(
            "1",
            "John Doe",
            "john.doe@example.com",
            Vec::new(),
            Utc::now(),
            "AdminUser",
            Utc::now(),
        );
        assert!(user.is_err());
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let user = DirectoryUser::new(
            "2",
            "Jane Smith",
            "jane.smith@example.com",
            vec!["User".to_owned()],
            Utc::now(),
            "AdminUser",
            Utc::now(),
        );
        let user = match user {
            Ok(user) => user,
            Err(error) => panic!("fixture user should be valid: {error}"),
        };
        assert!(user.matches_search("JANE"));
        assert!(user.matches_search("smith@example"));
        assert!(!user.matches_search("john"));
    }
}
