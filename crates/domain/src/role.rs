use entitle_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Subject category eligible for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// External supplier personnel.
    Supplier,
    /// Internal employees.
    Employee,
    /// Contingent workers and contractors.
    Contingent,
}

impl AccessType {
    /// Returns the stable tag name used in payloads and messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Employee => "Employee",
            Self::Contingent => "Contingent",
        }
    }
}

/// Audience a role is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    /// Visible to internal employees.
    Employee,
    /// Visible to supplier personnel.
    Supplier,
}

impl Audience {
    /// Returns the stable tag name used in payloads and messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Supplier => "Supplier",
        }
    }
}

/// A named access profile within an application.
///
/// `code` is the role's identity inside its owning application; uniqueness
/// across the application's role collection is enforced by the editing
/// workflow and re-checked by [`crate::ApplicationProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    code: NonEmptyString,
    name: NonEmptyString,
    description: Option<String>,
    access_types: Vec<AccessType>,
    secure_to: Vec<Audience>,
}

impl Role {
    /// Creates a validated role.
    ///
    /// Tag lists are deduplicated preserving first-seen order; both must end
    /// up non-empty.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        access_types: Vec<AccessType>,
        secure_to: Vec<Audience>,
    ) -> AppResult<Self> {
        let access_types = dedup_preserving_order(access_types);
        if access_types.is_empty() {
            return Err(AppError::Validation(
                "at least one access type is required".to_owned(),
            ));
        }

        let secure_to = dedup_preserving_order(secure_to);
        if secure_to.is_empty() {
            return Err(AppError::Validation(
                "at least one secure-to audience is required".to_owned(),
            ));
        }

        let description = description.and_then(|value| {
            let trimmed = value.trim().to_owned();
            (!trimmed.is_empty()).then_some(trimmed)
        });

        Ok(Self {
            code: NonEmptyString::new(code)?,
            name: NonEmptyString::new(name)?,
            description,
            access_types,
            secure_to,
        })
    }

    /// Returns the role code, the role's identity within its application.
    #[must_use]
    pub fn code(&self) -> &NonEmptyString {
        &self.code
    }

    /// Returns the role display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns an optional role description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the subject categories eligible for this role.
    #[must_use]
    pub fn access_types(&self) -> &[AccessType] {
        &self.access_types
    }

    /// Returns the audiences this role is scoped to.
    #[must_use]
    pub fn secure_to(&self) -> &[Audience] {
        &self.secure_to
    }
}

fn dedup_preserving_order<T: Copy + PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut deduped: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !deduped.contains(&value) {
            deduped.push(value);
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::{AccessType, Audience, Role};

    #[test]
    fn role_requires_non_empty_code_and_name() {
        let role = Role::new(
            "",
            "Administrator",
            None,
            vec![AccessType::Employee],
            vec![Audience::Employee],
        );
        assert!(role.is_err());

        let role = Role::new(
            "ADMIN",
            " ",
            None,
            vec![AccessType::Employee],
            vec![Audience::Employee],
        );
        assert!(role.is_err());
    }

    #[test]
    fn role_requires_at_least_one_tag_of_each_kind() {
        let role = Role::new("ADMIN", "Administrator", None, Vec::new(), vec![
            Audience::Employee,
        ]);
        assert!(role.is_err());

        let role = Role::new(
            "ADMIN",
            "Administrator",
            None,
            vec![AccessType::Employee],
            Vec::new(),
        );
        assert!(role.is_err());
    }

    #[test]
    fn role_deduplicates_tags_preserving_order() {
        let role = Role::new(
            "USER",
            "Standard User",
            None,
            vec![
                AccessType::Employee,
                AccessType::Contingent,
                AccessType::Employee,
            ],
            vec![Audience::Employee, Audience::Employee],
        );
        let role = match role {
            Ok(role) => role,
            Err(error) => panic!("role should be valid: {error}"),
        };
        assert_eq!(role.access_types(), &[
            AccessType::Employee,
            AccessType::Contingent
        ]);
        assert_eq!(role.secure_to(), &[Audience::Employee]);
    }

    #[test]
    fn role_blanks_out_whitespace_description() {
        let role = Role::new(
            "VIEW",
            "Viewer",
            Some("   ".to_owned()),
            vec![AccessType::Employee],
            vec![Audience::Employee],
        );
        assert!(matches!(role, Ok(role) if role.description().is_none()));
    }

    #[test]
    fn access_tags_serialize_as_their_wire_names() {
        let serialized = serde_json::to_string(&AccessType::Contingent);
        assert!(matches!(serialized.as_deref(), Ok("\"Contingent\"")));
    }
}
