use std::sync::Arc;

use entitle_core::{AppError, AppResult};
use entitle_domain::DirectoryUser;

use crate::ports::UserDirectory;

/// Read side of the access search screens: list, look up, and search
/// directory users.
#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Returns all directory users.
    pub async fn list_users(&self) -> AppResult<Vec<DirectoryUser>> {
        self.directory.list_users().await
    }

    /// Returns one user by directory id.
    pub async fn find_user(&self, id: &str) -> AppResult<DirectoryUser> {
        self.directory
            .find_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{id}'")))
    }

    /// Searches users by name or email, case-insensitively.
    ///
    /// A blank or whitespace-only term returns the full list.
    pub async fn search_users(&self, term: &str) -> AppResult<Vec<DirectoryUser>> {
        let users = self.directory.list_users().await?;
        if term.trim().is_empty() {
            return Ok(users);
        }

        Ok(users
            .into_iter()
            .filter(|user| user.matches_search(term))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use entitle_core::{AppError, AppResult};
    use entitle_domain::DirectoryUser;

    use super::UserService;
    use crate::ports::UserDirectory;

    struct FakeUserDirectory {
        users: Vec<DirectoryUser>,
    }

    #[async_trait]
    impl UserDirectory for FakeUserDirectory {
        async fn list_users(&self) -> AppResult<Vec<DirectoryUser>> {
            Ok(self.users.clone())
        }

        async fn find_user(&self, id: &str) -> AppResult<Option<DirectoryUser>> {
            Ok(self
                .users
                .iter()
                .find(|user| user.id().as_str() == id)
                .cloned())
        }
    }

    fn user(id: &str, name: &str, email: &str) -> DirectoryUser {
        match DirectoryUser::new(
            id,
            name,
            email,
            vec!["User".to_owned()],
            Utc::now(),
            "AdminUser",
            Utc::now(),
        ) {
            Ok(user) => user,
            Err(error) => panic!("fixture user should be valid: {error}"),
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(FakeUserDirectory {
            users: vec![
                user("1", "John Doe", "john.doe@example.com"),
                user("2", "Jane Smith", "jane.smith@example.com"),
            ],
        }))
    }

    #[tokio::test]
    async fn blank_search_term_returns_everyone() {
        let found = service().search_users("   ").await;
        assert!(matches!(found, Ok(users) if users.len() == 2));
    }

    #[tokio::test]
    async fn search_filters_by_name_or_email() {
        let found = service().search_users("jane").await;
        let found = match found {
            Ok(users) => users,
            Err(error) => panic!("search should succeed: {error}"),
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id().as_str(), "2");
    }

    #[tokio::test]
    async fn unknown_user_lookup_is_not_found() {
        let missing = service().find_user("999").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
