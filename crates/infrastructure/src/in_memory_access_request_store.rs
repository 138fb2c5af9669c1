use async_trait::async_trait;
use entitle_application::AccessRequestStore;
use entitle_core::AppResult;
use entitle_domain::AccessRequest;
use tokio::sync::RwLock;

/// In-memory store for submitted access requests.
#[derive(Debug, Default)]
pub struct InMemoryAccessRequestStore {
    requests: RwLock<Vec<AccessRequest>>,
}

impl InMemoryAccessRequestStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessRequestStore for InMemoryAccessRequestStore {
    async fn append_request(&self, request: AccessRequest) -> AppResult<()> {
        self.requests.write().await.push(request);
        Ok(())
    }

    async fn list_requests(&self) -> AppResult<Vec<AccessRequest>> {
        Ok(self.requests.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use entitle_application::AccessRequestStore;
    use entitle_domain::{AccessRequestDraft, ApplicationId, RoleRef};

    use super::InMemoryAccessRequestStore;

    #[tokio::test]
    async fn requests_are_listed_in_submission_order() {
        let store = InMemoryAccessRequestStore::new();
        let app_id = match ApplicationId::new("APP001") {
            Ok(id) => id,
            Err(error) => panic!("fixture id should be valid: {error}"),
        };

        for code in ["USER", "ADMIN"] {
            let draft = AccessRequestDraft {
                role: RoleRef {
                    code: code.to_owned(),
                    name: code.to_owned(),
                },
                reason: "Need access".to_owned(),
            };
            let request = match draft.validate(app_id.clone(), "1") {
                Ok(request) => request,
                Err(error) => panic!("draft should validate: {error}"),
            };
            let appended = store.append_request(request).await;
            assert!(appended.is_ok());
        }

        let listed = match store.list_requests().await {
            Ok(listed) => listed,
            Err(error) => panic!("list should succeed: {error}"),
        };
        let codes: Vec<&str> = listed
            .iter()
            .map(|request| request.role_code().as_str())
            .collect();
        assert_eq!(codes, vec!["USER", "ADMIN"]);
    }
}
