use std::time::Duration;

use async_trait::async_trait;
use entitle_application::UserDirectory;
use entitle_core::AppResult;
use entitle_domain::DirectoryUser;
use tokio::sync::RwLock;

/// In-memory corporate user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<DirectoryUser>>,
    latency: Duration,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory without simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directory whose answers are delayed by the given
    /// duration.
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    /// Replaces the directory contents.
    pub async fn seed(&self, users: Vec<DirectoryUser>) {
        *self.users.write().await = users;
    }

    async fn simulate_network_delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list_users(&self) -> AppResult<Vec<DirectoryUser>> {
        self.simulate_network_delay().await;
        Ok(self.users.read().await.clone())
    }

    async fn find_user(&self, id: &str) -> AppResult<Option<DirectoryUser>> {
        self.simulate_network_delay().await;
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id().as_str() == id)
            .cloned())
    }
}
