use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use entitle_application::{ApplicationDirectory, DeleteReceipt};
use entitle_core::{AppError, AppResult};
use entitle_domain::{Application, ApplicationId, ApplicationProfile};
use tokio::sync::RwLock;

/// In-memory application directory implementation.
///
/// Stands in for the remote directory service: assigns sequential `APPnnn`
/// identifiers, rejects name collisions, and optionally simulates network
/// latency on every operation.
#[derive(Debug, Default)]
pub struct InMemoryApplicationDirectory {
    applications: RwLock<HashMap<String, Application>>,
    next_id: AtomicU64,
    latency: Duration,
}

impl InMemoryApplicationDirectory {
    /// Creates an empty directory without simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directory whose every operation sleeps for the given
    /// duration before answering.
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    /// Seeds the directory with existing applications.
    ///
    /// The id sequence continues past the highest seeded `APPnnn` suffix, so
    /// created entries never collide with seed data.
    pub async fn seed(&self, applications: Vec<Application>) {
        let mut stored = self.applications.write().await;
        for application in applications {
            let suffix = application
                .id()
                .as_str()
                .strip_prefix("APP")
                .and_then(|digits| digits.parse::<u64>().ok())
                .unwrap_or(0);
            self.next_id.fetch_max(suffix, Ordering::AcqRel);
            stored.insert(application.id().as_str().to_owned(), application);
        }
    }

    async fn simulate_network_delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ApplicationDirectory for InMemoryApplicationDirectory {
    async fn list_applications(&self) -> AppResult<Vec<Application>> {
        self.simulate_network_delay().await;

        let applications = self.applications.read().await;
        let mut values: Vec<Application> = applications.values().cloned().collect();
        values.sort_by(|left, right| left.id().as_str().cmp(right.id().as_str()));
        Ok(values)
    }

    async fn find_application(&self, id: &ApplicationId) -> AppResult<Application> {
        self.simulate_network_delay().await;

        self.applications
            .read()
            .await
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("application '{id}'")))
    }

    async fn create_application(&self, profile: ApplicationProfile) -> AppResult<Application> {
        self.simulate_network_delay().await;

        let mut applications = self.applications.write().await;
        let collision = applications.values().any(|existing| {
            existing
                .profile()
                .name()
                .as_str()
                .eq_ignore_ascii_case(profile.name().as_str())
        });
        if collision {
            return Err(AppError::Conflict(format!(
                "application '{}' already exists",
                profile.name().as_str()
            )));
        }

        let sequence = self.next_id.fetch_add(1, Ordering::AcqRel) + 1;
        let id = ApplicationId::new(format!("APP{sequence:03}"))?;
        let application = Application::new(id, profile);
        applications.insert(application.id().as_str().to_owned(), application.clone());
        Ok(application)
    }

    async fn update_application(&self, application: Application) -> AppResult<Application> {
        self.simulate_network_delay().await;

        let mut applications = self.applications.write().await;
        if !applications.contains_key(application.id().as_str()) {
            return Err(AppError::NotFound(format!(
                "application '{}'",
                application.id()
            )));
        }

        applications.insert(application.id().as_str().to_owned(), application.clone());
        Ok(application)
    }

    async fn delete_application(&self, id: &ApplicationId) -> AppResult<DeleteReceipt> {
        self.simulate_network_delay().await;

        let mut applications = self.applications.write().await;
        if applications.remove(id.as_str()).is_none() {
            return Err(AppError::NotFound(format!("application '{id}'")));
        }

        Ok(DeleteReceipt { id: id.clone() })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use entitle_application::ApplicationDirectory;
    use entitle_core::AppError;
    use entitle_domain::{
        AccessType, Application, ApplicationId, ApplicationProfile, Audience, Role,
    };

    use super::InMemoryApplicationDirectory;

    fn profile(name: &str) -> ApplicationProfile {
        let role = match Role::new(
            "ADMIN",
            "Administrator",
            None,
            vec![AccessType::Employee],
            vec![Audience::Employee],
        ) {
            Ok(role) => role,
            Err(error) => panic!("fixture role should be valid: {error}"),
        };
        match ApplicationProfile::new(name, None, false, None, None, Vec::new(), vec![role]) {
            Ok(profile) => profile,
            Err(error) => panic!("fixture profile should be valid: {error}"),
        }
    }

    fn application(id: &str, name: &str) -> Application {
        let id = match ApplicationId::new(id) {
            Ok(id) => id,
            Err(error) => panic!("fixture id should be valid: {error}"),
        };
        Application::new(id, profile(name))
    }

    #[tokio::test]
    async fn create_assigns_sequential_identifiers() {
        let directory = InMemoryApplicationDirectory::new();

        let first = directory.create_application(profile("Time Tracker")).await;
        assert!(matches!(&first, Ok(app) if app.id().as_str() == "APP001"));

        let second = directory
            .create_application(profile("Inventory Manager"))
            .await;
        assert!(matches!(&second, Ok(app) if app.id().as_str() == "APP002"));
    }

    #[tokio::test]
    async fn create_continues_the_sequence_past_seeded_entries() {
        let directory = InMemoryApplicationDirectory::new();
        directory
            .seed(vec![
                application("APP001", "Time Tracker"),
                application("APP003", "Customer Portal"),
            ])
            .await;

        let created = directory.create_application(profile("Badge Printer")).await;
        assert!(matches!(&created, Ok(app) if app.id().as_str() == "APP004"));
    }

    #[tokio::test]
    async fn create_rejects_name_collisions_case_insensitively() {
        let directory = InMemoryApplicationDirectory::new();
        directory
            .seed(vec![application("APP001", "Time Tracker")])
            .await;

        let collision = directory.create_application(profile("time tracker")).await;
        assert!(matches!(collision, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn list_orders_by_identifier() {
        let directory = InMemoryApplicationDirectory::new();
        directory
            .seed(vec![
                application("APP002", "Inventory Manager"),
                application("APP001", "Time Tracker"),
            ])
            .await;

        let listed = match directory.list_applications().await {
            Ok(listed) => listed,
            Err(error) => panic!("list should succeed: {error}"),
        };
        let ids: Vec<&str> = listed.iter().map(|app| app.id().as_str()).collect();
        assert_eq!(ids, vec!["APP001", "APP002"]);
    }

    #[tokio::test]
    async fn update_and_delete_fail_for_unknown_ids() {
        let directory = InMemoryApplicationDirectory::new();

        let updated = directory
            .update_application(application("APP999", "Ghost"))
            .await;
        assert!(matches!(updated, Err(AppError::NotFound(_))));

        let ghost = match ApplicationId::new("APP999") {
            Ok(id) => id,
            Err(error) => panic!("fixture id should be valid: {error}"),
        };
        let deleted = directory.delete_application(&ghost).await;
        assert!(matches!(deleted, Err(AppError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn configured_latency_delays_every_answer() {
        let directory = InMemoryApplicationDirectory::with_latency(Duration::from_millis(500));

        let started = tokio::time::Instant::now();
        let listed = directory.list_applications().await;
        assert!(listed.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
