use async_trait::async_trait;

use entitle_core::AppResult;
use entitle_domain::{AccessRequest, Application, ApplicationId, ApplicationProfile, DirectoryUser};

/// Receipt returned by a successful application deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReceipt {
    /// Identifier of the deleted application.
    pub id: ApplicationId,
}

/// Collaborator contract for the application directory.
///
/// The editing workflow treats this as a remote request/response boundary:
/// every call may fail, and local state is only mutated after the directory
/// confirms.
#[async_trait]
pub trait ApplicationDirectory: Send + Sync {
    /// Returns the full application list.
    async fn list_applications(&self) -> AppResult<Vec<Application>>;

    /// Returns one application by id, or a not-found error.
    async fn find_application(&self, id: &ApplicationId) -> AppResult<Application>;

    /// Creates an application, assigning its identifier.
    ///
    /// Fails with a conflict when the application name collides with an
    /// existing entry.
    async fn create_application(&self, profile: ApplicationProfile) -> AppResult<Application>;

    /// Replaces a stored application, or fails with not-found for an unknown id.
    async fn update_application(&self, application: Application) -> AppResult<Application>;

    /// Deletes an application, or fails with not-found for an unknown id.
    async fn delete_application(&self, id: &ApplicationId) -> AppResult<DeleteReceipt>;
}

/// Read-only port over the corporate user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns all directory users.
    async fn list_users(&self) -> AppResult<Vec<DirectoryUser>>;

    /// Returns one user by directory id.
    async fn find_user(&self, id: &str) -> AppResult<Option<DirectoryUser>>;
}

/// Sink for submitted access requests.
#[async_trait]
pub trait AccessRequestStore: Send + Sync {
    /// Records a submitted access request.
    async fn append_request(&self, request: AccessRequest) -> AppResult<()>;

    /// Returns all recorded requests, oldest first.
    async fn list_requests(&self) -> AppResult<Vec<AccessRequest>>;
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    /// Operation completed.
    Success,
    /// Operation failed but the session stays interactive.
    Error,
}

/// A user-facing notice emitted by a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notice severity.
    pub severity: NoticeSeverity,
    /// Message shown to the user.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message: message.into(),
        }
    }
}

/// Outlet for user-facing notices.
///
/// Delivery is fire-and-forget; a notice can never fail a workflow.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a notice to the user.
    async fn notify(&self, notice: Notice);
}
