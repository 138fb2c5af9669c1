use std::sync::Arc;

use entitle_domain::{Application, Role};
use tokio::sync::RwLock;

/// Shared holder of the application currently being edited and the full
/// known application list.
///
/// Values are read and replaced wholesale; no validation happens at this
/// layer. The container is cheap to clone and is injected into whatever
/// needs it instead of living as an ambient global.
#[derive(Clone, Default)]
pub struct ApplicationSelection {
    inner: Arc<RwLock<ApplicationSelectionState>>,
}

#[derive(Default)]
struct ApplicationSelectionState {
    selected: Option<Application>,
    applications: Vec<Application>,
}

impl ApplicationSelection {
    /// Creates an empty selection container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the application currently selected for editing, if any.
    pub async fn selected(&self) -> Option<Application> {
        self.inner.read().await.selected.clone()
    }

    /// Replaces the selected application wholesale.
    pub async fn set_selected(&self, application: Option<Application>) {
        self.inner.write().await.selected = application;
    }

    /// Returns the full known application list.
    pub async fn applications(&self) -> Vec<Application> {
        self.inner.read().await.applications.clone()
    }

    /// Replaces the full application list wholesale.
    pub async fn set_applications(&self, applications: Vec<Application>) {
        self.inner.write().await.applications = applications;
    }
}

/// Shared holder of the role currently being edited and the working role
/// list for the application under edit.
///
/// The working list is the single source of truth for the in-progress role
/// collection; nothing else keeps a parallel copy.
#[derive(Clone, Default)]
pub struct RoleSelection {
    inner: Arc<RwLock<RoleSelectionState>>,
}

#[derive(Default)]
struct RoleSelectionState {
    selected: Option<Role>,
    working: Vec<Role>,
}

impl RoleSelection {
    /// Creates an empty selection container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the role currently selected for editing, if any.
    pub async fn selected_role(&self) -> Option<Role> {
        self.inner.read().await.selected.clone()
    }

    /// Replaces the selected role wholesale.
    pub async fn set_selected_role(&self, role: Option<Role>) {
        self.inner.write().await.selected = role;
    }

    /// Returns the working role list in display order.
    pub async fn roles(&self) -> Vec<Role> {
        self.inner.read().await.working.clone()
    }

    /// Replaces the working role list wholesale.
    pub async fn set_roles(&self, roles: Vec<Role>) {
        self.inner.write().await.working = roles;
    }

    /// Applies a read-compute-write mutation to the working list under a
    /// single write guard, so concurrent handlers cannot interleave and lose
    /// updates.
    pub async fn update_roles<R>(&self, mutate: impl FnOnce(&mut Vec<Role>) -> R) -> R {
        let mut state = self.inner.write().await;
        mutate(&mut state.working)
    }
}
