use std::sync::Arc;

use entitle_application::{AccessRequestService, ApplicationDirectory, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Directory of governed applications; the collaborator contract the
    /// editing workflow submits to.
    pub application_directory: Arc<dyn ApplicationDirectory>,
    /// Read side of the access search screens.
    pub user_service: UserService,
    /// Access request validation and recording.
    pub access_request_service: AccessRequestService,
}
