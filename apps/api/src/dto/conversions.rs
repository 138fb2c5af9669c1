use entitle_core::AppResult;
use entitle_domain::{
    AccessRequest, Application, ApplicationProfile, DirectoryUser, PersonRef, Role,
};

use super::types::{
    AccessRequestResponse, ApplicationResponse, PersonRefDto, RoleDto, SaveApplicationRequest,
    UserResponse,
};

impl From<&PersonRef> for PersonRefDto {
    fn from(value: &PersonRef) -> Self {
        Self {
            id: value.id.clone(),
            label: value.label.clone(),
        }
    }
}

impl From<PersonRefDto> for PersonRef {
    fn from(value: PersonRefDto) -> Self {
        Self {
            id: value.id,
            label: value.label,
        }
    }
}

impl From<&Role> for RoleDto {
    fn from(value: &Role) -> Self {
        Self {
            code: value.code().as_str().to_owned(),
            name: value.name().as_str().to_owned(),
            description: value.description().map(ToOwned::to_owned),
            access_type: value.access_types().to_vec(),
            secure_to: value.secure_to().to_vec(),
        }
    }
}

impl RoleDto {
    fn into_domain(self) -> AppResult<Role> {
        Role::new(
            self.code,
            self.name,
            self.description,
            self.access_type,
            self.secure_to,
        )
    }
}

impl SaveApplicationRequest {
    /// Validates the payload into an application profile.
    pub fn into_profile(self) -> AppResult<ApplicationProfile> {
        let roles: AppResult<Vec<Role>> = self
            .roles
            .into_iter()
            .map(RoleDto::into_domain)
            .collect();

        ApplicationProfile::new(
            self.app_name,
            self.app_description,
            self.delete_inactive_users,
            self.retention_days,
            self.business_owner.map(PersonRef::from),
            self.application_admins
                .into_iter()
                .map(PersonRef::from)
                .collect(),
            roles?,
        )
    }
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        let (id, profile) = value.into_parts();
        Self {
            app_id: id.as_str().to_owned(),
            app_name: profile.name().as_str().to_owned(),
            app_description: profile.description().map(ToOwned::to_owned),
            delete_inactive_users: profile.delete_inactive_users(),
            retention_days: profile.retention_days(),
            business_owner: profile.business_owner().map(PersonRefDto::from),
            application_admins: profile
                .application_admins()
                .iter()
                .map(PersonRefDto::from)
                .collect(),
            roles: profile.roles().iter().map(RoleDto::from).collect(),
        }
    }
}

impl From<DirectoryUser> for UserResponse {
    fn from(value: DirectoryUser) -> Self {
        Self {
            id: value.id().as_str().to_owned(),
            name: value.name().as_str().to_owned(),
            email: value.email().as_str().to_owned(),
            roles: value.roles().to_vec(),
            last_access: value.last_access(),
            added_by: value.added_by().as_str().to_owned(),
            added_at: value.added_at(),
        }
    }
}

impl From<AccessRequest> for AccessRequestResponse {
    fn from(value: AccessRequest) -> Self {
        Self {
            id: value.id().to_string(),
            app_id: value.application_id().as_str().to_owned(),
            role_code: value.role_code().as_str().to_owned(),
            role_name: value.role_name().to_owned(),
            reason: value.reason().as_str().to_owned(),
            requested_for: value.requested_for().as_str().to_owned(),
            requested_at: value.requested_at(),
        }
    }
}
