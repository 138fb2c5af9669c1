use chrono::{DateTime, Utc};
use entitle_domain::{AccessType, Audience};
use serde::{Deserialize, Serialize};

/// Liveness probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed "ok" marker.
    pub status: &'static str,
}

/// Reference to a person as shown in directory pickers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRefDto {
    /// Directory identifier.
    #[serde(default)]
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
}

/// Wire representation of a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    /// Role code, unique within the application.
    pub code: String,
    /// Role display name.
    pub name: String,
    /// Optional role description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Eligible subject categories.
    pub access_type: Vec<AccessType>,
    /// Audiences the role is scoped to.
    pub secure_to: Vec<Audience>,
}

/// Incoming payload for application create and update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveApplicationRequest {
    /// Application display name.
    pub app_name: String,
    /// Optional description.
    #[serde(default)]
    pub app_description: Option<String>,
    /// Whether inactive users are purged.
    #[serde(default)]
    pub delete_inactive_users: bool,
    /// Inactivity retention window in days.
    #[serde(default)]
    pub retention_days: Option<u32>,
    /// Business owner reference.
    #[serde(default)]
    pub business_owner: Option<PersonRefDto>,
    /// Additional administrators.
    #[serde(default)]
    pub application_admins: Vec<PersonRefDto>,
    /// Role collection in display order.
    pub roles: Vec<RoleDto>,
}

/// API representation of a stored application.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    /// Directory-assigned identifier.
    pub app_id: String,
    /// Application display name.
    pub app_name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_description: Option<String>,
    /// Whether inactive users are purged.
    pub delete_inactive_users: bool,
    /// Inactivity retention window in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,
    /// Business owner reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_owner: Option<PersonRefDto>,
    /// Additional administrators.
    pub application_admins: Vec<PersonRefDto>,
    /// Role collection in display order.
    pub roles: Vec<RoleDto>,
}

/// Receipt returned by application deletion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApplicationResponse {
    /// Whether the deletion was applied.
    pub success: bool,
    /// Identifier of the deleted application.
    pub app_id: String,
}

/// API representation of a directory user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Directory identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role names currently held.
    pub roles: Vec<String>,
    /// Last access to any governed application.
    pub last_access: DateTime<Utc>,
    /// Who added the user.
    pub added_by: String,
    /// When the user was added.
    pub added_at: DateTime<Utc>,
}

/// Incoming payload for an access request submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAccessRequestRequest {
    /// Target application identifier.
    pub app_id: String,
    /// Directory id of the user access is requested for.
    pub requested_for: String,
    /// Requested role code.
    pub role_code: String,
    /// Requested role display name.
    #[serde(default)]
    pub role_name: String,
    /// Business justification.
    pub reason: String,
}

/// API representation of a submitted access request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequestResponse {
    /// Request identifier.
    pub id: String,
    /// Target application identifier.
    pub app_id: String,
    /// Requested role code.
    pub role_code: String,
    /// Requested role display name.
    pub role_name: String,
    /// Business justification.
    pub reason: String,
    /// Directory id of the user access is requested for.
    pub requested_for: String,
    /// Submission timestamp.
    pub requested_at: DateTime<Utc>,
}
