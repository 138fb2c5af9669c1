use async_trait::async_trait;
use entitle_application::{ApplicationDirectory, DeleteReceipt};
use entitle_core::{AppError, AppResult};
use entitle_domain::{
    AccessType, Application, ApplicationId, ApplicationProfile, Audience, PersonRef, Role,
};
use serde::{Deserialize, Serialize};

/// HTTP client implementation of the application directory contract.
///
/// Speaks the camelCase JSON wire format of the Entitle API; used by
/// deployments where the editing workflow runs in a different process than
/// the directory.
pub struct HttpApplicationDirectory {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpApplicationDirectory {
    /// Creates a directory client against the given API base URL.
    #[must_use]
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http_client,
            base_url,
        }
    }

    fn applications_url(&self) -> String {
        format!("{}/api/applications", self.base_url)
    }

    fn application_url(&self, id: &ApplicationId) -> String {
        format!("{}/api/applications/{}", self.base_url, id.as_str())
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|error| {
                AppError::Internal(format!("directory response could not be decoded: {error}"))
            });
        }

        let message = response
            .json::<ErrorWire>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("directory answered with status {status}"));

        Err(match status.as_u16() {
            400 => AppError::Validation(message),
            404 => AppError::NotFound(message),
            409 => AppError::Conflict(message),
            _ => AppError::Internal(message),
        })
    }
}

fn transport_error(error: reqwest::Error) -> AppError {
    AppError::Internal(format!("directory request failed: {error}"))
}

#[async_trait]
impl ApplicationDirectory for HttpApplicationDirectory {
    async fn list_applications(&self) -> AppResult<Vec<Application>> {
        let response = self
            .http_client
            .get(self.applications_url())
            .send()
            .await
            .map_err(transport_error)?;

        let wires: Vec<ApplicationWire> = Self::decode(response).await?;
        wires.into_iter().map(ApplicationWire::into_domain).collect()
    }

    async fn find_application(&self, id: &ApplicationId) -> AppResult<Application> {
        let response = self
            .http_client
            .get(self.application_url(id))
            .send()
            .await
            .map_err(transport_error)?;

        Self::decode::<ApplicationWire>(response)
            .await?
            .into_domain()
    }

    async fn create_application(&self, profile: ApplicationProfile) -> AppResult<Application> {
        let response = self
            .http_client
            .post(self.applications_url())
            .json(&ProfileWire::from_profile(&profile))
            .send()
            .await
            .map_err(transport_error)?;

        Self::decode::<ApplicationWire>(response)
            .await?
            .into_domain()
    }

    async fn update_application(&self, application: Application) -> AppResult<Application> {
        let response = self
            .http_client
            .put(self.application_url(application.id()))
            .json(&ProfileWire::from_profile(application.profile()))
            .send()
            .await
            .map_err(transport_error)?;

        Self::decode::<ApplicationWire>(response)
            .await?
            .into_domain()
    }

    async fn delete_application(&self, id: &ApplicationId) -> AppResult<DeleteReceipt> {
        let response = self
            .http_client
            .delete(self.application_url(id))
            .send()
            .await
            .map_err(transport_error)?;

        let receipt: DeleteWire = Self::decode(response).await?;
        if !receipt.success {
            return Err(AppError::Internal(format!(
                "directory reported an unsuccessful delete for '{}'",
                receipt.app_id
            )));
        }

        Ok(DeleteReceipt {
            id: ApplicationId::new(receipt.app_id)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorWire {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteWire {
    success: bool,
    app_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersonRefWire {
    #[serde(default)]
    id: String,
    #[serde(default)]
    label: String,
}

impl PersonRefWire {
    fn from_domain(person: &PersonRef) -> Self {
        Self {
            id: person.id.clone(),
            label: person.label.clone(),
        }
    }

    fn into_domain(self) -> PersonRef {
        PersonRef {
            id: self.id,
            label: self.label,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleWire {
    code: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    access_type: Vec<AccessType>,
    secure_to: Vec<Audience>,
}

impl RoleWire {
    fn from_domain(role: &Role) -> Self {
        Self {
            code: role.code().as_str().to_owned(),
            name: role.name().as_str().to_owned(),
            description: role.description().map(ToOwned::to_owned),
            access_type: role.access_types().to_vec(),
            secure_to: role.secure_to().to_vec(),
        }
    }

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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileWire {
    app_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_description: Option<String>,
    delete_inactive_users: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    retention_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    business_owner: Option<PersonRefWire>,
    application_admins: Vec<PersonRefWire>,
    roles: Vec<RoleWire>,
}

impl ProfileWire {
    fn from_profile(profile: &ApplicationProfile) -> Self {
        Self {
            app_name: profile.name().as_str().to_owned(),
            app_description: profile.description().map(ToOwned::to_owned),
            delete_inactive_users: profile.delete_inactive_users(),
            retention_days: profile.retention_days(),
            business_owner: profile.business_owner().map(PersonRefWire::from_domain),
            application_admins: profile
                .application_admins()
                .iter()
                .map(PersonRefWire::from_domain)
                .collect(),
            roles: profile.roles().iter().map(RoleWire::from_domain).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationWire {
    app_id: String,
    app_name: String,
    #[serde(default)]
    app_description: Option<String>,
    delete_inactive_users: bool,
    #[serde(default)]
    retention_days: Option<u32>,
    #[serde(default)]
    business_owner: Option<PersonRefWire>,
    #[serde(default)]
    application_admins: Vec<PersonRefWire>,
    roles: Vec<RoleWire>,
}

impl ApplicationWire {
    fn into_domain(self) -> AppResult<Application> {
        let roles: AppResult<Vec<Role>> =
            self.roles.into_iter().map(RoleWire::into_domain).collect();
        let profile = ApplicationProfile::new(
            self.app_name,
            self.app_description,
            self.delete_inactive_users,
            self.retention_days,
            self.business_owner.map(PersonRefWire::into_domain),
            self.application_admins
                .into_iter()
                .map(PersonRefWire::into_domain)
                .collect(),
            roles?,
        )?;

        Ok(Application::new(ApplicationId::new(self.app_id)?, profile))
    }
}
