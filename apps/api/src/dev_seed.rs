//! Demo data for local development.

use chrono::{DateTime, Utc};
use entitle_core::{AppError, AppResult};
use entitle_domain::{
    AccessType, Application, ApplicationId, ApplicationProfile, Audience, DirectoryUser, Role,
};
use entitle_infrastructure::{InMemoryApplicationDirectory, InMemoryUserDirectory};
use tracing::info;

pub async fn run(
    applications: &InMemoryApplicationDirectory,
    users: &InMemoryUserDirectory,
) -> AppResult<()> {
    let seeded_applications = demo_applications()?;
    let seeded_users = demo_users()?;

    info!(
        applications = seeded_applications.len(),
        users = seeded_users.len(),
        "seeding demo directory data"
    );

    applications.seed(seeded_applications).await;
    users.seed(seeded_users).await;

    Ok(())
}

fn demo_applications() -> AppResult<Vec<Application>> {
    Ok(vec![
        application(
            "APP001",
            ApplicationProfile::new(
                "Time Tracker",
                Some("Application for tracking employee work hours.".to_owned()),
                true,
                Some(90),
                None,
                Vec::new(),
                vec![
                    role(
                        "ADMIN",
                        "Administrator",
                        "Full access to all features.",
                        vec![AccessType::Employee],
                        vec![Audience::Employee],
                    )?,
                    role(
                        "USER",
                        "Standard User",
                        "Can track time and view reports.",
                        vec![AccessType::Employee, AccessType::Contingent],
                        vec![Audience::Employee],
                    )?,
                ],
            )?,
        )?,
        application(
            "APP002",
            ApplicationProfile::new(
                "Inventory Manager",
                Some("Manages warehouse inventory levels.".to_owned()),
                false,
                None,
                None,
                Vec::new(),
                vec![
                    role(
                        "IM_VIEW",
                        "Viewer",
                        "Read-only access to inventory.",
                        vec![AccessType::Employee],
                        vec![Audience::Employee],
                    )?,
                    role(
                        "IM_EDIT",
                        "Editor",
                        "Can modify inventory records.",
                        vec![AccessType::Employee],
                        vec![Audience::Employee],
                    )?,
                    role(
                        "SUPPLIER_ACCESS",
                        "Supplier Access",
                        "Limited access for suppliers.",
                        vec![AccessType::Supplier],
                        vec![Audience::Supplier],
                    )?,
                ],
            )?,
        )?,
        application(
            "APP003",
            ApplicationProfile::new(
                "Customer Portal",
                Some("Portal for customer interactions.".to_owned()),
                true,
                Some(180),
                None,
                Vec::new(),
                vec![
                    role(
                        "CUST_SUPPORT",
                        "Support Agent",
                        "Handles customer support tickets.",
                        vec![AccessType::Employee],
                        vec![Audience::Employee],
                    )?,
                    role(
                        "CUST_BASIC",
                        "Customer",
                        "Basic portal access for customers.",
                        vec![AccessType::Contingent],
                        vec![Audience::Employee],
                    )?,
                ],
            )?,
        )?,
    ])
}

fn demo_users() -> AppResult<Vec<DirectoryUser>> {
    Ok(vec![
        DirectoryUser::new(
            "EVALENCIA",
            "Elias Valencia",
            "elias.valencia@example.com",
            vec!["Admin".to_owned(), "User".to_owned()],
            timestamp("2024-06-01T10:00:00Z")?,
            "JDOE",
            timestamp("2024-01-15T09:00:00Z")?,
        )?,
        DirectoryUser::new(
            "JDOE",
            "John Doe",
            "john.doe@example.com",
            vec!["User".to_owned()],
            timestamp("2024-05-28T14:30:00Z")?,
            "EVALENCIA",
            timestamp("2024-02-10T11:30:00Z")?,
        )?,
        DirectoryUser::new(
            "ASMITH",
            "Alice Smith",
            "alice.smith@example.com",
            vec!["Business Owner".to_owned()],
            timestamp("2024-05-20T08:15:00Z")?,
            "JDOE",
            timestamp("2024-03-05T13:45:00Z")?,
        )?,
        DirectoryUser::new(
            "BWILLIAMS",
            "Bob Williams",
            "bob.williams@example.com",
            vec!["User".to_owned(), "Auditor".to_owned()],
            timestamp("2024-05-30T16:00:00Z")?,
            "EVALENCIA",
            timestamp("2024-04-01T10:20:00Z")?,
        )?,
        DirectoryUser::new(
            "CMARTINEZ",
            "Carla Martinez",
            "carla.martinez@example.com",
            vec!["User".to_owned()],
            timestamp("2024-05-25T12:00:00Z")?,
            "ASMITH",
            timestamp("2024-04-20T15:10:00Z")?,
        )?,
    ])
}

fn application(id: &str, profile: ApplicationProfile) -> AppResult<Application> {
    Ok(Application::new(ApplicationId::new(id)?, profile))
}

fn role(
    code: &str,
    name: &str,
    description: &str,
    access_types: Vec<AccessType>,
    secure_to: Vec<Audience>,
) -> AppResult<Role> {
    Role::new(
        code,
        name,
        Some(description.to_owned()),
        access_types,
        secure_to,
    )
}

fn timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|error| AppError::Internal(format!("invalid seed timestamp '{value}': {error}")))
}
