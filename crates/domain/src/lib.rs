//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod application;
mod form;
mod request;
mod role;
mod user;

pub use application::{Application, ApplicationId, ApplicationProfile, PersonRef};
pub use form::{ApplicationDraft, DraftIssues, FieldIssue, RoleDraft};
pub use request::{AccessRequest, AccessRequestDraft, AccessRequestId, RoleRef};
pub use role::{AccessType, Audience, Role};
pub use user::{DirectoryUser, EmailAddress};
