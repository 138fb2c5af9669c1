//! Application services and ports.

#![forbid(unsafe_code)]

mod access_request_service;
mod editor;
mod ports;
mod selection;
mod user_service;

pub use access_request_service::AccessRequestService;
pub use editor::{ApplicationEditor, Confirmation};
pub use ports::{
    AccessRequestStore, ApplicationDirectory, DeleteReceipt, Notice, NoticeSeverity, Notifier,
    UserDirectory,
};
pub use selection::{ApplicationSelection, RoleSelection};
pub use user_service::UserService;
