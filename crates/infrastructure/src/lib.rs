//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_application_directory;
mod in_memory_access_request_store;
mod in_memory_application_directory;
mod in_memory_user_directory;
mod tracing_notifier;

pub use http_application_directory::HttpApplicationDirectory;
pub use in_memory_access_request_store::InMemoryAccessRequestStore;
pub use in_memory_application_directory::InMemoryApplicationDirectory;
pub use in_memory_user_directory::InMemoryUserDirectory;
pub use tracing_notifier::TracingNotifier;
