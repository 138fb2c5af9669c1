//! Wire representations for the directory API.

mod conversions;
mod types;

pub use types::{
    AccessRequestResponse, ApplicationResponse, DeleteApplicationResponse, HealthResponse,
    SaveApplicationRequest, SubmitAccessRequestRequest, UserResponse,
};
