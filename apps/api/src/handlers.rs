pub mod applications;
pub mod health;
pub mod requests;
pub mod users;
