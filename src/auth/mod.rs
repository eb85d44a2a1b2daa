pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use repo_types::User;
pub use services::{log_in, sign_up, AuthError};
