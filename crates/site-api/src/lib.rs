pub mod client;
pub mod error;
pub mod models;
mod default;

pub use client::{ADMIN_PASSWORD_HEADER, DEFAULT_API_URL, SiteClient};
pub use default::{client_with_timeout, default_client};
pub use error::ApiError;
