pub mod client;
pub mod error;
pub mod models;
pub mod pagination;
pub mod queries;

pub use client::GithubClient;
pub use error::GithubError;
pub use models::*;
