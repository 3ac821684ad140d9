//! # DevLink Infrastructure
//!
//! Concrete implementations of the ports defined in `devlink-core`:
//! SeaORM/Postgres repositories, JWT + Argon2 authentication, and the
//! reqwest-based GitHub client.

pub mod auth;
pub mod database;
pub mod github;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use database::{DatabaseConfig, connect};
pub use github::{GithubConfig, HttpGithubClient};
