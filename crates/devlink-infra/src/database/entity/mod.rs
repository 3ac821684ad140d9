//! SeaORM entities and their domain conversions.

pub mod post;
pub mod profile;
pub mod user;
