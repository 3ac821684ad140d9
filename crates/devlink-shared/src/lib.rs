//! # DevLink Shared
//!
//! Request/response types shared between the backend and any client.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, FieldError, Message, ValidationErrors};
