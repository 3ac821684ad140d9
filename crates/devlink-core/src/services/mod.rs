//! Domain services - operations that span more than one repository.

mod account;

pub use account::delete_user_account;
