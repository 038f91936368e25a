pub mod book;
pub mod contact;

pub use crate::errors::AppError;
pub use contact::Contact;
