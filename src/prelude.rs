pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::ContactBook,
    contact::{Contact, format_phone_number},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, memory::MemStore, parse_store, txt::TxtStore};
