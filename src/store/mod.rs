pub mod memory;
pub mod storage_port;
pub mod txt;

use crate::domain::Contact;
use crate::errors::AppError;
use dotenv::dotenv;
use std::env;
use std::fs;
use std::path::Path;

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

pub fn parse_store() -> Result<Box<dyn ContactStore>, AppError> {
    dotenv().ok();

    let path = env::var("CONTACTS_PATH").unwrap_or("./contacts.txt".to_string());
    Ok(Box::new(txt::TxtStore::new(&path)))
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
