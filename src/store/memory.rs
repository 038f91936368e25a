use super::ContactStore;
use crate::domain::Contact;
use crate::errors::AppError;

pub struct MemStore {
    pub data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.clone())
    }

    fn save(&self, _contacts: &[Contact]) -> Result<(), AppError> {
        Ok(())
    }
}
