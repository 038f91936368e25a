use super::*;

use crate::store::{ContactStore, parse_store};

pub struct ContactBook {
    pub mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn new() -> Result<Self, AppError> {
        let storage = parse_store()?;
        ContactBook::with_storage(storage)
    }

    pub fn with_storage(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut book = Self {
            mem: Vec::new(),
            storage,
        };
        book.load()?;
        Ok(book)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    /// Appends the contact as given. The phone number is kept exactly as
    /// typed; dash-formatting is a display concern for the caller.
    pub fn add_contact(&mut self, contact: Contact) {
        self.mem.push(contact);
    }

    /// The one matching rule shared by search and delete: case-insensitive
    /// substring match on the contact name, original order preserved.
    pub fn match_by_name(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();
        self.mem
            .iter()
            .filter(|contact| name_matches(&contact.name, &query))
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.match_by_name(query)
    }

    pub fn delete_candidates(&self, query: &str) -> Vec<&Contact> {
        self.match_by_name(query)
    }

    /// Second phase of a delete: drops every contact the candidate phase
    /// matched and returns how many were removed. Callers confirm first.
    pub fn remove_matching(&mut self, query: &str) -> usize {
        let query = query.to_lowercase();
        let before = self.mem.len();
        self.mem.retain(|contact| !name_matches(&contact.name, &query));
        before - self.mem.len()
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }
}

// `query` is expected to be lowercased once by the caller
fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(query)
}
