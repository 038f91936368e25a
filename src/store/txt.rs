use std::fs::{self, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;

use super::{ContactStore, create_file_parent};
use crate::domain::Contact;
use crate::errors::AppError;
use crate::helper;

pub struct TxtStore {
    path: String,
}

impl TxtStore {
    pub fn new(path: &str) -> Self {
        TxtStore {
            path: path.to_string(),
        }
    }
}

impl ContactStore for TxtStore {
    /// A missing backing file is an empty book, not an error.
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Vec::new());
        }

        let file = OpenOptions::new().read(true).open(&self.path)?;
        let reader = BufReader::new(file);
        let contacts = helper::deserialize_contacts_from_txt_buffer(reader)?;
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // The whole book goes to a sibling temp file first and is renamed
        // over the old one, so a failure mid-write cannot truncate it.
        let tmp_path = format!("{}.tmp", self.path);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;

        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
