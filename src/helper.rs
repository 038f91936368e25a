use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::domain::Contact;
use crate::errors::AppError;

pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        data.push_str(&contact.to_string());
        data.push('\n');
    }
    data
}

pub fn parse_contact_line(line: &str) -> Result<Contact, AppError> {
    let mut fields = line.split('|');

    match (fields.next(), fields.next()) {
        (Some(name), Some(phone)) => Ok(Contact::new(
            name.trim().to_string(),
            phone.trim().to_string(),
        )),
        _ => Err(AppError::ParseLine(line.to_string())),
    }
}

pub fn deserialize_contacts_from_txt_buffer(
    buffer: BufReader<File>,
) -> Result<Vec<Contact>, AppError> {
    let mut contacts = Vec::new();

    for line in buffer.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match parse_contact_line(&line) {
            Ok(contact) => contacts.push(contact),
            // A line without a delimiter is skipped with a warning rather
            // than misread as partial fields. Loading continues.
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(contacts)
}
