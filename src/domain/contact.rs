use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Eq, PartialOrd, Ord)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: String, phone: String) -> Self {
        Contact { name, phone }
    }
}

// The display form doubles as the persisted line format
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.name, self.phone)
    }
}

pub fn format_phone_number(raw: &str) -> String {
    let length = raw.chars().count();
    let dash_position = length % 3;

    let mut formatted = String::with_capacity(length + length / 3);

    for (i, c) in raw.chars().enumerate() {
        if i > 0 && i % 3 == dash_position {
            formatted.push('-');
        }
        formatted.push(c);
    }

    formatted
}
