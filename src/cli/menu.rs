use std::io::{self, Write};

use crate::domain::Contact;
use crate::errors::AppError;

pub enum MenuChoice {
    View,
    Add,
    Search,
    Delete,
    Exit,
}

// OUTPUT FUNCTIONS
pub fn show_banner() {
    println!("\n\n--- Contact Book ---\n");
}

pub fn parse_command_from_menu() -> Result<MenuChoice, AppError> {
    println!();
    println!("Main Menu:");
    println!("1. View contacts");
    println!("2. Add a new contact");
    println!("3. Search a contact by name");
    println!("4. Delete an existing contact");
    println!("5. Exit");
    print!("Enter an option (1, 2, 3, 4, or 5): ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(MenuChoice::View),
        "2" => Ok(MenuChoice::Add),
        "3" => Ok(MenuChoice::Search),
        "4" => Ok(MenuChoice::Delete),
        "5" => Ok(MenuChoice::Exit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

pub fn print_contact_table(contacts: &[Contact]) {
    println!("Name        | Phone number");
    println!("--------------------------");
    for contact in contacts {
        println!("{contact}");
    }
}

pub fn print_contact_lines(contacts: &[&Contact]) {
    for contact in contacts {
        println!("{contact}");
    }
}

// INPUT FUNCTIONS
pub fn prompt(message: &str) -> Result<String, AppError> {
    print!("{message}");
    io::stdout().flush()?;
    get_input()
}

pub fn confirm(message: &str) -> Result<bool, AppError> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(get_input()?.to_lowercase() == "y")
}

pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    // A closed stdin would otherwise re-prompt forever
    if bytes == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(input.trim().to_string())
}
