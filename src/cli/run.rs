use std::env;

use clap::Parser;

use super::command::{Cli, Commands};
use super::menu::{self, MenuChoice};
use crate::domain::{Contact, book::ContactBook, contact::format_phone_number};
use crate::errors::AppError;
use crate::store::storage_port::{export_contacts_to_csv, import_contacts_from_csv};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(file) = &cli.file {
        unsafe {
            env::set_var("CONTACTS_PATH", file);
        }
    }

    let mut book = ContactBook::new()?;

    match cli.command {
        Some(Commands::Import { src }) => {
            let (path, imported) = import_contacts_from_csv(src.as_deref())?;
            let total = imported.len();

            for contact in imported {
                book.add_contact(contact);
            }
            book.save()?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Some(Commands::Export { des }) => {
            let (path, total) = export_contacts_to_csv(book.contact_list(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }

        None => run_menu(&mut book),
    }
}

fn run_menu(book: &mut ContactBook) -> Result<(), AppError> {
    menu::show_banner();

    loop {
        let choice = match menu::parse_command_from_menu() {
            Ok(choice) => choice,
            Err(AppError::ParseCommand(_)) => {
                println!("Invalid choice. Please try again.\n");
                continue;
            }
            Err(e) => return Err(e),
        };

        match choice {
            MenuChoice::View => view_contacts(book),
            MenuChoice::Add => add_contact(book)?,
            MenuChoice::Search => search_contact(book)?,
            MenuChoice::Delete => delete_contact(book)?,
            MenuChoice::Exit => {
                // The only point at which the book is persisted
                if let Err(e) = book.save() {
                    eprintln!("Could not save contacts: {e}");
                }
                println!("Exiting the application.");
                return Ok(());
            }
        }
    }
}

fn view_contacts(book: &ContactBook) {
    if book.contact_list().is_empty() {
        println!("No contacts found.");
    } else {
        menu::print_contact_table(book.contact_list());
    }
    println!();
}

fn add_contact(book: &mut ContactBook) -> Result<(), AppError> {
    let name = menu::prompt("Enter the name: ")?;
    let phone = menu::prompt("Enter the phone number: ")?;

    // Formatting is advisory; the number is stored as typed
    println!("Formatted number: {}", format_phone_number(&phone));

    book.add_contact(Contact::new(name, phone));
    println!("Contact added.\n");
    Ok(())
}

fn search_contact(book: &ContactBook) -> Result<(), AppError> {
    let query = menu::prompt("Enter the name: ")?;

    let found = book.search(&query);

    if found.is_empty() {
        println!("No contacts found.\n");
    } else {
        println!("Found contacts:");
        menu::print_contact_lines(&found);
        println!();
    }
    Ok(())
}

fn delete_contact(book: &mut ContactBook) -> Result<(), AppError> {
    let query = menu::prompt("Enter the name to delete: ")?;

    let candidates = book.delete_candidates(&query);

    if candidates.is_empty() {
        println!("No contacts found.\n");
        return Ok(());
    }

    println!("Matching contacts:");
    menu::print_contact_lines(&candidates);

    if menu::confirm("Are you sure you want to delete these contacts? (y/n): ")? {
        book.remove_matching(&query);
        println!("Contacts deleted.\n");
    } else {
        println!("Deletion canceled.\n");
    }
    Ok(())
}
