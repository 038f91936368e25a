use std::process::exit;

use contact_book::prelude::run_app;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
