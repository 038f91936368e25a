use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Personal Contact Book")]
pub struct Cli {
    /// Path to the backing contacts file
    #[arg(long, env = "CONTACTS_PATH")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands; without one the interactive menu starts
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for the export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
