use clap::{Parser, Subcommand};

use crate::storage::stores::DEFAULT_STORAGE_DIR;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Simple Phonebook")]
pub struct Cli {
    /// Directory holding the saved contact list
    #[arg(long, env = "PHONEBOOK_STORAGE_DIR", default_value_t = String::from(DEFAULT_STORAGE_DIR))]
    pub storage_dir: String,

    /// Log filter, e.g. "warn" or "phonebook=debug"
    #[arg(long, env = "PHONEBOOK_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },
    /// List contacts, newest first
    List {
        /// Only show contacts whose name contains this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of contact to delete, as shown by `list`
        #[arg(long)]
        id: String,
    },

    /// Import contacts from a .csv file with `name,number` columns
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path (or directory) for the exported file
        #[arg(short, long)]
        dest: Option<String>,
    },
}
