use crate::prelude::{
    AppError, Contact, ContactStore, JsonFileAdapter, NewContact,
    command::{Cli, Commands},
    export_contacts_to_csv, import_contacts_from_csv,
};
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let mut store = ContactStore::hydrate(Box::new(JsonFileAdapter::new(&cli.storage_dir)));

    match cli.command {
        Commands::Add { name, number } => {
            store.add_contact(NewContact::new(name, number))?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List { filter } => {
            if let Some(text) = filter {
                store.set_filter(&text);
            }

            let visible = store.visible_contacts();
            if visible.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in visible.iter().enumerate() {
                println!("{}", listing_line(i + 1, c));
            }
            Ok(())
        }

        Commands::Delete { id } => {
            if store.state().find_by_id(&id).is_none() {
                println!("No contact with this id");
                return Ok(());
            }

            store.delete_contact(&id);
            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Import { src } => {
            let report = import_contacts_from_csv(&mut store, src.as_deref())?;

            println!(
                "Imported {} contact(s), skipped {} duplicate(s) from {}",
                report.added,
                report.skipped,
                report.path.display()
            );
            Ok(())
        }

        Commands::Export { dest } => {
            let (path, count) = export_contacts_to_csv(store.state().contacts(), dest.as_deref())?;

            println!(
                "Successfully exported {count} contact(s) to {}",
                path.display()
            );
            Ok(())
        }
    }
}

pub fn listing_line(i: usize, c: &Contact) -> String {
    format!("{i:>3}. {:<20} {:<15} {}", c.name, c.number, c.id)
}

/// Installs a stderr `fmt` subscriber. A bad filter string falls back to `warn`.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
