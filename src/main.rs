use std::process::exit;

use phonebook::prelude::run_app;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
