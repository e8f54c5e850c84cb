#![allow(dead_code)]
mod console;
mod csv;
mod database;
mod errors;
mod menu;
mod records;
mod session;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(
    name = "libris",
    version = VERSION,
    about = "Tiny library records database."
)]
struct Cli {
    /// Directory holding the data files (books.csv, students.csv, users.csv).
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut db = match database::Database::open(&cli.data_dir) {
        Ok(db) => db,
        Err(e) => {
            error!(
                "{}\nPlease put the data files into the data directory and start the program again.\n",
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let session = match authenticate(&db) {
        Ok(session) => session,
        Err(e) => {
            error!("{}\nThe program will now close.\n", e);
            return ExitCode::FAILURE;
        }
    };

    match menu::start(&mut db, &session) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}\n", e);
            ExitCode::FAILURE
        }
    }
}

fn authenticate(db: &database::Database) -> Result<session::Session, errors::Error> {
    let name = console::read_input("Enter the user name: ")?;
    let password = console::read_input("Enter the password: ")?;
    session::Session::authenticate(db, &name, &password)
}
