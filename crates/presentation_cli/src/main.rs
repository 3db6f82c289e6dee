//! TelBook console bot
//!
//! Interactive address book with phone numbers and birthday reminders.

#![allow(clippy::print_stdout)]

mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use application::{ApplicationError, ParsedLine, handlers, parse_line};
use clap::Parser;
use domain::Command;
use domain::entities::AddressBook;
use infrastructure::{AppConfig, SnapshotStore, generate_demo_contacts};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Contacts created by one `demo` command
const DEMO_CONTACTS: usize = 10;

/// TelBook console bot
#[derive(Parser)]
#[command(name = "telbook")]
#[command(author, version, about = "Console address book with birthday reminders", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding the address book snapshot
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Snapshot file name within the storage directory
    #[arg(long)]
    file: Option<String>,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; the prompt owns stdout.
    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = AppConfig::load().context("loading configuration")?;
    if let Some(dir) = cli.storage_dir {
        config.storage.dir = dir;
    }
    if let Some(file) = cli.file {
        config.storage.file = file;
    }

    let store = SnapshotStore::new(config.storage.snapshot_path())
        .context("preparing the storage directory")?;
    let mut book = store
        .load()
        .context("loading the address book snapshot")?
        .unwrap_or_default();

    println!("{}", render::startup());
    run_repl(&mut book, &store)
}

/// Read and run commands until `exit`, `close`, or end of input
///
/// The book is saved exactly once, when the session closes.
fn run_repl(book: &mut AddressBook, store: &SnapshotStore) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", render::prompt());
        io::stdout().flush()?;

        line.clear();
        let parsed = if stdin.read_line(&mut line)? == 0 {
            // End of input closes the session like `exit`
            ParsedLine::Command(Command::Exit, Vec::new())
        } else {
            parse_line(&line)
        };

        match parsed {
            ParsedLine::Empty => {}
            ParsedLine::Unknown(_) => println!("\nInvalid command."),
            ParsedLine::Command(command, args) => {
                println!("\n{}", dispatch(command, &args, book));
                if command == Command::Exit {
                    store
                        .save(book)
                        .context("saving the address book snapshot")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Run one command against the book and render its outcome
fn dispatch(command: Command, args: &[String], book: &mut AddressBook) -> String {
    match command {
        Command::Hello => render::hello(),
        Command::Add => text(handlers::add_contact(args, book)),
        Command::Change => text(handlers::change_contact(args, book)),
        Command::Delete => text(handlers::delete_contact(args, book)),
        Command::Phone => match handlers::show_phone(args, book) {
            Ok(phones) => render::phone_list(&phones),
            Err(e) => e.user_message().to_string(),
        },
        Command::All => handlers::show_all(book),
        Command::AddBirthday => text(handlers::add_birthday(args, book)),
        Command::ShowBirthday => text(handlers::show_birthday(args, book)),
        Command::Birthdays => {
            if book.is_empty() {
                handlers::EMPTY_BOOK.to_string()
            } else {
                let today = chrono::Local::now().date_naive();
                render::greeting_list(&handlers::birthdays(book, today))
            }
        }
        Command::Demo => match generate_demo_contacts(book, DEMO_CONTACTS) {
            Ok(message) => message,
            Err(e) => ApplicationError::from(e).user_message().to_string(),
        },
        Command::Exit => "Good bye!".to_string(),
    }
}

/// Reduce a handler result to the line shown on the console
fn text(result: Result<String, ApplicationError>) -> String {
    result.unwrap_or_else(|e| e.user_message().to_string())
}
