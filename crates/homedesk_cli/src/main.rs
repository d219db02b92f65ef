//! homedesk terminal front-end.
//!
//! # Responsibility
//! - Parse one command, run it against `homedesk_core`, print the result.
//! - Keep each invocation a single load/act/flush cycle.
//!
//! ```bash
//! homedesk password            # prompts on stdin
//! printf '%s\n' "$PW" | homedesk password
//! homedesk books add --title "Dune" --author "Frank Herbert" --year 1965 --read
//! homedesk books search dune --by title
//! homedesk books progress
//! ```

mod args;
mod render;

use args::{BooksCommand, Cli, CliConfig, Command};
use clap::Parser;
use homedesk_core::{
    evaluate_password, init_logging, JsonFileBookRepository, LibraryError, LibraryService,
};
use log::info;
use std::error::Error;
use std::io::BufRead;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();
    start_logging(&config);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(config: &CliConfig) {
    let Some(log_dir) = config.log_dir.as_ref() else {
        eprintln!("warning: could not resolve a log directory; file logging disabled");
        return;
    };
    if let Err(err) = init_logging(&config.log_level, log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
}

fn run(command: Command, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Password { password } => run_password(password),
        Command::Books(command) => run_books(command, config),
    }
}

fn run_password(password: Option<String>) -> Result<(), Box<dyn Error>> {
    let password = match password {
        Some(password) => password,
        None => {
            eprintln!("Enter your password:");
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\n', '\r']).to_string()
        }
    };

    if password.is_empty() {
        println!("Enter a password to check how strong it is.");
        return Ok(());
    }

    let report = evaluate_password(&password);
    info!(
        "event=password_score module=cli status=ok score={}",
        report.score
    );
    print!("{}", render::strength(&report));
    Ok(())
}

fn run_books(command: BooksCommand, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let mut library = LibraryService::open(JsonFileBookRepository::new(&config.data_file))?;

    match command {
        BooksCommand::List => println!("{}", render::book_list(library.list_all()).trim_end()),
        BooksCommand::Add(add) => {
            if add.title.trim().is_empty() || add.author.trim().is_empty() {
                return Err("a book needs both a title and an author".into());
            }
            library.create(add.into())?;
            println!("Book added successfully!");
        }
        BooksCommand::Search { term, by } => {
            if term.trim().is_empty() {
                println!("Enter a search term.");
                return Ok(());
            }
            let hits = library.find(&term, by.into());
            println!("{}", render::search_results(&hits).trim_end());
        }
        BooksCommand::Update(update) => match library.update(&update.target, &update.to_update()) {
            Ok(_) => println!("Book updated successfully!"),
            Err(LibraryError::NotFound(_)) => println!("{}", render::NOT_FOUND),
            Err(err) => return Err(err.into()),
        },
        BooksCommand::Delete { title } => match library.delete(&title) {
            Ok(_) => println!("Book removed successfully!"),
            Err(LibraryError::NotFound(_)) => println!("{}", render::NOT_FOUND),
            Err(err) => return Err(err.into()),
        },
        BooksCommand::Progress => {
            println!("{}", render::reading_progress(&library.progress()));
        }
    }

    Ok(())
}
