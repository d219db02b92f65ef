//! Command-line surface.
//!
//! # Responsibility
//! - Declare subcommands for the password meter and the book manager.
//! - Resolve flags into a `CliConfig` with defaults applied.

use clap::{Args, Parser, Subcommand, ValueEnum};
use homedesk_core::{
    default_log_level, BookUpdate, NewBookRequest, SearchField, DEFAULT_STORAGE_FILE,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "homedesk", version)]
#[command(about = "Password strength meter and personal book collection manager")]
#[command(long_about = None)]
pub struct Cli {
    /// Book storage file
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_FILE)]
    pub data_file: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory for rolling log files (default: ./logs)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check how strong a password is (the password is read from stdin)
    Password {
        #[arg(hide = true)]
        password: Option<String>,
    },
    /// Manage the book collection
    #[command(subcommand)]
    Books(BooksCommand),
}

#[derive(Debug, Subcommand)]
pub enum BooksCommand {
    /// View all books
    List,
    /// Add a new book
    Add(AddArgs),
    /// Search books by title and/or author
    Search {
        /// Case-insensitive search term
        term: String,
        #[arg(long, value_enum, default_value_t = SearchBy::Any)]
        by: SearchBy,
    },
    /// Edit a book; omitted or blank fields keep their value
    Update(UpdateArgs),
    /// Remove a book by title
    Delete {
        /// Title of the book to remove
        title: String,
    },
    /// View reading progress
    Progress,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: String,
    /// Publication year
    #[arg(long, default_value = "")]
    pub year: String,
    #[arg(long, default_value = "")]
    pub genre: String,
    /// Mark the book as already read
    #[arg(long)]
    pub read: bool,
}

impl From<AddArgs> for NewBookRequest {
    fn from(value: AddArgs) -> Self {
        Self {
            title: value.title,
            author: value.author,
            year: value.year,
            genre: value.genre,
            read: value.read,
        }
    }
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Current title of the book to edit
    pub target: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    /// Have you read this book? (yes/no)
    #[arg(long, value_parser = parse_yes_no)]
    pub read: Option<bool>,
}

impl UpdateArgs {
    pub fn to_update(&self) -> BookUpdate {
        BookUpdate {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.clone(),
            genre: self.genre.clone(),
            read: self.read,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Title,
    Author,
    Any,
}

impl From<SearchBy> for SearchField {
    fn from(value: SearchBy) -> Self {
        match value {
            SearchBy::Title => Self::Title,
            SearchBy::Author => Self::Author,
            SearchBy::Any => Self::Any,
        }
    }
}

/// Settings resolved from global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    /// `None` when no absolute directory could be resolved.
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> CliConfig {
        let log_dir = self
            .log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("logs"));
        let log_dir = if log_dir.is_absolute() {
            Some(log_dir)
        } else {
            std::env::current_dir().ok().map(|cwd| cwd.join(log_dir))
        };

        CliConfig {
            data_file: self.data_file.clone(),
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
        }
    }
}

fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(format!("expected yes or no, got `{other}`")),
    }
}
