//! book-nook CLI
//!
//! Command-line interface for managing a personal book library.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use book_nook_catalog::{LibraryStore, SearchField};

mod commands;
mod error;
mod settings;

use error::CliError;

#[derive(Parser)]
#[command(name = "book-nook")]
#[command(about = "Manage a personal book library", long_about = None)]
struct Cli {
    /// Library file (defaults to $BOOK_NOOK_LIBRARY, then the config file, then ./library.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the library
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Publication year; non-numeric input is stored as 0 (defaults to the current year)
        #[arg(long)]
        year: Option<String>,

        #[arg(long, default_value = "")]
        genre: String,

        /// Mark the book as already read
        #[arg(long)]
        read: bool,
    },

    /// Remove the first book whose title matches exactly
    Remove {
        title: String,
    },

    /// Search books by title or author
    Search {
        /// Field to match against
        #[arg(long, value_enum, default_value_t = SearchBy::Title)]
        by: SearchBy,

        /// Case-insensitive substring to look for (empty matches everything)
        #[arg(default_value = "")]
        query: String,
    },

    /// Display the whole library
    List,

    /// Show library statistics
    Stats,

    /// Export the library as a CSV spreadsheet
    Export {
        /// Output path (defaults to the library file with a .csv extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show usage instructions
    Info,

    /// Manage library file configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the resolved library path and where it came from
    Show,

    /// Print the config file path
    Path,
}

/// Searchable fields as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SearchBy {
    Title,
    Author,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Title => Self::Title,
            SearchBy::Author => Self::Author,
        }
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let (library_path, _) = settings::resolve_library_path(cli.file.clone());
    let store = LibraryStore::new(library_path);

    let result = match cli.command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => commands::add::run_add(&store, title, author, year, genre, read),
        Commands::Remove { title } => commands::remove::run_remove(&store, &title),
        Commands::Search { by, query } => commands::search::run_search(&store, by.into(), &query),
        Commands::List => commands::list::run_list(&store),
        Commands::Stats => commands::stats::run_stats(&store),
        Commands::Export { output } => commands::export::run_export(&store, output),
        Commands::Info => commands::info::run_info(),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(cli.file),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Plain message-only logger; command output goes through `log::info!`.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Emit a blank line through the logger so output stays in order.
pub(crate) fn log_blank() {
    log::info!("");
}
