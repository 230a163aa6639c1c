mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use linkshelf::config::Config;
use linkshelf::{EntryFilter, FileStorage, PlaylistStore};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Store = PlaylistStore<FileStorage>;

#[derive(Parser)]
#[command(name = "linkshelf", version, about = "Keep a personal list of YouTube and Spotify links")]
struct Cli {
    /// Directory holding the saved list (overrides LINKSHELF_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show what a link resolves to without saving it
    Resolve { url: String },
    /// Add a link to the list
    Add {
        url: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// List entries, newest first
    List {
        /// all, favorites, youtube or spotify
        #[arg(long, default_value = "all")]
        filter: EntryFilter,
    },
    /// Remove an entry
    Remove { id: String },
    /// Toggle the favourite flag on an entry
    Favorite { id: String },
    /// Change an entry's display name
    Rename { id: String, name: String },
    /// Replace an entry's note
    Note { id: String, text: String },
    /// Write the whole list as JSON (stdout when no path is given)
    Export {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace the whole list with a previously exported file
    Import { path: PathBuf },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let Cli { data_dir, command } = cli;
    let open_store = move || {
        let data_dir = data_dir.unwrap_or_else(|| Config::from_env().data_dir);
        PlaylistStore::open(FileStorage::new(data_dir))
    };

    match command {
        Command::Resolve { url } => commands::resolve::resolve(&url),
        Command::Add { url, name, note } => commands::add::add(&mut open_store(), &url, &name, &note),
        Command::List { filter } => commands::list::list(&open_store(), filter),
        Command::Remove { id } => commands::edit::remove(&mut open_store(), &id),
        Command::Favorite { id } => commands::edit::favorite(&mut open_store(), &id),
        Command::Rename { id, name } => commands::edit::rename(&mut open_store(), &id, &name),
        Command::Note { id, text } => commands::edit::note(&mut open_store(), &id, &text),
        Command::Export { output } => commands::transfer::export(&open_store(), output.as_deref()),
        Command::Import { path } => commands::transfer::import(&mut open_store(), &path),
    }
}
