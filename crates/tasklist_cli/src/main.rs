//! `tasklist` terminal front end.
//!
//! Mounts the task list page over a SQLite-backed key-value store and feeds
//! it events from one-shot subcommands or an interactive prompt.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use tasklist_core::db::{open_db, open_db_in_memory};
use tasklist_core::{
    init_logging, AppConfig, ConfigOverrides, EventOutcome, Page, PageEvent, SqliteKeyValueStore,
    StorageLocation, TaskListApp,
};

mod repl;
mod view;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Local task list with persistent storage", long_about = None)]
struct Cli {
    /// SQLite database file (overrides TASKLIST_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Keep tasks in memory only for this run
    #[arg(long, global = true, conflicts_with = "db")]
    in_memory: bool,

    /// Absolute log directory (overrides TASKLIST_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides TASKLIST_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    Add {
        /// Task title
        title: String,
    },
    /// Toggle completion of the task at a 1-based position
    Toggle { number: usize },
    /// Show all tasks
    List,
    /// Start the interactive prompt (default)
    Repl,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Toggle { .. } => "toggle",
            Self::List => "list",
            Self::Repl => "repl",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(ConfigOverrides {
        db_path: cli.db,
        in_memory: cli.in_memory,
        log_dir: cli.log_dir,
        log_level: cli.log_level,
    })
    .context("invalid configuration")?;

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = match &config.storage {
        StorageLocation::File(path) => open_db(path)
            .with_context(|| format!("failed to open task database `{}`", path.display()))?,
        StorageLocation::Memory => open_db_in_memory().context("failed to open in-memory store")?,
    };

    let mut app = TaskListApp::mount(SqliteKeyValueStore::new(&conn), Page::new())
        .context("failed to load stored tasks")?;

    let command = cli.command.unwrap_or(Commands::Repl);
    info!("event=cli_command module=cli status=start command={}", command.name());

    match command {
        Commands::Add { title } => {
            app.type_input(title);
            let outcome = app.dispatch(PageEvent::Submit)?;
            let message = view::describe_outcome(&outcome, app.store());
            if !message.is_empty() {
                println!("{message}");
            }
        }
        Commands::Toggle { number } => {
            let Some(row) = number.checked_sub(1) else {
                bail!("task numbers start at 1");
            };
            let outcome = app.dispatch(PageEvent::Toggle { row })?;
            if let EventOutcome::RowOutOfRange(_) = outcome {
                bail!("no task #{number}");
            }
            println!("{}", view::describe_outcome(&outcome, app.store()));
        }
        Commands::List => print!("{}", view::render_page(app.page())),
        Commands::Repl => repl::run(&mut app)?,
    }

    Ok(())
}
