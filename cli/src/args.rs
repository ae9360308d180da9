use clap::{Parser, Subcommand, ValueEnum};
use todue_core::Filter;
use uuid::Uuid;

/// Todo list manager with due-date scheduling.
#[derive(Parser)]
#[command(name = "todue", version, about)]
pub struct Cli {
    /// Base URL of the todo backend.
    #[arg(long, global = true, default_value_t = default_url())]
    pub url: String,

    #[command(subcommand)]
    pub command: Command,
}

fn default_url() -> String {
    std::env::var("TODUE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

#[derive(Subcommand)]
pub enum Command {
    /// List todos.
    List {
        /// Which slice of the collection to show.
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Add a new todo.
    Add {
        title: String,
        /// Due date (YYYY-MM-DD). Without it the due timestamp defaults
        /// to the current instant.
        #[arg(long)]
        date: Option<String>,
        /// Due time (HH:MM); midnight when omitted.
        #[arg(long, requires = "date")]
        time: Option<String>,
    },
    /// Show one todo in detail.
    Show { id: Uuid },
    /// Flip a todo's completion flag.
    Toggle { id: Uuid },
    /// Edit a todo's title and schedule.
    Edit {
        id: Uuid,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New due date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
        /// New due time (HH:MM).
        #[arg(long)]
        time: Option<String>,
        /// Drop the due date entirely.
        #[arg(long, conflicts_with_all = ["date", "time"])]
        clear_due: bool,
    },
    /// Delete a todo.
    Rm { id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Active => Filter::Active,
            FilterArg::Completed => Filter::Completed,
        }
    }
}
