use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tix::models::{GroupBy, SortBy};

mod cmd;

#[derive(Parser)]
#[command(name = "tix")]
#[command(version, about = "Terminal kanban board over a remote ticket API")]
pub struct Cli {
    /// Enable debug logging (to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the board and render it grouped and sorted
    Board {
        /// Grouping mode: status, assignee, priority (persisted across runs)
        #[arg(long)]
        group_by: Option<GroupBy>,

        /// Sorting mode: priority, title (persisted across runs)
        #[arg(long)]
        sort_by: Option<SortBy>,

        /// Board endpoint URL
        #[arg(long, default_value = tix::api::DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Emit the grouped board as JSON instead of the rich view
        #[arg(long)]
        json: bool,
    },
    /// View or clear saved view options
    Prefs {
        #[command(subcommand)]
        command: Option<PrefsCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum PrefsCommands {
    /// Show saved view options
    Show,
    /// Delete the saved view options file
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "tix=debug" } else { "tix=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Board {
            group_by,
            sort_by,
            endpoint,
            json,
        } => {
            cmd::cmd_board(*group_by, *sort_by, endpoint, *json).await?;
        }
        Commands::Prefs { command } => cmd::cmd_prefs(command.clone())?,
    }

    Ok(())
}
