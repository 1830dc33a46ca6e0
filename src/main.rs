mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::debug;

use crate::cmd::display::{self, DisplayCommandArgs};
use crate::cmd::view::{self as view_cmd, ViewArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::file_source::FileTicketSource;
use crate::infra::http_source::HttpTicketSource;
use crate::infra::view_store::{FileViewStateStore, MemoryViewStateStore};
use crate::services::{TicketSource, ViewStateStore};

#[derive(Parser)]
#[command(
    name = "kanban",
    author,
    version,
    about = "Group and order tickets from a ticket feed"
)]
struct Cli {
    /// Raise log verbosity (repeat for more).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch tickets and print them grouped and ordered.
    Display(DisplayArgs),
    /// Inspect or reset the saved view.
    View(ViewArgs),
}

#[derive(Args)]
struct DisplayArgs {
    /// Group by status, user or priority.
    #[arg(short, long)]
    group: Option<String>,
    /// Order each group by priority or title.
    #[arg(short, long)]
    sort: Option<String>,
    /// Print the grouped board as JSON.
    #[arg(long)]
    json: bool,
    /// Read tickets from a saved feed document instead of the API.
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,
    /// Do not read or write the saved view.
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    logging::initialize(logging::level_for(config.log_level, cli.verbose));
    debug!("state directory: {}", config.state_dir.display());

    match cli.command {
        Commands::View(args) => {
            let ctx = build_context(config, None, false);
            println!("{}", view_cmd::run(&ctx, args.command));
            Ok(())
        }
        Commands::Display(args) => {
            let ctx = build_context(config, args.source, args.ephemeral);
            let output = display::run(
                &ctx,
                DisplayCommandArgs {
                    group: args.group,
                    sort: args.sort,
                    json: args.json,
                },
            )
            .await?;
            println!("{output}");
            Ok(())
        }
    }
}

fn build_context(config: AppConfig, source: Option<PathBuf>, ephemeral: bool) -> AppContext {
    let ticket_source: Arc<dyn TicketSource> = match source {
        Some(path) => Arc::new(FileTicketSource::new(path)),
        None => Arc::new(HttpTicketSource::new(config.api_url.clone())),
    };
    let view_store: Arc<dyn ViewStateStore> = if ephemeral {
        Arc::new(MemoryViewStateStore::default())
    } else {
        let store = FileViewStateStore::new(&config.state_dir);
        debug!("view state file: {}", store.file_path().display());
        Arc::new(store)
    };
    AppContext::new(config, ticket_source, view_store)
}
