mod api;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod pretty;
mod render;
mod runtime;
mod session;
mod snapshot;
mod standings;
mod ui;
mod version;
mod weather;
mod workers;

use crate::environment::Environment;
use crate::pretty::print_cmd_warn;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the standings dashboard
    Start {
        /// Print plain refreshing tables instead of the interactive dashboard
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background fill
        #[arg(long)]
        no_background: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let api_url = std::env::var("PITWALL_API_URL").unwrap_or_default();
    let environment = match api_url.parse::<Environment>() {
        Ok(environment) => environment,
        Err(()) => {
            print_cmd_warn!(
                "Configuration",
                "Ignoring invalid PITWALL_API_URL value: {}",
                api_url
            );
            Environment::default()
        }
    };

    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            no_background,
        } => {
            let session = setup_session(environment).await;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background).await
            }
        }
    }
}
