mod config;
mod disposition;
mod error;
mod form;
mod handlers;
mod poster;
mod ui;

use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::{error, info};

use crate::config::Settings;
use crate::form::FormSubmission;
use crate::handlers::{FormBinding, status};
use crate::poster::HttpPoster;
use crate::ui::ConsoleUi;

#[derive(Parser)]
#[command(
    name = "formwire",
    about = "Drives the downloader web app's forms from the command line"
)]
struct Cli {
    /// Server base URL (overrides configuration)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit the fetch form and print the returned page
    Fetch {
        /// Form fields as NAME=VALUE
        fields: Vec<String>,
    },
    /// Submit the download form and save the payload
    Download {
        /// Form fields as NAME=VALUE
        fields: Vec<String>,
    },
    /// Show the server's queue and history
    Status {
        /// Re-fetch and re-render every second
        #[arg(long)]
        watch: bool,
    },
    /// Clear the download queue
    Clear,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = Settings::new().expect("Failed to load configuration");

    // Logs go to stderr so a fetched page on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(&settings.log_level)
        .with_writer(std::io::stderr)
        .init();
    let base_url = cli.base_url.unwrap_or(settings.base_url);
    info!("Using server at {}", base_url);

    let binding = FormBinding::new(
        HttpPoster::new(base_url),
        ConsoleUi::new(settings.download_dir),
    );

    if let Err(e) = run(&binding, cli.command).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(
    binding: &FormBinding<HttpPoster, ConsoleUi>,
    command: Command,
) -> Result<(), error::Error> {
    match command {
        Command::Fetch { fields } => {
            let form = FormSubmission::from_pairs(&fields)?;
            binding.submit(&form).await?;
        }
        Command::Download { fields } => {
            let form = FormSubmission::from_pairs(&fields)?;
            binding.download(&form).await?;
        }
        Command::Status { watch } => {
            if watch {
                // Same cadence as the page's queue poller.
                let mut interval = tokio::time::interval(Duration::from_secs(1));
                loop {
                    interval.tick().await;
                    let snapshot = binding.status().await?;
                    print!("{}", status::render_status(&snapshot));
                }
            } else {
                let snapshot = binding.status().await?;
                print!("{}", status::render_status(&snapshot));
            }
        }
        Command::Clear => {
            binding.clear().await?;
        }
    }
    Ok(())
}
