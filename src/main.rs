mod check;
mod cli;
mod clipboard;
mod dispatch;
mod hub;
mod links;
mod modules;

use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { url, opener } => {
            if let Err(e) = check::run(url, &opener).await {
                tracing::error!(error = %e, "check failed");
                eprintln!("urlsift check: {e}");
                std::process::exit(1);
            }
        }
        Command::Clipboard {
            wait_retries,
            wait_interval_ms,
            opener,
        } => {
            if let Err(e) = clipboard::run(wait_retries, wait_interval_ms, &opener).await {
                tracing::error!(error = %e, "clipboard flow failed");
                eprintln!("urlsift clipboard: {e}");
                std::process::exit(1);
            }
        }
    }
}
