use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "urlsift", about = "Inspect and edit links before opening them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a link interactively before opening it
    Check {
        /// The link to check
        url: String,

        /// External handler program for the final open
        #[arg(long, default_value = "xdg-open")]
        opener: String,
    },

    /// Extract links from the clipboard and check one
    Clipboard {
        /// Re-checks to attempt while the clipboard is unreadable
        #[arg(long, default_value_t = 50)]
        wait_retries: u32,

        /// Delay between clipboard re-checks, in milliseconds
        #[arg(long, default_value_t = 100)]
        wait_interval_ms: u64,

        /// External handler program for the final open
        #[arg(long, default_value = "xdg-open")]
        opener: String,
    },
}
