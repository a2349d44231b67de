// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "intelligentsia",
    version,
    about = "intelligentsia - INTELLIGENTSIA SA website server",
    long_about = "Serves the INTELLIGENTSIA SA company site together with its contact and guestbook forms. Submissions are appended to plain text files in the data directory."
)]
pub struct Cli {
    /// Configuration file (defaults to ~/.config/intelligentsia/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Starts the HTTP server.
    Serve {
        #[arg(short = 'H', long, help = "Host to bind to")]
        host: Option<String>,

        #[arg(short, long, help = "Port to listen on")]
        port: Option<u16>,

        #[arg(short, long, help = "Directory holding messages.txt and guestbook.txt")]
        data_dir: Option<PathBuf>,

        #[arg(long, help = "Directory with the static site (index.html, style.css, script.js)")]
        public_dir: Option<PathBuf>,
    },

    /// Creates the data directory and empty log files if they are missing.
    Init,

    /// Prints guestbook entries, most recent first.
    Guestbook {
        #[arg(short, long, help = "Show latest N entries (default: 10)")]
        num: Option<usize>,
    },

    /// Shows the effective configuration.
    Settings {
        #[arg(long, help = "Write the effective configuration to the config file")]
        write: bool,
    },
}
