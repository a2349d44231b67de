// src/main.rs

mod cli;
mod commands;
mod config;
mod error;
mod handlers;
mod i18n;
mod logging;
mod models;
mod record;
mod render;
mod server;
mod store;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load(&config_path);

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init_logging(log_level, cli.json_logs || config.json_logs);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            data_dir,
            public_dir,
        } => commands::handle_serve(config, host, port, data_dir, public_dir).await,
        Commands::Init => commands::handle_init(&config),
        Commands::Guestbook { num } => commands::handle_guestbook(&config, num),
        Commands::Settings { write } => commands::handle_settings(&config, &config_path, write),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
