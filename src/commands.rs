// src/commands.rs

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{Result, SiteError};
use crate::server;
use crate::store::{self, FileLog, FlatLog};

/// 处理 'serve' 命令
pub async fn handle_serve(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
    public_dir: Option<PathBuf>,
) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = public_dir {
        config.public_dir = dir;
    }

    if !config.public_dir.is_dir() {
        tracing::warn!(
            public = %config.public_dir.display(),
            "static site directory not found; only the form pages will be served"
        );
    }

    server::serve(&config).await
}

/// 处理 'init' 命令
pub fn handle_init(config: &Config) -> Result<()> {
    for (label, path) in [
        ("Contact log", config.contact_path()),
        ("Guestbook log", config.guestbook_path()),
    ] {
        let log = FileLog::new(path);
        if log.ensure_exists()? {
            println!("✓ {} created at: {}", label, log.path().display());
        } else {
            println!("✓ {} already exists at: {}", label, log.path().display());
        }
    }

    let guestbook = FileLog::new(config.guestbook_path());
    let count = store::count_entries(&guestbook)?;
    println!("✓ Guestbook holds {} entr{}.", count, if count == 1 { "y" } else { "ies" });
    Ok(())
}

/// 处理 'guestbook' 命令
pub fn handle_guestbook(config: &Config, num: Option<usize>) -> Result<()> {
    let log = FileLog::new(config.guestbook_path());
    print_guestbook(&log, num.unwrap_or(10))
}

fn print_guestbook(log: &dyn FlatLog, limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(SiteError::InvalidInput(
            "Number of entries must be at least 1.".to_string(),
        ));
    }

    let entries = store::read_guestbook(log)?;
    if entries.is_empty() {
        println!("No guestbook entries found in {}.", log.describe());
        return Ok(());
    }

    for entry in entries.iter().take(limit) {
        println!(
            "[{}] {}",
            entry.date.as_deref().unwrap_or("no date"),
            entry.name.as_deref().unwrap_or("(anonymous)")
        );
        if let Some(message) = &entry.message {
            println!("{}", message.trim_end());
        }
        println!("{}", "─".repeat(40));
    }
    if entries.len() > limit {
        println!("({} older entries not shown)", entries.len() - limit);
    }
    Ok(())
}

/// 处理 'settings' 命令
pub fn handle_settings(config: &Config, config_path: &Path, write: bool) -> Result<()> {
    config::show_config(config, config_path);
    if write {
        config.save(config_path)?;
        println!("\n✓ Configuration written to {}", config_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryLog;

    fn config_in(dir: &Path) -> Config {
        Config {
            data_dir: dir.join("data"),
            ..Config::default()
        }
    }

    #[test]
    fn init_creates_both_logs_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        handle_init(&config).unwrap();
        assert!(config.contact_path().is_file());
        assert!(config.guestbook_path().is_file());

        std::fs::write(config.guestbook_path(), "Name: A\nMessage: B\nDate: C\n---\n").unwrap();
        handle_init(&config).unwrap();
        assert_eq!(
            std::fs::read_to_string(config.guestbook_path()).unwrap(),
            "Name: A\nMessage: B\nDate: C\n---\n"
        );
    }

    #[test]
    fn guestbook_listing_rejects_zero_limit() {
        let log = MemoryLog::new();
        assert!(matches!(
            print_guestbook(&log, 0),
            Err(SiteError::InvalidInput(_))
        ));
        assert!(print_guestbook(&log, 5).is_ok());
    }

    #[test]
    fn config_write_saves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        handle_settings(&Config::default(), &path, true).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("guestbook_file = \"guestbook.txt\""));
        assert!(saved.contains("default_language = \"fr\""));
    }
}
