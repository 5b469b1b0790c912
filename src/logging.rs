use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub(crate) const LOG_ENV: &str = "NAIROBI_BUDGET_LOG";
pub(crate) const LOG_FILE: &str = "nairobi-budget.log";
const DEFAULT_FILTER: &str = "info";

static TRACING_INIT: Once = Once::new();

pub(crate) fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "nairobi-budget", "NairobiBudget")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub(crate) fn open_log_file(dir: &Path) -> Result<File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Install the global subscriber, writing to a file under `dir`.
/// The terminal belongs to the TUI, so nothing is logged to stdout/stderr.
pub(crate) fn init_tracing(dir: &Path) -> Result<PathBuf> {
    let file = open_log_file(dir)?;
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
    Ok(dir.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;

    use super::*;

    #[test]
    fn test_open_log_file_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let mut file = open_log_file(&dir).unwrap();
        writeln!(file, "first").unwrap();
        assert!(dir.join(LOG_FILE).exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        let tmp = tempfile::tempdir().unwrap();
        writeln!(open_log_file(tmp.path()).unwrap(), "one").unwrap();
        writeln!(open_log_file(tmp.path()).unwrap(), "two").unwrap();
        let contents = std::fs::read_to_string(tmp.path().join(LOG_FILE)).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn test_init_tracing_returns_log_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = init_tracing(tmp.path()).unwrap();
        assert_eq!(path, tmp.path().join(LOG_FILE));
        assert!(path.exists());
    }
}
