//! File-backed tracing setup. Logs never go to the terminal, which the TUI
//! owns.

use std::{
    env,
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "folio.log";
const DEFAULT_FILTER: &str = "info";

/// A log file that was opened, plus why earlier locations were skipped.
#[derive(Debug)]
struct LogFile {
    path: PathBuf,
    file: File,
    skipped: Vec<String>,
}

/// Install the global subscriber. `RUST_LOG` overrides the default level.
///
/// When no location is writable, events are filtered but go nowhere.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match open_log_file(&log_file_candidates()) {
        Ok(log) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log.file)))
                .with(filter)
                .init();
            tracing::info!(path = %log.path.display(), "logging initialized");
            for reason in log.skipped {
                tracing::warn!("{reason}");
            }
        }
        Err(_) => tracing_subscriber::registry().with(filter).init(),
    }
}

/// Open the first candidate that can be appended to, creating its
/// directory as needed. On failure returns the reason for every candidate.
fn open_log_file(candidates: &[PathBuf]) -> Result<LogFile, Vec<String>> {
    let mut skipped = Vec::new();
    for path in candidates {
        match append_to(path) {
            Ok(file) => {
                return Ok(LogFile {
                    path: path.clone(),
                    file,
                    skipped,
                });
            }
            Err(reason) => skipped.push(reason),
        }
    }
    Err(skipped)
}

fn append_to(path: &Path) -> Result<File, String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| format!("cannot create log dir {}: {e}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))
}

/// The local data dir first, then a folder under the temp dir.
fn log_file_candidates() -> Vec<PathBuf> {
    ProjectDirs::from("", "", "folio")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE))
        .into_iter()
        .chain([env::temp_dir().join("folio").join(LOG_FILE)])
        .collect()
}
