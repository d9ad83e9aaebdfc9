//! File logging for the demo.
//!
//! The terminal is in raw mode while the demo runs, so logs go to
//! `latest.log` in the log directory. The previous run's log is archived
//! under a timestamped name on startup.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

const LATEST: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
const KEEP_ARCHIVED: usize = 25;

/// Install the file logger. Failures are ignored: there is nowhere to
/// report them once the terminal is taken over.
pub fn init(dir: Option<PathBuf>) {
    let Some(dir) = dir else { return };
    if let Ok(file) = open_log(&dir) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

fn open_log(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    let latest = dir.join(LATEST);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        fs::rename(&latest, dir.join(format!("{stamp}.log")))?;
    }
    prune_archived(dir, KEEP_ARCHIVED)?;
    File::create(latest)
}

/// Delete all but the `keep` newest archived logs.
///
/// Archive names are timestamps, so name order is age order.
fn prune_archived(dir: &Path, keep: usize) -> io::Result<()> {
    let mut archived: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST)
        })
        .collect();
    archived.sort();

    let excess = archived.len().saturating_sub(keep);
    for path in &archived[..excess] {
        fs::remove_file(path)?;
    }
    Ok(())
}
