use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

use super::codec::{decode, encode, DecodedLog};
use super::log::MoveLog;
use crate::error::PersistenceError;

/// Timestamp layout appended to save-file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Where saved games go.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub save_dir: PathBuf,
    pub base_name: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        SaveConfig {
            save_dir: PathBuf::from("saves"),
            base_name: "C4Save".to_string(),
        }
    }
}

impl SaveConfig {
    /// Base path handed to [`save_log`]; the timestamp and extension are added there.
    pub fn base_path(&self) -> PathBuf {
        self.save_dir.join(&self.base_name)
    }
}

/// `<base>_<yyyyMMddHHmmss>.txt`
pub fn timestamped_path<Tz: TimeZone>(base: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let mut name = OsString::from(base.as_os_str());
    name.push(format!("_{}.txt", now.format(TIMESTAMP_FORMAT)));
    PathBuf::from(name)
}

/// Write `log` to a new timestamped file next to `base` and return its path.
/// Missing parent directories are created.
///
/// The file is written under a `.tmp` name and renamed into place, so the
/// final path only ever holds a complete log.
pub fn save_log(log: &MoveLog, base: &Path) -> Result<PathBuf, PersistenceError> {
    let path = timestamped_path(base, &Local::now());
    write_atomic(&path, &encode(log))?;
    info!(path = %path.display(), moves = log.len(), "saved move log");
    Ok(path)
}

/// Read and decode a saved log. Nothing is decoded until the whole file has
/// been read.
pub fn read_log(path: &Path) -> Result<DecodedLog, PersistenceError> {
    let text = fs::read_to_string(path).map_err(|e| PersistenceError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let decoded = decode(&text);
    debug!(
        path = %path.display(),
        moves = decoded.moves.len(),
        skipped = decoded.skipped,
        "read move log"
    );
    Ok(decoded)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), PersistenceError> {
    let mut tmp_name = OsString::from(path.as_os_str());
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| PersistenceError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(&tmp, contents).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        PersistenceError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        PersistenceError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })
}
