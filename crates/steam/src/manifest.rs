//! Per-title `appmanifest_<id>.acf` parsing.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::SteamError;
use crate::vdf;

/// File name prefix of an app manifest.
pub const MANIFEST_PREFIX: &str = "appmanifest_";

/// File name extension of an app manifest.
pub const MANIFEST_EXTENSION: &str = ".acf";

/// Display format of [`GameRecord::last_updated_str`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// An installed title, read from one app manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    /// Steam app id; the key used for removal requests.
    pub id: String,
    pub name: Option<String>,
    pub size_bytes: u64,
    /// Disk usage in GiB, rounded to two decimals.
    pub size_gb: f64,
    /// Unix seconds (with fraction) of the manifest's last modification.
    pub last_updated_timestamp: f64,
    pub last_updated_str: String,
    /// Absolute path of the source manifest.
    pub path: PathBuf,
}

impl GameRecord {
    /// Returns the name, or a placeholder when the manifest has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }

    /// Returns the `steamapps` directory holding the manifest.
    pub fn install_dir(&self) -> Option<&Path> {
        self.path.parent()
    }
}

/// Returns true if `file_name` follows the `appmanifest_<id>.acf` pattern.
pub fn is_manifest_file_name(file_name: &str) -> bool {
    file_name.starts_with(MANIFEST_PREFIX) && file_name.ends_with(MANIFEST_EXTENSION)
}

/// Parses a single app manifest into a [`GameRecord`].
///
/// The recency timestamp always comes from the file's modification time. The
/// in-file `LastUpdated` field tracks installs and patches, not play sessions.
pub fn parse_manifest(path: &Path) -> Result<GameRecord, SteamError> {
    let text = vdf::read(path)?;
    let root = vdf::parse(&text)?;

    // A manifest without `AppState` reads as having no fields at all.
    let state = vdf::root_obj(&root, "AppState");

    // App ids are numeric; anything else never reaches a removal request.
    let raw_id = field(state, "appid")
        .ok_or_else(|| SteamError::Manifest("missing AppState.appid".into()))?;
    let id = raw_id
        .trim()
        .parse::<u32>()
        .map_err(|e| SteamError::Manifest(format!("invalid appid '{raw_id}': {e}")))?
        .to_string();

    let name = field(state, "name").map(str::to_string);

    let size_bytes = match field(state, "SizeOnDisk") {
        Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
            SteamError::Manifest(format!("invalid SizeOnDisk '{raw}': {e}"))
        })?,
        None => 0,
    };

    let last_updated_timestamp = modified_unix_secs(path)?;

    Ok(GameRecord {
        id,
        name,
        size_bytes,
        size_gb: bytes_to_gb(size_bytes),
        last_updated_timestamp,
        last_updated_str: format_timestamp(last_updated_timestamp),
        path: path.to_path_buf(),
    })
}

fn field<'a>(state: Option<&'a vdf::Obj<'_>>, key: &str) -> Option<&'a str> {
    state.and_then(|s| vdf::lookup_str(s, key))
}

/// Converts a byte count to GiB rounded to two decimals.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_GB * 100.0).round() / 100.0
}

/// Renders unix seconds as local `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(secs: f64) -> String {
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
        .map(|dt| dt.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

fn modified_unix_secs(path: &Path) -> Result<f64, SteamError> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| SteamError::Io(format!("failed to stat {}: {e}", path.display())))?;

    let secs = match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    };
    Ok(secs)
}
