//! Installed-game scan across all library folders.

use std::fs;
use std::path::{Path, PathBuf};

use crate::SteamError;
use crate::library::list_library_folders;
use crate::manifest::{GameRecord, is_manifest_file_name, parse_manifest};
use crate::paths::discover_root;

/// Immutable scan input: the Steam root and its library folders.
///
/// Built fresh for every scan; nothing is cached between scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryContext {
    pub root: PathBuf,
    pub library_folders: Vec<PathBuf>,
}

impl LibraryContext {
    /// Discovers the Steam root and its libraries. `None` without a root.
    pub fn discover() -> Option<Self> {
        discover_root().map(Self::for_root)
    }

    /// Builds a context for a known Steam root.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let library_folders = list_library_folders(&root);
        Self {
            root,
            library_folders,
        }
    }
}

/// A manifest that could not be turned into a record.
#[derive(Debug)]
pub struct ManifestFailure {
    pub path: PathBuf,
    pub error: SteamError,
}

/// Result of a scan: parsed records plus the manifests that were skipped.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<GameRecord>,
    pub failures: Vec<ManifestFailure>,
}

/// Parses every `appmanifest_*.acf` in the context's library folders.
///
/// Record order follows directory enumeration and is unspecified. A manifest
/// that fails to parse is logged and reported in `failures`; it never aborts
/// the scan.
pub fn scan_installed(ctx: &LibraryContext) -> ScanReport {
    let mut report = ScanReport::default();

    for folder in &ctx.library_folders {
        if !folder.is_dir() {
            tracing::debug!(folder = %folder.display(), "library folder missing, skipping");
            continue;
        }

        let manifests = match manifest_paths(folder) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!(folder = %folder.display(), error = %e, "failed to list library folder");
                continue;
            }
        };

        for path in manifests {
            match parse_manifest(&path) {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    tracing::warn!(path = %path.display(), error = %error, "skipping manifest");
                    report.failures.push(ManifestFailure { path, error });
                }
            }
        }
    }

    tracing::info!(
        games = report.records.len(),
        skipped = report.failures.len(),
        "scan complete"
    );
    report
}

/// Lists manifest files directly inside a `steamapps` folder.
fn manifest_paths(folder: &Path) -> Result<Vec<PathBuf>, SteamError> {
    let entries = fs::read_dir(folder).map_err(|e| SteamError::Io(e.to_string()))?;

    let paths = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(is_manifest_file_name)
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    Ok(paths)
}
