//! Steam library discovery: locates the client install, lists library
//! folders and turns `appmanifest_*.acf` files into [`GameRecord`]s.

pub mod controller;
pub mod library;
pub mod manifest;
pub mod paths;
#[cfg(not(windows))]
mod paths_linux;
#[cfg(windows)]
mod paths_windows;
pub mod scan;
pub mod vdf;

// Re-export primary types.
pub use controller::{request_uninstall, reveal_in_file_browser, uninstall_uri};
pub use library::list_library_folders;
pub use manifest::{GameRecord, parse_manifest};
pub use paths::{Paths, discover_root};
pub use scan::{LibraryContext, ManifestFailure, ScanReport, scan_installed};

/// Errors for Steam operations.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("VDF parse error: {0}")]
    Vdf(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid manifest: {0}")]
    Manifest(String),

    #[error("controller error: {0}")]
    Controller(String),
}
