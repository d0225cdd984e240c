use std::path::{Path, PathBuf};

/// Name of the per-library directory holding app manifests.
pub const STEAMAPPS_DIR: &str = "steamapps";

/// Name of the library configuration file under the root `steamapps`.
pub const LIBRARY_CONFIG_FILE: &str = "libraryfolders.vdf";

/// Provides access to Steam directory paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    /// Creates a new `Paths` instance with a custom base directory.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the Steam base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the root library's `steamapps` directory.
    pub fn steamapps_dir(&self) -> PathBuf {
        steamapps_dir_of(&self.base_dir)
    }

    /// Returns the path to `libraryfolders.vdf`.
    pub fn library_config_path(&self) -> PathBuf {
        self.steamapps_dir().join(LIBRARY_CONFIG_FILE)
    }
}

/// Returns the `steamapps` directory of a library root.
pub fn steamapps_dir_of(library: &Path) -> PathBuf {
    library.join(STEAMAPPS_DIR)
}

/// Locates the Steam installation directory.
///
/// Tries the platform lookup first (registry on Windows, well-known home
/// locations elsewhere), then the fixed default install paths. Only existing
/// directories are returned.
pub fn discover_root() -> Option<PathBuf> {
    let found = platform_candidates().into_iter().find(|p| p.is_dir());
    match &found {
        Some(root) => tracing::debug!(root = %root.display(), "steam root discovered"),
        None => tracing::warn!("steam installation not found"),
    }
    found
}

// Platform-specific candidate lists, in lookup order.
#[cfg(target_os = "linux")]
fn platform_candidates() -> Vec<PathBuf> {
    crate::paths_linux::candidates()
}

#[cfg(target_os = "windows")]
fn platform_candidates() -> Vec<PathBuf> {
    crate::paths_windows::candidates()
}

#[cfg(target_os = "macos")]
fn platform_candidates() -> Vec<PathBuf> {
    crate::paths_linux::home_dir()
        .map(|home| {
            vec![
                home.join("Library")
                    .join("Application Support")
                    .join("Steam"),
            ]
        })
        .unwrap_or_default()
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
fn platform_candidates() -> Vec<PathBuf> {
    crate::paths_linux::candidates()
}
