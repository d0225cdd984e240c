use std::path::PathBuf;

/// Returns the Steam root candidates on Linux/Unix systems.
#[cfg_attr(target_os = "macos", allow(dead_code))]
pub(crate) fn candidates() -> Vec<PathBuf> {
    let Some(home) = home_dir() else {
        return Vec::new();
    };

    vec![
        // Primary location: ~/.steam/steam
        home.join(".steam").join("steam"),
        // Fallback: ~/.local/share/Steam
        home.join(".local").join("share").join("Steam"),
        // Flatpak location
        home.join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".steam")
            .join("steam"),
    ]
}

pub(crate) fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
