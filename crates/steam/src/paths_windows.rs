use std::path::PathBuf;

use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

/// Default install locations checked after the registry.
const DEFAULT_PATHS: &[&str] = &[r"C:\Program Files (x86)\Steam", r"C:\Program Files\Steam"];

/// Returns the Steam root candidates on Windows, registry entries first.
pub(crate) fn candidates() -> Vec<PathBuf> {
    let mut found = Vec::new();

    // Per-user client path, written by the running client.
    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    if let Some(path) = read_registry(&hkcu, r"Software\Valve\Steam", "SteamPath") {
        found.push(path);
    }

    // Machine-wide install path: 64-bit view first, then 32-bit.
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    for subkey in [r"SOFTWARE\Wow6432Node\Valve\Steam", r"SOFTWARE\Valve\Steam"] {
        if let Some(path) = read_registry(&hklm, subkey, "InstallPath") {
            found.push(path);
        }
    }

    found.extend(DEFAULT_PATHS.iter().map(PathBuf::from));
    found
}

fn read_registry(hive: &RegKey, subkey: &str, value: &str) -> Option<PathBuf> {
    let key = hive.open_subkey(subkey).ok()?;
    let path: String = key.get_value(value).ok()?;
    if path.is_empty() {
        return None;
    }
    Some(PathBuf::from(path))
}
