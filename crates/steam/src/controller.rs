//! Hand-off to the Steam client and the desktop file browser.
//!
//! Nothing here deletes files: removal goes through the client's own
//! `steam://uninstall/<id>` handler so Steam stays consistent.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::SteamError;
use crate::manifest::GameRecord;

/// Returns the client URI that opens the uninstall dialog for an app.
pub fn uninstall_uri(app_id: &str) -> String {
    format!("steam://uninstall/{app_id}")
}

/// Asks the Steam client to uninstall an app.
///
/// Only numeric ids are accepted; the URI ends up on a shell command line on
/// Windows.
pub fn request_uninstall(app_id: &str) -> Result<(), SteamError> {
    if app_id.parse::<u32>().is_err() {
        return Err(SteamError::Controller(format!("invalid app id '{app_id}'")));
    }
    let uri = uninstall_uri(app_id);
    tracing::info!(app_id, %uri, "requesting uninstall");
    spawn_detached(open_uri_command(&uri))
        .map_err(|e| SteamError::Controller(format!("failed to open {uri}: {e}")))
}

/// Opens the directory holding the record's manifest in the file browser.
pub fn reveal_in_file_browser(record: &GameRecord) -> Result<(), SteamError> {
    let dir = record.install_dir().ok_or_else(|| {
        SteamError::Controller(format!("no parent directory for {}", record.path.display()))
    })?;
    tracing::info!(app_id = %record.id, dir = %dir.display(), "revealing install folder");
    spawn_detached(open_dir_command(dir))
        .map_err(|e| SteamError::Controller(format!("failed to open {}: {e}", dir.display())))
}

fn spawn_detached(mut cmd: Command) -> std::io::Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "windows")]
fn open_uri_command(uri: &str) -> Command {
    let mut cmd = Command::new("cmd");
    // Empty title argument so `start` does not treat the URI as a title.
    cmd.args(["/C", "start", "", uri]);
    cmd
}

#[cfg(target_os = "windows")]
fn open_dir_command(dir: &Path) -> Command {
    let mut cmd = Command::new("explorer");
    cmd.arg(dir);
    cmd
}

#[cfg(target_os = "macos")]
fn open_uri_command(uri: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(uri);
    cmd
}

#[cfg(target_os = "macos")]
fn open_dir_command(dir: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(dir);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_uri_command(uri: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(uri);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_dir_command(dir: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(dir);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn uninstall_uri_names_app() {
        assert_eq!(uninstall_uri("620"), "steam://uninstall/620");
    }

    #[test]
    fn uri_command_carries_uri() {
        let cmd = open_uri_command("steam://uninstall/620");
        assert!(cmd.get_args().any(|a| a == "steam://uninstall/620"));
    }

    #[test]
    fn dir_command_carries_dir() {
        let cmd = open_dir_command(Path::new("/steam/steamapps"));
        assert!(cmd.get_args().any(|a| a == "/steam/steamapps"));
    }

    #[test]
    fn uninstall_rejects_non_numeric_id() {
        let err = request_uninstall("620 & calc.exe").unwrap_err();
        assert!(matches!(err, SteamError::Controller(_)));
        assert!(request_uninstall("").is_err());
    }

    #[test]
    fn reveal_without_parent_fails() {
        let record = GameRecord {
            id: "620".into(),
            name: None,
            size_bytes: 0,
            size_gb: 0.0,
            last_updated_timestamp: 0.0,
            last_updated_str: String::new(),
            path: PathBuf::new(),
        };
        assert!(matches!(
            reveal_in_file_browser(&record),
            Err(SteamError::Controller(_))
        ));
    }
}
