//! Library folder listing from `libraryfolders.vdf`.

use std::path::{Path, PathBuf};

use crate::SteamError;
use crate::paths::{Paths, steamapps_dir_of};
use crate::vdf::{self, Value};

/// Returns the `steamapps` directories of every library under `root`.
///
/// Never fails: a missing or malformed `libraryfolders.vdf` degrades to the
/// root's own `steamapps` directory.
pub fn list_library_folders(root: &Path) -> Vec<PathBuf> {
    let paths = Paths::with_base(root);
    let config = paths.library_config_path();

    if !config.is_file() {
        tracing::debug!(path = %config.display(), "no library config, using default library");
        return vec![paths.steamapps_dir()];
    }

    match read_library_config(&paths, &config) {
        Ok(folders) => {
            tracing::debug!(count = folders.len(), "library folders resolved");
            folders
        }
        Err(e) => {
            tracing::warn!(path = %config.display(), error = %e, "failed to read library config");
            vec![paths.steamapps_dir()]
        }
    }
}

fn read_library_config(paths: &Paths, config: &Path) -> Result<Vec<PathBuf>, SteamError> {
    let text = vdf::read(config)?;
    let data = vdf::parse(&text)?;
    let entries = vdf::root_obj(&data, "libraryfolders")
        .ok_or_else(|| SteamError::Vdf("missing 'libraryfolders' root".into()))?;

    let mut folders = Vec::new();
    let mut legacy = false;

    for (key, values) in entries.iter() {
        let Some(value) = values.last() else {
            continue;
        };
        let library = match value {
            // Current format: "0" { "path" "..." "apps" { ... } }
            Value::Obj(entry) => match vdf::lookup_str(entry, "path") {
                Some(path) => path,
                None => continue,
            },
            // Legacy format: "1" "D:\\SteamLibrary", alongside non-path
            // metadata such as "TimeNextStatsReport".
            Value::Str(path) => {
                if key.parse::<u32>().is_err() {
                    continue;
                }
                legacy = true;
                &**path
            }
        };
        push_unique(&mut folders, steamapps_dir_of(Path::new(library)));
    }

    // The legacy file only lists secondary libraries.
    if legacy {
        let default = paths.steamapps_dir();
        if !folders.contains(&default) {
            folders.insert(0, default);
        }
    }

    Ok(folders)
}

fn push_unique(folders: &mut Vec<PathBuf>, folder: PathBuf) {
    if !folders.contains(&folder) {
        folders.push(folder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(root: &Path, body: &str) {
        let steamapps = root.join("steamapps");
        fs::create_dir_all(&steamapps).unwrap();
        fs::write(steamapps.join("libraryfolders.vdf"), body).unwrap();
    }

    /// Escapes backslashes so a path survives VDF unescaping.
    fn vdf_path(path: &Path) -> String {
        path.display().to_string().replace('\\', "\\\\")
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let tmp = tempfile::tempdir().unwrap();
        let folders = list_library_folders(tmp.path());
        assert_eq!(folders, vec![tmp.path().join("steamapps")]);
    }

    #[test]
    fn malformed_config_falls_back_to_default() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), r#""libraryfolders" { "0" { "path" "#);
        let folders = list_library_folders(tmp.path());
        assert_eq!(folders, vec![tmp.path().join("steamapps")]);
    }

    #[test]
    fn config_without_root_key_falls_back_to_default() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), r#""somethingelse" { }"#);
        let folders = list_library_folders(tmp.path());
        assert_eq!(folders, vec![tmp.path().join("steamapps")]);
    }

    #[test]
    fn current_format_lists_every_path() {
        let tmp = tempfile::tempdir().unwrap();
        let second = tmp.path().join("second");
        let body = format!(
            r#""libraryfolders"
{{
	"0"
	{{
		"path"		"{root}"
		"label"		""
		"apps" {{ "620" "12884901888" }}
	}}
	"1"
	{{
		"path"		"{second}"
	}}
	"2"
	{{
		"label"		"no path here"
	}}
}}"#,
            root = vdf_path(tmp.path()),
            second = vdf_path(&second),
        );
        write_config(tmp.path(), &body);

        let folders = list_library_folders(tmp.path());
        assert_eq!(
            folders,
            vec![tmp.path().join("steamapps"), second.join("steamapps")]
        );
    }

    #[test]
    fn legacy_format_adds_root_and_skips_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let second = tmp.path().join("second");
        let body = format!(
            r#""LibraryFolders"
{{
	"TimeNextStatsReport"		"1600000000"
	"ContentStatsID"		"-1234"
	"1"		"{second}"
}}"#,
            second = vdf_path(&second),
        );
        write_config(tmp.path(), &body);

        let folders = list_library_folders(tmp.path());
        assert_eq!(
            folders,
            vec![tmp.path().join("steamapps"), second.join("steamapps")]
        );
    }

    #[test]
    fn duplicate_libraries_are_listed_once() {
        let tmp = tempfile::tempdir().unwrap();
        let body = format!(
            r#""libraryfolders" {{ "0" {{ "path" "{root}" }} "1" {{ "path" "{root}" }} }}"#,
            root = vdf_path(tmp.path()),
        );
        write_config(tmp.path(), &body);

        assert_eq!(list_library_folders(tmp.path()).len(), 1);
    }
}
