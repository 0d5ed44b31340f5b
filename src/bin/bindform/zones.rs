// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Implements zone loading.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};

use bindform::zone::Zone;
use bindform::zone_file::{self, SourceFile};

/// The extensions of files picked up when a directory is given.
pub const ZONE_FILE_EXTENSIONS: [&str; 4] = ["zone", "txt", "bind", "db"];

/// Loads and parses the zone files at `paths`. Directories are expanded
/// to the zone files they directly contain.
pub fn load(paths: &[PathBuf]) -> Result<Vec<Zone>> {
    let files = expand(paths)?;
    if files.is_empty() {
        return Err(anyhow!("no zone files supplied"));
    }

    let sources = files
        .iter()
        .map(|path| read_source_file(path))
        .collect::<Result<Vec<_>>>()?;
    if sources.len() == 1 {
        info!("Loaded 1 zone file.");
    } else {
        info!("Loaded {} zone files.", sources.len());
    }
    Ok(zone_file::parse_many(&sources))
}

/// Replaces each directory in `paths` with the zone files it contains,
/// in sorted order. Other paths are kept as they are, whatever their
/// extension.
fn expand(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut entries = fs::read_dir(path)
            .with_context(|| format!("failed to read the directory {}", path.display()))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("failed to read the directory {}", path.display()))?;
        entries.sort();
        for entry in entries {
            if !entry.is_file() {
                continue;
            } else if has_zone_file_extension(&entry) {
                files.push(entry);
            } else {
                warn!("Skipping {}: not a zone file.", entry.display());
            }
        }
    }
    Ok(files)
}

/// Returns whether `path` ends in one of [`ZONE_FILE_EXTENSIONS`]
/// (ignoring case).
fn has_zone_file_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map_or(false, |ext| {
            ZONE_FILE_EXTENSIONS
                .iter()
                .any(|zone_ext| ext.eq_ignore_ascii_case(zone_ext))
        })
}

/// Reads a zone file. Invalid UTF-8 is replaced rather than rejected.
fn read_source_file(path: &Path) -> Result<SourceFile> {
    debug!("Loading {}.", path.display());
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(SourceFile {
        name: path.display().to_string(),
        content: String::from_utf8_lossy(&raw).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_file_extensions_are_recognized() {
        assert!(has_zone_file_extension(Path::new("example.com.zone")));
        assert!(has_zone_file_extension(Path::new("dir/example.DB")));
        assert!(has_zone_file_extension(Path::new("named.bind")));
        assert!(has_zone_file_extension(Path::new("export.txt")));
        assert!(!has_zone_file_extension(Path::new("README.md")));
        assert!(!has_zone_file_extension(Path::new("zone")));
    }

    #[test]
    fn directories_expand_to_sorted_zone_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.zone", "a.db", "notes.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.zone")).unwrap();

        let explicit = PathBuf::from("explicit.conf");
        let files = expand(&[dir.path().to_path_buf(), explicit.clone()]).unwrap();
        assert_eq!(
            files,
            [dir.path().join("a.db"), dir.path().join("b.zone"), explicit]
        );
    }

    #[test]
    fn load_parses_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("1.zone"),
            "$ORIGIN first.test.\nwww IN A 192.0.2.1\n",
        )
        .unwrap();
        fs::write(dir.path().join("2.zone"), "$ORIGIN second.test.\n").unwrap();

        let zones = load(&[dir.path().to_path_buf()]).unwrap();
        let domains: Vec<&str> = zones.iter().map(Zone::domain).collect();
        assert_eq!(domains, ["first.test", "second.test"]);
        assert_eq!(zones[0].records().len(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&[]).is_err());
        assert!(load(&[dir.path().to_path_buf()]).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&[dir.path().join("missing.zone")]).is_err());
    }

    #[test]
    fn separate_temporary_directories_do_not_share_files() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        assert_ne!(first.path(), second.path());
        fs::write(first.path().join("a.zone"), "$ORIGIN a.test.\n").unwrap();
        assert!(load(&[second.path().to_path_buf()]).is_err());
        first.close().unwrap();
    }
}
