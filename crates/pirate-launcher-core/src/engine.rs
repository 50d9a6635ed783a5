// SPDX-License-Identifier: AGPL-3.0
// Pirate Launcher Core - Godot provisioning
//
// The game pins one Godot build. When the executable is already in place
// the step is a no-op; otherwise the release zip is fetched to a temp file,
// the single executable entry is extracted, and the temp file is removed.

use crate::types::LauncherError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Pinned engine version; URL and executable name must match it
pub const GODOT_VERSION: &str = "4.2.2";
pub const GODOT_ARCHIVE_URL: &str =
    "https://github.com/godotengine/godot/releases/download/4.2.2-stable/Godot_v4.2.2-stable_win64.exe.zip";
pub const GODOT_EXE_NAME: &str = "Godot_v4.2.2-stable_win64.exe";

/// Expected engine location under the project root
pub fn engine_path(project_root: &Path) -> PathBuf {
    project_root.join("tools").join("godot").join(GODOT_EXE_NAME)
}

/// Ensure the pinned Godot build is present, fetching it on first run
pub fn ensure_engine(project_root: &Path) -> Result<PathBuf, LauncherError> {
    let exe_path = engine_path(project_root);
    fetch_engine(GODOT_ARCHIVE_URL, GODOT_EXE_NAME, &exe_path)?;
    Ok(exe_path)
}

/// Presence check, then download-and-extract. Split out from
/// [`ensure_engine`] so the archive URL can point at a local stub in tests.
pub fn fetch_engine(
    archive_url: &str,
    exe_name: &str,
    exe_path: &Path,
) -> Result<(), LauncherError> {
    // Existence only. No integrity or version check of the file contents.
    if exe_path.exists() {
        tracing::info!("Godot already present at {:?}", exe_path);
        return Ok(());
    }

    if let Some(parent) = exe_path.parent() {
        fs::create_dir_all(parent)?;
    }

    tracing::info!("Downloading Godot {} from {}", GODOT_VERSION, archive_url);
    // The temp archive is deleted on drop, on success and failure alike.
    let archive = download_archive(archive_url)?;
    extract_executable(archive.path(), exe_name, exe_path)?;
    tracing::info!("Installed {:?}", exe_path);
    Ok(())
}

fn download_archive(url: &str) -> Result<tempfile::NamedTempFile, LauncherError> {
    // No overall timeout, the release zip is large and transfers may be slow.
    let client = reqwest::blocking::Client::builder().timeout(None).build()?;

    let mut response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(LauncherError::DownloadStatus(response.status().to_string()));
    }

    let mut archive = tempfile::Builder::new()
        .prefix("pirate-rpg-godot-")
        .suffix(".zip")
        .tempfile()?;
    io::copy(&mut response, &mut archive)?;
    Ok(archive)
}

fn extract_executable(
    archive_path: &Path,
    exe_name: &str,
    dest: &Path,
) -> Result<(), LauncherError> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let entry_name = entry.name().to_string();
        if !base_name(&entry_name).eq_ignore_ascii_case(exe_name) {
            continue;
        }

        tracing::debug!("Extracting {} to {:?}", entry_name, dest);
        let mut out = fs::File::create(dest)?;
        io::copy(&mut entry, &mut out)?;
        return Ok(());
    }

    Err(LauncherError::MissingExecutable(exe_name.to_string()))
}

/// Final path component of a zip entry name; entries may use either separator
fn base_name(entry_name: &str) -> &str {
    entry_name.rsplit(['/', '\\']).next().unwrap_or(entry_name)
}
