// SPDX-License-Identifier: AGPL-3.0
// Pirate Launcher Core - Project root resolution
//
// The launcher ships in the root of the packaged game folder, so the
// directory containing the running executable is the project root.

use crate::types::LauncherError;
use std::path::{Path, PathBuf};

/// Marker file whose presence identifies a valid project root
pub const PROJECT_MARKER: &str = "project.godot";

/// Directory containing the running launcher executable
pub fn launcher_dir() -> Result<PathBuf, LauncherError> {
    let exe = std::env::current_exe().map_err(|e| LauncherError::LauncherPath(e.to_string()))?;
    let dir = exe.parent().ok_or_else(|| {
        LauncherError::LauncherPath("executable has no parent directory".to_string())
    })?;
    Ok(dir.to_path_buf())
}

/// Existence check only, the marker's contents are never read
pub fn ensure_marker(root: &Path) -> Result<(), LauncherError> {
    if root.join(PROJECT_MARKER).exists() {
        Ok(())
    } else {
        Err(LauncherError::MissingMarker(PROJECT_MARKER.to_string()))
    }
}

/// Resolve the launcher's directory and verify it holds the marker
pub fn locate_project_root() -> Result<PathBuf, LauncherError> {
    let root = launcher_dir()?;
    tracing::info!("Project root: {:?}", root);
    ensure_marker(&root)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_marker_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROJECT_MARKER), "[gd_project]").unwrap();
        assert!(ensure_marker(dir.path()).is_ok());
    }

    #[test]
    fn test_marker_absent() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_marker(dir.path()).unwrap_err();
        assert!(matches!(err, LauncherError::MissingMarker(_)));
    }

    #[test]
    fn test_marker_in_subdirectory_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("game");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(PROJECT_MARKER), "").unwrap();
        assert!(ensure_marker(dir.path()).is_err());
    }
}
