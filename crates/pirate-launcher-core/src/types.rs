// SPDX-License-Identifier: AGPL-3.0
// Pirate Launcher Core - Type definitions

use crate::engine::GODOT_VERSION;
use crate::project::PROJECT_MARKER;

/// Error types for the launcher
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("Unsupported host platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Unable to locate launcher executable: {0}")]
    LauncherPath(String),

    #[error("Project marker {0} is missing")]
    MissingMarker(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Download request failed with status {0}")]
    DownloadStatus(String),

    #[error("File I/O error: {0}")]
    FileIo(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("{0} was not found in the downloaded archive")]
    MissingExecutable(String),

    #[error("Process spawn failed: {0}")]
    Spawn(String),
}

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        LauncherError::FileIo(err.to_string())
    }
}

impl From<reqwest::Error> for LauncherError {
    fn from(err: reqwest::Error) -> Self {
        LauncherError::Network(err.to_string())
    }
}

impl From<zip::result::ZipError> for LauncherError {
    fn from(err: zip::result::ZipError) -> Self {
        LauncherError::Archive(err.to_string())
    }
}

impl LauncherError {
    /// Message shown in the error dialog. Every failure class maps to one
    /// sentence an end user can act on.
    pub fn dialog_message(&self) -> String {
        match self {
            LauncherError::UnsupportedPlatform(_) => {
                "This launcher is intended for Windows only.".to_string()
            }
            LauncherError::LauncherPath(cause) => {
                format!("Unable to locate launcher executable: {}", cause)
            }
            LauncherError::MissingMarker(_) => format!(
                "{} was not found next to this launcher. \
                 Keep RunPirateRPG.exe in the root of the PirateRPG folder.",
                PROJECT_MARKER
            ),
            LauncherError::Spawn(cause) => format!("Failed to start Godot: {}", cause),
            other => format!("Failed to prepare Godot {}: {}", GODOT_VERSION, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_message_names_the_launcher_exe() {
        let msg = LauncherError::MissingMarker(PROJECT_MARKER.to_string()).dialog_message();
        assert!(msg.contains("project.godot"));
        assert!(msg.contains("RunPirateRPG.exe"));
    }

    #[test]
    fn test_provisioning_failures_name_the_pinned_version() {
        let msg = LauncherError::DownloadStatus("404 Not Found".to_string()).dialog_message();
        assert!(msg.starts_with("Failed to prepare Godot 4.2.2"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::FileIo(_)));
    }
}
