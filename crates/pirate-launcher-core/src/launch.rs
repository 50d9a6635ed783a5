// SPDX-License-Identifier: AGPL-3.0
// Pirate Launcher Core - Engine launch

use crate::types::LauncherError;
use std::path::Path;
use std::process::Command;

/// Start Godot pointed at the project root and return without waiting.
/// The child is fully detached; its exit status is never observed.
pub fn spawn_engine(engine_path: &Path, project_root: &Path) -> Result<(), LauncherError> {
    let child = Command::new(engine_path)
        .arg("--path")
        .arg(project_root)
        .current_dir(project_root)
        .spawn()
        .map_err(|e| LauncherError::Spawn(e.to_string()))?;
    tracing::info!("Godot running as pid {}", child.id());
    Ok(())
}
