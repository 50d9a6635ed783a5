// SPDX-License-Identifier: AGPL-3.0
// Pirate Launcher Core - Launch pipeline
//
// Platform guard, marker check, Godot provisioning, then a detached spawn.
// Every failure funnels into the notifier as one dialog and ends the run;
// the success path produces no user-visible output.

use crate::notify::UserNotifier;
use crate::types::LauncherError;
use crate::{engine, launch, platform, project};

/// Title of the one error dialog the launcher can show
pub const DIALOG_TITLE: &str = "PirateRPG Launcher";

/// Run the whole launch sequence, reporting any failure through `notifier`
pub fn run(notifier: &dyn UserNotifier) {
    if let Err(err) = try_run() {
        tracing::error!("Launch failed: {}", err);
        notifier.show_error(DIALOG_TITLE, &err.dialog_message());
    }
}

fn try_run() -> Result<(), LauncherError> {
    platform::ensure_supported()?;
    let project_root = project::locate_project_root()?;
    let engine_path = engine::ensure_engine(&project_root)?;
    launch::spawn_engine(&engine_path, &project_root)
}
