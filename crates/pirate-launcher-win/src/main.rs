// SPDX-License-Identifier: AGPL-3.0
// Pirate Launcher Win - Windows frontend
//
// Ships as RunPirateRPG.exe in the root of the packaged game folder.

#![windows_subsystem = "windows"]

use pirate_launcher_core::UserNotifier;

/// Modal message box styled as an error; stderr if the box cannot be shown
struct DialogNotifier;

impl UserNotifier for DialogNotifier {
    fn show_error(&self, title: &str, message: &str) {
        if let Err(e) = msgbox::create(title, message, msgbox::IconType::Error) {
            eprintln!("{}: {}", title, message);
            eprintln!("msgbox::create failed: {}", e);
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pirate_launcher_win=info".parse().unwrap())
                .add_directive("pirate_launcher_core=info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting PirateRPG launcher v{}", env!("CARGO_PKG_VERSION"));

    pirate_launcher_core::run(&DialogNotifier);
}
