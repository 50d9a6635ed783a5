// SPDX-License-Identifier: AGPL-3.0
// Pirate Launcher Core - User notification seam
//
// The launcher has exactly one user-facing surface: a modal error dialog.
// Frontends supply the dialog; headless contexts get the console fallback.

/// Capability for reporting a terminal failure to the user
pub trait UserNotifier {
    /// Present `message` under `title`, blocking until dismissed
    fn show_error(&self, title: &str, message: &str);
}

/// Stderr-backed notifier for non-GUI contexts
pub struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn show_error(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}
