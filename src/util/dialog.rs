//! Blocking browser dialogs.
//!
//! Wraps `window.alert` / `window.confirm` in the browser build. Native
//! builds are inert: alerts vanish and confirms decline, which keeps
//! destructive flows no-ops under `cargo test`.

/// Fire-and-forget notification.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Ask the user to confirm a destructive action. Declines on the host.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
