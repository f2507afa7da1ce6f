//! Browser Dialogs
//!
//! Blocking `alert` / `prompt` wrappers.

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

/// None when the user cancels
pub fn prompt(message: &str, default: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message_and_default(message, default) {
        Ok(reply) => reply,
        Err(e) => {
            log::warn!("prompt failed: {:?}", e);
            None
        }
    }
}
