//! Session Storage
//!
//! The logged-in username, kept in `localStorage` across reloads.

use log::warn;

const USERNAME_KEY: &str = "coopera.username";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_username() -> Option<String> {
    storage()?
        .get_item(USERNAME_KEY)
        .ok()
        .flatten()
        .filter(|name| !name.trim().is_empty())
}

pub fn store_username(username: &str) {
    match storage() {
        Some(s) if s.set_item(USERNAME_KEY, username).is_ok() => {}
        _ => warn!("[SESSION] could not persist username"),
    }
}

pub fn clear() {
    if let Some(s) = storage() {
        let _ = s.remove_item(USERNAME_KEY);
    }
}
