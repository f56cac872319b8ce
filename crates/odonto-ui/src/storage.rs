//! Session persistence under fixed localStorage keys. Every helper is
//! a silent no-op outside a browser context.

use odonto_shared::UserDto;

const TOKEN_STORAGE_KEY: &str = "TOKEN";
const USER_STORAGE_KEY: &str = "USER";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn load_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

pub fn load_user() -> Option<UserDto> {
    let raw = local_storage().and_then(|storage| storage.get_item(USER_STORAGE_KEY).ok().flatten())?;

    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(error) => {
            tracing::warn!(%error, "stored user was unreadable; clearing the slot");
            clear_user();
            None
        }
    }
}

pub fn save_user(user: &UserDto) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(user) {
        let _ = storage.set_item(USER_STORAGE_KEY, &raw);
    }
}

pub fn clear_user() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_STORAGE_KEY);
    }
}

pub fn clear_session() {
    clear_token();
    clear_user();
}
