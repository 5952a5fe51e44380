//! Session Persistence
//!
//! Best-effort snapshot of the session state in origin-scoped localStorage.
//! Writes never propagate failures; a snapshot that is missing or fails to
//! parse reads back as `None`.

use crate::state::session::SessionState;

/// Fixed localStorage key for the session snapshot.
const STORAGE_KEY: &str = "quoteboard_session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Write the full session snapshot. Failures are silently ignored.
pub fn save(state: &SessionState) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(state) {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
}

/// Read the stored snapshot, if one exists and parses.
pub fn load() -> Option<SessionState> {
    let storage = local_storage()?;
    let json = storage.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

/// Delete the stored snapshot.
pub fn remove() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use crate::state::session::SessionState;

    fn snapshot() -> SessionState {
        SessionState {
            username: "bob".to_string(),
            password: "".to_string(),
            token: "tok-abc".to_string(),
            quote: "Chuck counted to infinity. Twice.".to_string(),
            protected_quote: "Chuck wins.".to_string(),
            error_msg: "".to_string(),
        }
    }

    #[test]
    fn test_snapshot_uses_wire_field_names() {
        let json = serde_json::to_string(&snapshot()).unwrap();
        assert!(json.contains("\"protectedQuote\":\"Chuck wins.\""));
        assert!(json.contains("\"errorMsg\":\"\""));
        assert!(json.contains("\"username\":\"bob\""));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let state = snapshot();
        let json = serde_json::to_string(&state).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_garbage_snapshot_fails_to_parse() {
        assert!(serde_json::from_str::<SessionState>("{not json").is_err());
        assert!(serde_json::from_str::<SessionState>("{\"username\":1}").is_err());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_load_remove_round_trip() {
        let state = SessionState {
            username: "bob".to_string(),
            token: "tok".to_string(),
            ..SessionState::default()
        };

        save(&state);
        assert_eq!(load(), Some(state));

        remove();
        assert_eq!(load(), None);
    }
}
