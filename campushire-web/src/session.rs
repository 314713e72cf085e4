use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::models::StoredUser;

use crate::nav;

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// An authenticated browser session: the opaque token plus the user record
/// written alongside it by the login flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: StoredUser,
}

/// Session service over browser local storage. Every caller reads fresh state
/// through this type; nothing is cached between checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The current session, or `None` when either entry is absent or the
    /// stored user record does not parse. Token and user are only ever
    /// written together, so a half-present pair is treated as logged out.
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        session_from_parts(self.token(), LocalStorage::get(USER_KEY).ok())
    }

    /// The bearer token, if one is stored.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    /// Persist both session entries. A rejected write removes the pair again
    /// so a half-written session never lingers.
    pub fn set(&self, session: &Session) {
        let wrote = LocalStorage::set(TOKEN_KEY, &session.token)
            .and(LocalStorage::set(USER_KEY, &session.user));
        self.finish_write(wrote);
    }

    fn finish_write(&self, wrote: Result<(), StorageError>) {
        if let Err(err) = wrote {
            web_sys::console::error_1(&format!("failed to store session: {err}").into());
            self.clear();
        }
    }

    /// Remove both session entries. Safe to call when already logged out.
    pub fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

/// Presence truth table: a session exists only when both entries are present.
#[must_use]
pub fn session_from_parts(token: Option<String>, user: Option<StoredUser>) -> Option<Session> {
    match (token, user) {
        (Some(token), Some(user)) => Some(Session { token, user }),
        _ => None,
    }
}

/// Clear the stored session and return to the landing page. Idempotent; no
/// server-side invalidation is performed.
pub fn logout() {
    SessionStore::new().clear();
    nav::redirect("/");
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn sample_user() -> StoredUser {
        StoredUser {
            full_name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            user_type: UserRole::Candidate,
        }
    }

    #[test]
    fn session_requires_both_parts() {
        let token = Some("tok-1".to_string());
        let user = Some(sample_user());

        assert!(session_from_parts(token.clone(), user.clone()).is_some());
        assert!(session_from_parts(token, None).is_none());
        assert!(session_from_parts(None, user).is_none());
        assert!(session_from_parts(None, None).is_none());
    }

    #[test]
    fn session_carries_token_and_user() {
        let session =
            session_from_parts(Some("tok-2".to_string()), Some(sample_user())).unwrap();
        assert_eq!(session.token, "tok-2");
        assert_eq!(session.user.full_name, "Priya Sharma");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use shared::models::UserRole;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_session() -> Session {
        Session {
            token: "tok-wasm".to_string(),
            user: StoredUser {
                full_name: "Rahul Verma".to_string(),
                email: "rahul@acme.test".to_string(),
                user_type: UserRole::Recruiter,
            },
        }
    }

    #[wasm_bindgen_test]
    fn set_get_clear_roundtrip() {
        let store = SessionStore::new();
        store.clear();
        assert!(store.get().is_none());

        store.set(&sample_session());
        let session = store.get().expect("session should be stored");
        assert_eq!(session.token, "tok-wasm");
        assert_eq!(session.user.user_type, UserRole::Recruiter);

        store.clear();
        assert!(store.get().is_none());
        assert!(store.token().is_none());
    }

    #[wasm_bindgen_test]
    fn clear_is_idempotent() {
        let store = SessionStore::new();
        store.clear();
        store.clear();
        assert!(store.get().is_none());
    }

    #[wasm_bindgen_test]
    fn rejected_write_rolls_back_both_entries() {
        let store = SessionStore::new();
        store.set(&sample_session());
        assert!(store.get().is_some());

        let err = serde_json::from_str::<Session>("{").unwrap_err();
        store.finish_write(Err(err.into()));

        assert!(store.token().is_none());
        assert!(store.get().is_none());
    }

    #[wasm_bindgen_test]
    fn malformed_user_record_reads_as_anonymous() {
        use gloo_storage::{LocalStorage, Storage};

        let store = SessionStore::new();
        store.clear();
        let _ = LocalStorage::set(TOKEN_KEY, &"tok-broken".to_string());
        LocalStorage::raw().set_item(USER_KEY, "{not json").unwrap();

        assert!(store.get().is_none());
        store.clear();
    }
}
