use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use shared_types::{AdminProfile, Session};

const TOKEN_KEY: &str = "admin_token";
const PROFILE_KEY: &str = "admin_data";

/// Global session state, persisted to local storage so a reload keeps
/// the admin signed in.
#[derive(Clone, Copy)]
pub struct SessionState {
    current: Signal<Option<Session>>,
}

impl SessionState {
    /// Rebuild the session from local storage, if one was persisted.
    pub fn restore() -> Self {
        let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let admin: Option<AdminProfile> = LocalStorage::get(PROFILE_KEY).ok();
        let session = token.map(|token| Session {
            token,
            admin: admin.unwrap_or_default(),
        });

        SessionState {
            current: Signal::new(session),
        }
    }

    pub fn log_in(&self, session: Session) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, &session.token) {
            tracing::warn!("failed to persist session token: {err}");
        }
        if let Err(err) = LocalStorage::set(PROFILE_KEY, &session.admin) {
            tracing::warn!("failed to persist admin profile: {err}");
        }
        let mut current = self.current;
        current.set(Some(session));
    }

    pub fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(PROFILE_KEY);
        let mut current = self.current;
        current.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.token.clone())
    }

    /// Display name for the header: the admin's name, falling back to
    /// their email.
    pub fn display_name(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| {
            s.admin
                .name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| s.admin.email.clone())
        })
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
