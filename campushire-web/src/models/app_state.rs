use yewdux::Store;

use crate::session::Session;

/// Reactive copy of the stored session, loaded from the session store on
/// app start and refreshed on login/logout so the navigation re-renders.
/// The session store itself remains the source of truth.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Option<Session>,
}
