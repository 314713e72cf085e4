use shared::models::UserRole;

use crate::nav;
use crate::session::{Session, SessionStore};

const LOGIN_PATH: &str = "/login";
const HOME_PATH: &str = "/";

/// Outcome of a route access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The visitor may stay on the page.
    Allow,
    /// No session; send the visitor to the login page.
    RedirectLogin,
    /// Session present but the role is not permitted; send home.
    RedirectHome,
}

/// Pure access decision. An empty role list admits any authenticated session.
#[must_use]
pub fn evaluate(session: Option<&Session>, allowed_roles: &[UserRole]) -> RouteDecision {
    let Some(session) = session else {
        return RouteDecision::RedirectLogin;
    };
    if !allowed_roles.is_empty() && !allowed_roles.contains(&session.user.user_type) {
        return RouteDecision::RedirectHome;
    }
    RouteDecision::Allow
}

/// Advisory route guard: applies the redirect for a denied visitor and
/// reports whether the caller may proceed. It does not stop anything that
/// already ran before the check.
pub fn protect_route(store: &SessionStore, allowed_roles: &[UserRole]) -> bool {
    match evaluate(store.get().as_ref(), allowed_roles) {
        RouteDecision::Allow => true,
        RouteDecision::RedirectLogin => {
            nav::redirect(LOGIN_PATH);
            false
        }
        RouteDecision::RedirectHome => {
            nav::redirect(HOME_PATH);
            false
        }
    }
}
