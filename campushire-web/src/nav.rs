use shared::models::UserRole;

use crate::session::Session;

/// Jobs listing for candidates and anonymous visitors.
pub const JOBS_PATH: &str = "/jobs";
/// Jobs management view for recruiters.
pub const RECRUITER_JOBS_PATH: &str = "/recruiter/jobs";

/// What the navigation bar should show, derived from the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    /// Whether the user menu (vs. the auth buttons) is shown.
    pub authenticated: bool,
    /// Display name for the user menu.
    pub user_name: Option<String>,
    /// Role-dependent target of the jobs link.
    pub jobs_href: &'static str,
}

/// Derive the navigation state from the session. Anonymous visitors get the
/// auth buttons and the default jobs destination.
#[must_use]
pub fn nav_view(session: Option<&Session>) -> NavView {
    match session {
        Some(session) => NavView {
            authenticated: true,
            user_name: Some(session.user.full_name.clone()),
            jobs_href: jobs_destination(session.user.user_type),
        },
        None => NavView {
            authenticated: false,
            user_name: None,
            jobs_href: JOBS_PATH,
        },
    }
}

/// Fixed role-to-destination table for the jobs link.
#[must_use]
pub fn jobs_destination(role: UserRole) -> &'static str {
    match role {
        UserRole::Recruiter => RECRUITER_JOBS_PATH,
        _ => JOBS_PATH,
    }
}

/// Raw location assignment, the only navigation mechanism used outside the
/// page router.
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::StoredUser;

    fn session_with_role(role: UserRole) -> Session {
        Session {
            token: "tok".to_string(),
            user: StoredUser {
                full_name: "Asha Nair".to_string(),
                email: "asha@example.com".to_string(),
                user_type: role,
            },
        }
    }

    #[test]
    fn anonymous_view_shows_auth_buttons() {
        let view = nav_view(None);
        assert!(!view.authenticated);
        assert!(view.user_name.is_none());
        assert_eq!(view.jobs_href, JOBS_PATH);
    }

    #[test]
    fn authenticated_view_shows_user_menu() {
        let session = session_with_role(UserRole::Candidate);
        let view = nav_view(Some(&session));
        assert!(view.authenticated);
        assert_eq!(view.user_name.as_deref(), Some("Asha Nair"));
        assert_eq!(view.jobs_href, JOBS_PATH);
    }

    #[test]
    fn recruiter_gets_recruiter_jobs_link() {
        let session = session_with_role(UserRole::Recruiter);
        let view = nav_view(Some(&session));
        assert_eq!(view.jobs_href, RECRUITER_JOBS_PATH);
    }

    #[test]
    fn jobs_destination_table() {
        assert_eq!(jobs_destination(UserRole::Recruiter), RECRUITER_JOBS_PATH);
        assert_eq!(jobs_destination(UserRole::Candidate), JOBS_PATH);
        assert_eq!(jobs_destination(UserRole::Admin), JOBS_PATH);
        assert_eq!(jobs_destination(UserRole::CampusAdmin), JOBS_PATH);
    }
}
