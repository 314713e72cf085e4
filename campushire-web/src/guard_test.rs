//! Tests for the route guard decision logic
//!
//! Validates the session/role truth table without touching the browser:
//! redirects themselves are raw location assignments applied by the caller.

#[cfg(test)]
mod tests {
    use crate::guard::{evaluate, RouteDecision};
    use crate::session::Session;
    use shared::models::{StoredUser, UserRole};

    fn session_with_role(role: UserRole) -> Session {
        Session {
            token: "tok".to_string(),
            user: StoredUser {
                full_name: "Meera Iyer".to_string(),
                email: "meera@example.com".to_string(),
                user_type: role,
            },
        }
    }

    #[test]
    fn no_session_redirects_to_login() {
        assert_eq!(evaluate(None, &[]), RouteDecision::RedirectLogin);
        assert_eq!(
            evaluate(None, &[UserRole::Recruiter]),
            RouteDecision::RedirectLogin
        );
    }

    #[test]
    fn empty_role_list_admits_any_session() {
        for role in [
            UserRole::Admin,
            UserRole::Recruiter,
            UserRole::Candidate,
            UserRole::CampusAdmin,
        ] {
            let session = session_with_role(role);
            assert_eq!(evaluate(Some(&session), &[]), RouteDecision::Allow);
        }
    }

    #[test]
    fn wrong_role_redirects_home() {
        let session = session_with_role(UserRole::Candidate);
        assert_eq!(
            evaluate(Some(&session), &[UserRole::Recruiter]),
            RouteDecision::RedirectHome
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let session = session_with_role(UserRole::Recruiter);
        assert_eq!(
            evaluate(Some(&session), &[UserRole::Recruiter]),
            RouteDecision::Allow
        );
    }

    #[test]
    fn any_listed_role_is_allowed() {
        let session = session_with_role(UserRole::CampusAdmin);
        let allowed = [UserRole::Admin, UserRole::CampusAdmin];
        assert_eq!(evaluate(Some(&session), &allowed), RouteDecision::Allow);
    }
}
