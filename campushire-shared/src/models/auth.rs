use serde::{Deserialize, Serialize};

use super::user::StoredUser;

/// Credentials submitted to `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Successful login payload: the bearer token plus the user record the
/// frontend persists alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token attached to subsequent requests.
    pub access_token: String,

    /// Token scheme, always `bearer`.
    pub token_type: String,

    /// The authenticated user's record.
    pub user: StoredUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn login_request_serialization() {
        let request = LoginRequest {
            email: "recruiter@acme.test".to_string(),
            password: "hunter2".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert!(serialized.contains("recruiter@acme.test"));

        let deserialized: LoginRequest = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, request);
    }

    #[test]
    fn login_response_deserializes_backend_payload() {
        let raw = r#"{
            "access_token": "eyJhbGciOi",
            "token_type": "bearer",
            "user": {
                "full_name": "Rahul Verma",
                "email": "rahul@acme.test",
                "user_type": "recruiter"
            }
        }"#;

        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.access_token, "eyJhbGciOi");
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.user.user_type, UserRole::Recruiter);
    }
}
