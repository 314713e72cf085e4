use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Account classification gating UI and route access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Recruiter,
    Candidate,
    CampusAdmin,
}

impl UserRole {
    /// Return the canonical string representation expected by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Recruiter => "recruiter",
            Self::Candidate => "candidate",
            Self::CampusAdmin => "campus_admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when a role string does not name a known role.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(String);

impl FromStr for UserRole {
    type Err = ParseUserRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "recruiter" => Ok(Self::Recruiter),
            "candidate" => Ok(Self::Candidate),
            "campus_admin" => Ok(Self::CampusAdmin),
            other => Err(ParseUserRoleError(other.to_string())),
        }
    }
}

/// The user record persisted by the login flow and read on every page load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredUser {
    /// Display name shown in the navigation user menu.
    pub full_name: String,

    /// The user's email address.
    pub email: String,

    /// Role gating navigation targets and guarded routes.
    pub user_type: UserRole,
}
