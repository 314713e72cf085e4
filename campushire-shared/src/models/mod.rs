pub mod auth;
pub mod job;
pub mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use job::{JobStatus, JobSummary, JobType};
pub use user::{ParseUserRoleError, StoredUser, UserRole};
