mod error;
mod home;
mod jobs;
pub mod login;
mod recruiter_jobs;

pub use error::ErrorPage;
pub use home::HomePage;
pub use jobs::JobsPage;
pub use login::LoginPage;
pub use recruiter_jobs::RecruiterJobsPage;
