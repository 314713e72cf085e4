use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad category of a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Technical,
    NonTechnical,
}

/// Lifecycle state of a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Active,
    Closed,
}

/// A job posting as listed on the jobs pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSummary {
    /// Backend identifier for the posting.
    pub id: String,

    /// Posting title.
    pub title: String,

    /// Name of the hiring company.
    pub company_name: String,

    /// Job location.
    pub location: String,

    /// Broad category of the role.
    pub job_type: JobType,

    /// Free-form experience requirement, e.g. "fresher" or "0-2 years".
    pub experience_level: String,

    /// Optional advertised salary range.
    pub salary_range: Option<String>,

    /// Number of open positions.
    pub vacancies: u32,

    /// Current lifecycle state.
    pub status: JobStatus,

    /// When the posting was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_job() -> JobSummary {
        JobSummary {
            id: "job-101".to_string(),
            title: "Backend Engineer".to_string(),
            company_name: "Acme Systems".to_string(),
            location: "Bengaluru".to_string(),
            job_type: JobType::Technical,
            experience_level: "fresher".to_string(),
            salary_range: Some("6-8 LPA".to_string()),
            vacancies: 3,
            status: JobStatus::Active,
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn job_summary_roundtrip() {
        let job = sample_job();
        let serialized = serde_json::to_string(&job).unwrap();
        let deserialized: JobSummary = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, job);
    }

    #[test]
    fn job_enums_use_snake_case() {
        assert_eq!(
            serde_json::to_string(&JobType::NonTechnical).unwrap(),
            "\"non_technical\""
        );
        assert_eq!(
            serde_json::to_string(&JobStatus::Active).unwrap(),
            "\"active\""
        );
    }

    #[test]
    fn job_summary_tolerates_missing_salary() {
        let raw = r#"{
            "id": "job-7",
            "title": "Campus Ambassador",
            "company_name": "Acme Systems",
            "location": "Remote",
            "job_type": "non_technical",
            "experience_level": "fresher",
            "salary_range": null,
            "vacancies": 1,
            "status": "active",
            "created_at": "2026-02-11T08:00:00Z"
        }"#;

        let job: JobSummary = serde_json::from_str(raw).unwrap();
        assert!(job.salary_range.is_none());
        assert_eq!(job.job_type, JobType::NonTechnical);
    }
}
