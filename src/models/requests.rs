use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::lifecycle::{ApplicationStatus, JobStatus};
use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to rank a candidate against several jobs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchingRequest {
    #[validate(nested)]
    pub candidate: CandidateProfile,
    #[validate(length(min = 1, message = "at least one job is required"))]
    pub jobs: Vec<JobPosting>,
}

/// Request to score a candidate against a single job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SingleMatchRequest {
    #[validate(nested)]
    pub candidate: CandidateProfile,
    pub job: JobPosting,
}

/// Candidate side of a skills-gap analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapCandidate {
    #[serde(default)]
    pub current_role: String,
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub education: String,
}

/// Role the candidate is aiming for
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TargetRole {
    #[validate(length(min = 1))]
    pub title: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub typical_experience: String,
}

/// Request for a skills-gap analysis
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GapAnalysisRequest {
    pub candidate: GapCandidate,
    #[validate(nested)]
    pub target_role: TargetRole,
}

/// Request to register a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidateRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// Request to register a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
}

/// Request to submit an application
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 1))]
    pub job_id: String,
    #[validate(length(min = 1))]
    pub candidate_id: String,
}

/// Request to move an application to a new status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub changed_by: Option<String>,
}

/// Filters for listing applications
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationFilter {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}

/// Filters for listing jobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(default)]
    pub status: Option<JobStatus>,
}
