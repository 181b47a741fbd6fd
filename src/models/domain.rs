use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::lifecycle::{ApplicationStatus, JobStatus};

/// Candidate education details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default, alias = "cgpa")]
    pub gpa: Option<f64>,
}

/// Candidate profile used as matching input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[validate(length(min = 1, message = "candidate must list at least one skill"))]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub preferred_roles: Vec<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "expected salary cannot be negative"))]
    pub expected_salary: f64,
    #[serde(default)]
    pub education: Option<Education>,
}

/// Job posting used as matching input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Free text such as "2-5 years" or "5+ years"
    #[serde(default)]
    pub experience_required: String,
    #[serde(default)]
    pub location: String,
    /// `[min, max]`; anything shorter is treated as missing
    #[serde(default)]
    pub salary_range: Vec<f64>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-factor scores, each in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_match: f64,
    pub location_match: f64,
    pub salary_match: f64,
    pub experience_match: f64,
    pub role_match: f64,
}

impl MatchBreakdown {
    /// Copy of the breakdown with every factor rounded to two decimals
    pub fn rounded(&self) -> Self {
        Self {
            skill_match: round_to(self.skill_match, 2),
            location_match: round_to(self.location_match, 2),
            salary_match: round_to(self.salary_match, 2),
            experience_match: round_to(self.experience_match, 2),
            role_match: round_to(self.role_match, 2),
        }
    }
}

/// Scored result of one candidate/job pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    #[serde(alias = "match_score")]
    pub overall_score: f64,
    pub breakdown: MatchBreakdown,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation_reason: String,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub location: f64,
    pub salary: f64,
    pub experience: f64,
    pub role: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.skill + self.location + self.salary + self.experience + self.role
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.40,
            location: 0.20,
            salary: 0.15,
            experience: 0.15,
            role: 0.10,
        }
    }
}

/// Registered candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub resume_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Registered job opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Application of a candidate to a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub status: ApplicationStatus,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Audit entry for one status change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub id: String,
    pub application_id: String,
    pub old_status: Option<ApplicationStatus>,
    pub new_status: ApplicationStatus,
    pub changed_at: chrono::DateTime<chrono::Utc>,
    pub notes: Option<String>,
    pub changed_by: Option<String>,
}

/// Round half away from zero to `decimals` places
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
