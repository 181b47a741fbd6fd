use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::{Application, Candidate, Job, MatchResult, ScoringWeights, StatusHistoryEntry};

/// Ranked matches for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingResponse {
    pub matches: Vec<MatchResult>,
    pub total_matches: usize,
}

/// Weight table exposed for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsResponse {
    pub weights: ScoringWeights,
    pub total: f64,
}

/// Summary numbers of a skills-gap analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_gap_percentage: f64,
    pub readiness_score: f64,
    pub estimated_learning_time_months: f64,
}

/// One study phase of a learning roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: u32,
    pub duration_months: f64,
    pub focus: String,
    pub skills_to_learn: Vec<String>,
    pub priority: String,
    pub reasoning: String,
}

/// Skill coverage for one radar category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    pub current: u32,
    pub target: u32,
    pub full_mark: u32,
}

/// Projected salary after completing the roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPoint {
    pub year: String,
    pub salary: u64,
    pub role: String,
}

/// Full skills-gap analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysisResponse {
    pub analysis: GapAnalysis,
    pub learning_roadmap: Vec<RoadmapPhase>,
    pub radar_data: Vec<RadarPoint>,
    pub salary_growth: Vec<SalaryPoint>,
}

/// Application together with its candidate, job and audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    #[serde(flatten)]
    pub application: Application,
    pub candidate: Candidate,
    pub job: Job,
    pub status_history: Vec<StatusHistoryEntry>,
}

/// Tracker-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub total_applications: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_job: BTreeMap<String, usize>,
    pub total_candidates: usize,
    pub total_jobs: usize,
    /// Days from application to offer, averaged over offered applications
    pub average_time_to_offer: Option<f64>,
    /// Percentage of closed applications (offered or rejected) that ended in
    /// an offer; `None` while no offer exists
    pub offer_acceptance_rate: Option<f64>,
}

/// Statistics for one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationStats {
    pub job_id: String,
    pub job_title: String,
    pub total_applications: usize,
    pub by_status: BTreeMap<String, usize>,
}

/// Statistics for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateApplicationStats {
    pub candidate_id: String,
    pub candidate_name: String,
    pub total_applications: usize,
    pub by_status: BTreeMap<String, usize>,
    pub offers_received: usize,
    pub rejections: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
