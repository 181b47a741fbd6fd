// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    round_to, Application, Candidate, CandidateProfile, Education, Job, JobPosting, MatchBreakdown,
    MatchResult, ScoringWeights, StatusHistoryEntry,
};
pub use requests::{
    ApplicationFilter, CreateCandidateRequest, CreateJobRequest, GapAnalysisRequest, GapCandidate,
    JobFilter, MatchingRequest, SingleMatchRequest, StatusUpdateRequest, SubmitApplicationRequest,
    TargetRole,
};
pub use responses::{
    ApplicationDetails, ApplicationStats, CandidateApplicationStats, ErrorResponse, GapAnalysis,
    GapAnalysisResponse, HealthResponse, JobApplicationStats, MatchingResponse, RadarPoint,
    RoadmapPhase, SalaryPoint, WeightsResponse,
};
