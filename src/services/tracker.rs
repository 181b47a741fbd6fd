use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::lifecycle::{ApplicationStatus, JobStatus, TransitionError};
use crate::models::{
    round_to, Application, ApplicationDetails, ApplicationFilter, ApplicationStats, Candidate,
    CandidateApplicationStats, CreateCandidateRequest, CreateJobRequest, Job, JobApplicationStats,
    JobFilter, StatusHistoryEntry, StatusUpdateRequest, SubmitApplicationRequest,
};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Errors that can occur in the application tracker
#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("Candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Application not found: {0}")]
    ApplicationNotFound(String),

    #[error("Candidate already exists: {0}")]
    DuplicateCandidate(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Job already exists: {0}")]
    DuplicateJob(String),

    #[error("Candidate {candidate_id} already applied to job {job_id}")]
    DuplicateApplication { job_id: String, candidate_id: String },

    #[error("Job is closed: {0}")]
    JobClosed(String),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl TrackerError {
    /// HTTP status this error maps to at the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            TrackerError::CandidateNotFound(_)
            | TrackerError::JobNotFound(_)
            | TrackerError::ApplicationNotFound(_) => 404,
            TrackerError::DuplicateCandidate(_)
            | TrackerError::DuplicateEmail(_)
            | TrackerError::DuplicateJob(_)
            | TrackerError::DuplicateApplication { .. }
            | TrackerError::JobClosed(_) => 409,
            TrackerError::Transition(_) => 422,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TrackerError::CandidateNotFound(_) => "candidate_not_found",
            TrackerError::JobNotFound(_) => "job_not_found",
            TrackerError::ApplicationNotFound(_) => "application_not_found",
            TrackerError::DuplicateCandidate(_) => "duplicate_candidate",
            TrackerError::DuplicateEmail(_) => "duplicate_email",
            TrackerError::DuplicateJob(_) => "duplicate_job",
            TrackerError::DuplicateApplication { .. } => "duplicate_application",
            TrackerError::JobClosed(_) => "job_closed",
            TrackerError::Transition(_) => "illegal_transition",
        }
    }
}

#[derive(Debug, Default)]
struct TrackerState {
    candidates: BTreeMap<String, Candidate>,
    jobs: BTreeMap<String, Job>,
    /// Insertion order is the listing order
    applications: Vec<Application>,
    history: HashMap<String, Vec<StatusHistoryEntry>>,
}

impl TrackerState {
    fn application_mut(&mut self, id: &str) -> Result<&mut Application, TrackerError> {
        self.applications
            .iter_mut()
            .find(|app| app.id == id)
            .ok_or_else(|| TrackerError::ApplicationNotFound(id.to_string()))
    }

    fn application(&self, id: &str) -> Result<&Application, TrackerError> {
        self.applications
            .iter()
            .find(|app| app.id == id)
            .ok_or_else(|| TrackerError::ApplicationNotFound(id.to_string()))
    }
}

/// In-memory application lifecycle tracker
///
/// Stores candidates, jobs and applications and enforces the status
/// transition table. Every accepted status change appends one audit entry.
/// Cloning shares the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct ApplicationTracker {
    state: Arc<RwLock<TrackerState>>,
}

impl ApplicationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate; ids and emails must be unique
    pub async fn create_candidate(&self, req: CreateCandidateRequest) -> Result<Candidate, TrackerError> {
        let mut state = self.state.write().await;

        if state.candidates.contains_key(&req.id) {
            return Err(TrackerError::DuplicateCandidate(req.id));
        }
        let email = req.email.trim().to_lowercase();
        if state.candidates.values().any(|c| c.email == email) {
            return Err(TrackerError::DuplicateEmail(email));
        }

        let now = Utc::now();
        let candidate = Candidate {
            id: req.id,
            name: req.name,
            email,
            resume_url: req.resume_url,
            created_at: now,
            updated_at: now,
        };

        state.candidates.insert(candidate.id.clone(), candidate.clone());
        tracing::info!("Registered candidate {}", candidate.id);
        Ok(candidate)
    }

    pub async fn get_candidate(&self, id: &str) -> Result<Candidate, TrackerError> {
        let state = self.state.read().await;
        state
            .candidates
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::CandidateNotFound(id.to_string()))
    }

    pub async fn list_candidates(&self) -> Vec<Candidate> {
        self.state.read().await.candidates.values().cloned().collect()
    }

    /// Register a job opening
    pub async fn create_job(&self, req: CreateJobRequest) -> Result<Job, TrackerError> {
        let mut state = self.state.write().await;

        if state.jobs.contains_key(&req.id) {
            return Err(TrackerError::DuplicateJob(req.id));
        }

        let now = Utc::now();
        let job = Job {
            id: req.id,
            title: req.title,
            company: req.company,
            status: req.status,
            description: req.description,
            created_at: now,
            updated_at: now,
        };

        state.jobs.insert(job.id.clone(), job.clone());
        tracing::info!("Registered job {} ({})", job.id, job.title);
        Ok(job)
    }

    pub async fn get_job(&self, id: &str) -> Result<Job, TrackerError> {
        let state = self.state.read().await;
        state
            .jobs
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::JobNotFound(id.to_string()))
    }

    pub async fn list_jobs(&self, filter: &JobFilter) -> Vec<Job> {
        let state = self.state.read().await;
        state
            .jobs
            .values()
            .filter(|job| filter.status.map_or(true, |status| job.status == status))
            .cloned()
            .collect()
    }

    /// Submit an application to an open job
    ///
    /// Records the initial `None -> applied` history entry.
    pub async fn submit_application(&self, req: SubmitApplicationRequest) -> Result<Application, TrackerError> {
        let mut state = self.state.write().await;

        let job = state
            .jobs
            .get(&req.job_id)
            .ok_or_else(|| TrackerError::JobNotFound(req.job_id.clone()))?;
        if job.status == JobStatus::Closed {
            return Err(TrackerError::JobClosed(req.job_id));
        }
        if !state.candidates.contains_key(&req.candidate_id) {
            return Err(TrackerError::CandidateNotFound(req.candidate_id));
        }
        if state
            .applications
            .iter()
            .any(|app| app.job_id == req.job_id && app.candidate_id == req.candidate_id)
        {
            return Err(TrackerError::DuplicateApplication {
                job_id: req.job_id,
                candidate_id: req.candidate_id,
            });
        }

        let now = Utc::now();
        let application = Application {
            id: uuid::Uuid::new_v4().to_string(),
            job_id: req.job_id,
            candidate_id: req.candidate_id,
            status: ApplicationStatus::Applied,
            applied_at: now,
            updated_at: now,
        };

        let entry = StatusHistoryEntry {
            id: uuid::Uuid::new_v4().to_string(),
            application_id: application.id.clone(),
            old_status: None,
            new_status: ApplicationStatus::Applied,
            changed_at: now,
            notes: None,
            changed_by: None,
        };

        state.history.insert(application.id.clone(), vec![entry]);
        state.applications.push(application.clone());

        tracing::info!(
            "Application {} submitted: candidate {} -> job {}",
            application.id,
            application.candidate_id,
            application.job_id
        );
        Ok(application)
    }

    /// Move an application along the status table
    ///
    /// Illegal transitions leave both the status and the history untouched.
    pub async fn update_status(
        &self,
        application_id: &str,
        req: StatusUpdateRequest,
    ) -> Result<Application, TrackerError> {
        let mut state = self.state.write().await;

        let application = state.application_mut(application_id)?;
        let old_status = application.status;
        let new_status = match old_status.transition(req.status) {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Rejected status change for {}: {}", application_id, e);
                return Err(e.into());
            }
        };

        let now = Utc::now();
        application.status = new_status;
        application.updated_at = now;
        let updated = application.clone();

        state
            .history
            .entry(application_id.to_string())
            .or_default()
            .push(StatusHistoryEntry {
                id: uuid::Uuid::new_v4().to_string(),
                application_id: application_id.to_string(),
                old_status: Some(old_status),
                new_status,
                changed_at: now,
                notes: req.notes,
                changed_by: req.changed_by,
            });

        tracing::info!("Application {} moved {} -> {}", application_id, old_status, new_status);
        Ok(updated)
    }

    pub async fn get_application(&self, id: &str) -> Result<ApplicationDetails, TrackerError> {
        let state = self.state.read().await;
        let application = state.application(id)?.clone();

        let candidate = state
            .candidates
            .get(&application.candidate_id)
            .cloned()
            .ok_or_else(|| TrackerError::CandidateNotFound(application.candidate_id.clone()))?;
        let job = state
            .jobs
            .get(&application.job_id)
            .cloned()
            .ok_or_else(|| TrackerError::JobNotFound(application.job_id.clone()))?;
        let status_history = state.history.get(id).cloned().unwrap_or_default();

        Ok(ApplicationDetails {
            application,
            candidate,
            job,
            status_history,
        })
    }

    pub async fn status_history(&self, id: &str) -> Result<Vec<StatusHistoryEntry>, TrackerError> {
        let state = self.state.read().await;
        state.application(id)?;
        Ok(state.history.get(id).cloned().unwrap_or_default())
    }

    pub async fn list_applications(&self, filter: &ApplicationFilter) -> Vec<Application> {
        let state = self.state.read().await;
        state
            .applications
            .iter()
            .filter(|app| filter.job_id.as_deref().map_or(true, |id| app.job_id == id))
            .filter(|app| filter.candidate_id.as_deref().map_or(true, |id| app.candidate_id == id))
            .filter(|app| filter.status.map_or(true, |status| app.status == status))
            .cloned()
            .collect()
    }

    /// Tracker-wide statistics
    pub async fn stats(&self) -> ApplicationStats {
        let state = self.state.read().await;

        let mut by_job: BTreeMap<String, usize> = BTreeMap::new();
        for app in &state.applications {
            *by_job.entry(app.job_id.clone()).or_insert(0) += 1;
        }

        let offer_days: Vec<f64> = state
            .applications
            .iter()
            .filter(|app| app.status == ApplicationStatus::Offered)
            .filter_map(|app| {
                state.history.get(&app.id)?.iter().find_map(|entry| {
                    (entry.new_status == ApplicationStatus::Offered).then(|| {
                        (entry.changed_at - app.applied_at).num_seconds() as f64 / SECONDS_PER_DAY
                    })
                })
            })
            .collect();

        let average_time_to_offer = if offer_days.is_empty() {
            None
        } else {
            Some(round_to(offer_days.iter().sum::<f64>() / offer_days.len() as f64, 2))
        };

        let offered = offer_days.len();
        let rejected = state
            .applications
            .iter()
            .filter(|app| app.status == ApplicationStatus::Rejected)
            .count();
        let offer_acceptance_rate = if offered == 0 {
            None
        } else {
            Some(round_to(offered as f64 / (offered + rejected) as f64 * 100.0, 2))
        };

        ApplicationStats {
            total_applications: state.applications.len(),
            by_status: count_by_status(state.applications.iter()),
            by_job,
            total_candidates: state.candidates.len(),
            total_jobs: state.jobs.len(),
            average_time_to_offer,
            offer_acceptance_rate,
        }
    }

    pub async fn job_stats(&self, job_id: &str) -> Result<JobApplicationStats, TrackerError> {
        let state = self.state.read().await;
        let job = state
            .jobs
            .get(job_id)
            .ok_or_else(|| TrackerError::JobNotFound(job_id.to_string()))?;

        let applications: Vec<&Application> =
            state.applications.iter().filter(|app| app.job_id == job_id).collect();

        Ok(JobApplicationStats {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            total_applications: applications.len(),
            by_status: count_by_status(applications.into_iter()),
        })
    }

    pub async fn candidate_stats(&self, candidate_id: &str) -> Result<CandidateApplicationStats, TrackerError> {
        let state = self.state.read().await;
        let candidate = state
            .candidates
            .get(candidate_id)
            .ok_or_else(|| TrackerError::CandidateNotFound(candidate_id.to_string()))?;

        let applications: Vec<&Application> = state
            .applications
            .iter()
            .filter(|app| app.candidate_id == candidate_id)
            .collect();
        let count_of = |status: ApplicationStatus| {
            applications.iter().filter(|app| app.status == status).count()
        };

        Ok(CandidateApplicationStats {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            total_applications: applications.len(),
            offers_received: count_of(ApplicationStatus::Offered),
            rejections: count_of(ApplicationStatus::Rejected),
            by_status: count_by_status(applications.iter().copied()),
        })
    }
}

/// Count applications per status; statuses with no applications are omitted
fn count_by_status<'a, I>(applications: I) -> BTreeMap<String, usize>
where
    I: Iterator<Item = &'a Application>,
{
    let mut counts = BTreeMap::new();
    for app in applications {
        *counts.entry(app.status.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (ApplicationTracker, Application) {
        let tracker = ApplicationTracker::new();
        tracker
            .create_candidate(CreateCandidateRequest {
                id: "cand-001".to_string(),
                name: "Alice Johnson".to_string(),
                email: "Alice@Example.com".to_string(),
                resume_url: None,
            })
            .await
            .unwrap();
        tracker
            .create_job(CreateJobRequest {
                id: "job-001".to_string(),
                title: "Senior Full Stack Developer".to_string(),
                company: "TechCorp Inc".to_string(),
                description: None,
                status: JobStatus::Open,
            })
            .await
            .unwrap();
        let app = tracker
            .submit_application(SubmitApplicationRequest {
                job_id: "job-001".to_string(),
                candidate_id: "cand-001".to_string(),
            })
            .await
            .unwrap();
        (tracker, app)
    }

    fn update(status: ApplicationStatus) -> StatusUpdateRequest {
        StatusUpdateRequest {
            status,
            notes: Some(format!("moved to {}", status)),
            changed_by: Some("recruiter-1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_submit_records_initial_history() {
        let (tracker, app) = seeded().await;

        assert_eq!(app.status, ApplicationStatus::Applied);
        let history = tracker.status_history(&app.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].old_status, None);
        assert_eq!(history[0].new_status, ApplicationStatus::Applied);
    }

    #[tokio::test]
    async fn test_valid_transition_appends_history() {
        let (tracker, app) = seeded().await;

        let updated = tracker
            .update_status(&app.id, update(ApplicationStatus::Screening))
            .await
            .unwrap();

        assert_eq!(updated.status, ApplicationStatus::Screening);
        let details = tracker.get_application(&app.id).await.unwrap();
        assert_eq!(details.status_history.len(), 2);
        assert_eq!(details.status_history[1].old_status, Some(ApplicationStatus::Applied));
        assert_eq!(details.status_history[1].changed_by.as_deref(), Some("recruiter-1"));
        assert_eq!(details.candidate.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_illegal_transition_leaves_state_untouched() {
        let (tracker, app) = seeded().await;

        let err = tracker
            .update_status(&app.id, update(ApplicationStatus::Offered))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 422);
        let details = tracker.get_application(&app.id).await.unwrap();
        assert_eq!(details.application.status, ApplicationStatus::Applied);
        assert_eq!(details.status_history.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_application_rejected() {
        let (tracker, _) = seeded().await;

        let err = tracker
            .submit_application(SubmitApplicationRequest {
                job_id: "job-001".to_string(),
                candidate_id: "cand-001".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "duplicate_application");
    }

    #[tokio::test]
    async fn test_closed_job_rejects_applications() {
        let (tracker, _) = seeded().await;
        tracker
            .create_job(CreateJobRequest {
                id: "job-002".to_string(),
                title: "Data Engineer".to_string(),
                company: "DataCo".to_string(),
                description: None,
                status: JobStatus::Closed,
            })
            .await
            .unwrap();

        let err = tracker
            .submit_application(SubmitApplicationRequest {
                job_id: "job-002".to_string(),
                candidate_id: "cand-001".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, TrackerError::JobClosed("job-002".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (tracker, _) = seeded().await;

        let err = tracker
            .create_candidate(CreateCandidateRequest {
                id: "cand-002".to_string(),
                name: "Alice Again".to_string(),
                email: "alice@example.com".to_string(),
                resume_url: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "duplicate_email");
    }

    #[tokio::test]
    async fn test_stats() {
        let (tracker, app) = seeded().await;
        for status in [
            ApplicationStatus::Screening,
            ApplicationStatus::InterviewScheduled,
            ApplicationStatus::InterviewCompleted,
            ApplicationStatus::Offered,
        ] {
            tracker.update_status(&app.id, update(status)).await.unwrap();
        }

        let stats = tracker.stats().await;
        assert_eq!(stats.total_applications, 1);
        assert_eq!(stats.by_status.get("offered"), Some(&1));
        assert_eq!(stats.by_job.get("job-001"), Some(&1));
        assert_eq!(stats.total_candidates, 1);
        assert_eq!(stats.total_jobs, 1);
        assert!(stats.average_time_to_offer.is_some());
        assert_eq!(stats.offer_acceptance_rate, Some(100.0));

        let candidate = tracker.candidate_stats("cand-001").await.unwrap();
        assert_eq!(candidate.offers_received, 1);
        assert_eq!(candidate.rejections, 0);

        let job = tracker.job_stats("job-001").await.unwrap();
        assert_eq!(job.total_applications, 1);
        assert_eq!(job.job_title, "Senior Full Stack Developer");
    }

    #[tokio::test]
    async fn test_offer_rate_over_closed_applications() {
        let (tracker, offered) = seeded().await;
        assert_eq!(tracker.stats().await.offer_acceptance_rate, None);

        for status in [
            ApplicationStatus::Screening,
            ApplicationStatus::InterviewScheduled,
            ApplicationStatus::InterviewCompleted,
            ApplicationStatus::Offered,
        ] {
            tracker.update_status(&offered.id, update(status)).await.unwrap();
        }

        for id in ["cand-002", "cand-003"] {
            tracker
                .create_candidate(CreateCandidateRequest {
                    id: id.to_string(),
                    name: format!("Candidate {}", id),
                    email: format!("{}@example.com", id),
                    resume_url: None,
                })
                .await
                .unwrap();
            tracker
                .submit_application(SubmitApplicationRequest {
                    job_id: "job-001".to_string(),
                    candidate_id: id.to_string(),
                })
                .await
                .unwrap();
        }

        let pending = tracker
            .list_applications(&ApplicationFilter {
                candidate_id: Some("cand-002".to_string()),
                ..Default::default()
            })
            .await;
        tracker
            .update_status(&pending[0].id, update(ApplicationStatus::Rejected))
            .await
            .unwrap();

        // cand-003 is still open and does not count
        let stats = tracker.stats().await;
        assert_eq!(stats.offer_acceptance_rate, Some(50.0));
    }

    #[tokio::test]
    async fn test_list_applications_filters() {
        let (tracker, _) = seeded().await;

        let by_job = tracker
            .list_applications(&ApplicationFilter {
                job_id: Some("job-001".to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(by_job.len(), 1);

        let rejected = tracker
            .list_applications(&ApplicationFilter {
                status: Some(ApplicationStatus::Rejected),
                ..Default::default()
            })
            .await;
        assert!(rejected.is_empty());
    }

    #[tokio::test]
    async fn test_missing_application() {
        let tracker = ApplicationTracker::new();
        let err = tracker.get_application("nope").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
