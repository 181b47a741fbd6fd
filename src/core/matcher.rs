use std::sync::Arc;

use crate::core::{
    aggregate::{overall_score, recommendation_reason, MatchError},
    scoring::{score_experience, score_location, score_role, score_salary, score_skills},
    taxonomy::SkillTaxonomy,
};
use crate::models::{CandidateProfile, JobPosting, MatchBreakdown, MatchResult, MatchingResponse, ScoringWeights};

/// Main matching orchestrator
///
/// # Pipeline
/// 1. Skill, location, salary, experience and role factor scoring
/// 2. Weighted aggregation into an overall score
/// 3. Stable descending sort across all jobs
///
/// Holds only read-only state, so clones are cheap and can be handed to
/// every worker.
#[derive(Debug, Clone)]
pub struct Matcher {
    taxonomy: Arc<SkillTaxonomy>,
    weights: ScoringWeights,
}

impl Matcher {
    /// Create a matcher, rejecting weight tables that do not sum to 1.0
    pub fn new(taxonomy: Arc<SkillTaxonomy>, weights: ScoringWeights) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self { taxonomy, weights })
    }

    pub fn with_defaults() -> Self {
        Self {
            taxonomy: Arc::new(SkillTaxonomy::builtin()),
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn taxonomy(&self) -> &Arc<SkillTaxonomy> {
        &self.taxonomy
    }

    /// Score one candidate against one job
    pub fn score_job(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
        let skills = score_skills(&self.taxonomy, &candidate.skills, &job.required_skills);
        let location = score_location(&candidate.preferred_locations, &job.location);
        let salary = score_salary(candidate.expected_salary, &job.salary_range);
        let experience = score_experience(candidate.experience_years, &job.experience_required);
        let role = score_role(&candidate.preferred_roles, &job.title);

        let breakdown = MatchBreakdown {
            skill_match: skills.score,
            location_match: location,
            salary_match: salary,
            experience_match: experience,
            role_match: role,
        };

        let overall = overall_score(&breakdown, &self.weights);
        let reason = recommendation_reason(
            skills.matched.len(),
            skills.missing.len(),
            job.required_skills.len(),
            location,
        );

        tracing::trace!(
            "Scored job {}: overall={} skill={:.2} location={} salary={:.2} experience={:.2} role={}",
            job.job_id,
            overall,
            skills.score,
            location,
            salary,
            experience,
            role
        );

        MatchResult {
            job_id: job.job_id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            overall_score: overall,
            breakdown: breakdown.rounded(),
            matching_skills: skills.matched,
            missing_skills: skills.missing,
            recommendation_reason: reason,
        }
    }

    /// Score a candidate against every job and rank the results
    ///
    /// # Arguments
    /// * `candidate` - The candidate profile
    /// * `jobs` - Job postings in caller order
    ///
    /// # Returns
    /// One result per job, best first. Equal scores keep the input order.
    pub fn rank(&self, candidate: &CandidateProfile, jobs: &[JobPosting]) -> MatchingResponse {
        let mut matches: Vec<MatchResult> = jobs
            .iter()
            .map(|job| self.score_job(candidate, job))
            .collect();

        // sort_by is stable, so ties keep input order
        matches.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Ranked {} jobs, best score {:?}",
            matches.len(),
            matches.first().map(|m| m.overall_score)
        );

        MatchingResponse {
            total_matches: matches.len(),
            matches,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
