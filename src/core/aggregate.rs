use thiserror::Error;

use crate::models::{round_to, MatchBreakdown, ScoringWeights};

/// Allowed drift of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors raised while configuring the matching engine
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Scoring weights must sum to 1.0, got {0:.4}")]
    InvalidWeightSum(f64),

    #[error("Scoring weight '{0}' must be a finite non-negative number")]
    InvalidWeight(&'static str),
}

impl ScoringWeights {
    /// Build a weight table, rejecting negative weights and sums other than 1.0
    pub fn new(
        skill: f64,
        location: f64,
        salary: f64,
        experience: f64,
        role: f64,
    ) -> Result<Self, MatchError> {
        let weights = Self { skill, location, salary, experience, role };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        let named = [
            ("skill", self.skill),
            ("location", self.location),
            ("salary", self.salary),
            ("experience", self.experience),
            ("role", self.role),
        ];

        if let Some((name, _)) = named.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(MatchError::InvalidWeight(*name));
        }

        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::InvalidWeightSum(total));
        }

        Ok(())
    }
}

/// Weighted combination of the five factors, rounded to one decimal
pub fn overall_score(breakdown: &MatchBreakdown, weights: &ScoringWeights) -> f64 {
    let total = breakdown.skill_match * weights.skill
        + breakdown.location_match * weights.location
        + breakdown.salary_match * weights.salary
        + breakdown.experience_match * weights.experience
        + breakdown.role_match * weights.role;

    round_to(total, 1)
}

/// Advisory explanation of a match; never used for ranking
pub fn recommendation_reason(
    matched_count: usize,
    missing_count: usize,
    required_count: usize,
    location_score: f64,
) -> String {
    let mut reason = if matched_count == required_count {
        format!(
            "Perfect skill alignment with {}/{} matching skills.",
            matched_count, required_count
        )
    } else if matched_count == 0 {
        format!("No skill matches. Missing {} required skills.", missing_count)
    } else {
        format!(
            "Strong skill alignment with {}/{} matching skills.",
            matched_count, required_count
        )
    };

    if location_score == 100.0 {
        reason.push_str(" Preferred location match.");
    }

    reason
}
