//! Talent Match - multi-factor job matching service
//!
//! This library scores a candidate profile against job postings on five
//! weighted factors (skills, location, salary, experience, role) and ranks
//! the results. It also provides a skills-gap analyzer, a typed assistant
//! responder and an in-memory application lifecycle tracker, exposed over
//! an actix-web HTTP API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{parse_experience_range, GapAnalyzer, MatchError, Matcher, SkillTaxonomy};
pub use models::{CandidateProfile, JobPosting, MatchResult, MatchingRequest, MatchingResponse, ScoringWeights};
