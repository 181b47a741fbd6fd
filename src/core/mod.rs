// Core algorithm exports
pub mod aggregate;
pub mod assistant;
pub mod experience;
pub mod gap;
pub mod lifecycle;
pub mod matcher;
pub mod scoring;
pub mod taxonomy;

pub use aggregate::{overall_score, recommendation_reason, MatchError};
pub use assistant::{respond, AssistantQuery, AssistantReply};
pub use experience::parse_experience_range;
pub use gap::GapAnalyzer;
pub use lifecycle::{ApplicationStatus, JobStatus, TransitionError};
pub use matcher::Matcher;
pub use scoring::{score_experience, score_location, score_role, score_salary, score_skills, SkillMatch};
pub use taxonomy::{SkillEntry, SkillTaxonomy};
