use serde::{Deserialize, Serialize};

use crate::core::scoring::{score_location, score_salary, score_skills, NEUTRAL_SCORE};
use crate::core::taxonomy::SkillTaxonomy;
use crate::models::round_to;

/// Question put to the assistant, one variant per supported intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum AssistantQuery {
    Salary {
        expected_salary: f64,
        #[serde(default)]
        salary_range: Vec<f64>,
    },
    Skills {
        candidate_skills: Vec<String>,
        #[serde(default)]
        required_skills: Vec<String>,
    },
    Location {
        #[serde(default)]
        preferred_locations: Vec<String>,
        job_location: String,
    },
    Fallback {
        #[serde(default)]
        message: String,
    },
}

impl AssistantQuery {
    pub fn intent(&self) -> &'static str {
        match self {
            AssistantQuery::Salary { .. } => "salary",
            AssistantQuery::Skills { .. } => "skills",
            AssistantQuery::Location { .. } => "location",
            AssistantQuery::Fallback { .. } => "fallback",
        }
    }
}

/// Formatted answer with the factor score it is based on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub intent: String,
    pub message: String,
    pub score: Option<f64>,
}

/// Answer one assistant query
pub fn respond(taxonomy: &SkillTaxonomy, query: &AssistantQuery) -> AssistantReply {
    let (message, score) = match query {
        AssistantQuery::Salary { expected_salary, salary_range } => {
            let score = score_salary(*expected_salary, salary_range);
            (salary_message(*expected_salary, salary_range, score), Some(score))
        }
        AssistantQuery::Skills { candidate_skills, required_skills } => {
            let result = score_skills(taxonomy, candidate_skills, required_skills);
            let message = if result.missing.is_empty() {
                "You cover every required skill.".to_string()
            } else {
                format!(
                    "You cover {} of {} required skills. Focus next on: {}.",
                    result.matched.len(),
                    result.matched.len() + result.missing.len(),
                    result.missing.join(", ")
                )
            };
            (message, Some(round_to(result.score, 2)))
        }
        AssistantQuery::Location { preferred_locations, job_location } => {
            let score = score_location(preferred_locations, job_location);
            let message = if score == NEUTRAL_SCORE {
                "You have no location preference, so any location works.".to_string()
            } else if score == 100.0 {
                format!("{} fits your location preferences.", job_location)
            } else {
                format!(
                    "{} is outside your preferred locations ({}).",
                    job_location,
                    preferred_locations.join(", ")
                )
            };
            (message, Some(score))
        }
        AssistantQuery::Fallback { .. } => (
            "I can help with salary fit, skill gaps and location fit. \
             Ask with intent 'salary', 'skills' or 'location'."
                .to_string(),
            None,
        ),
    };

    AssistantReply {
        intent: query.intent().to_string(),
        message,
        score,
    }
}

fn salary_message(expected: f64, range: &[f64], score: f64) -> String {
    match range {
        [min, max, ..] if *max > 0.0 => {
            if expected <= *max {
                format!(
                    "Your expectation of {:.0} fits the offered band {:.0}-{:.0}.",
                    expected, min, max
                )
            } else {
                format!(
                    "Your expectation of {:.0} is {:.1}% above the band maximum of {:.0}.",
                    expected,
                    (expected - max) / max * 100.0,
                    max
                )
            }
        }
        _ => format!(
            "No usable salary band was provided, so the fit is neutral ({:.0}).",
            score
        ),
    }
}
