//! Skills-gap analysis and learning roadmap generation
//!
//! Compares a candidate's current skills against a target role, estimates
//! readiness and learning time from taxonomy metadata, and groups the missing
//! skills into ordered study phases.

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::taxonomy::{SkillEntry, SkillTaxonomy};
use crate::models::{
    round_to, GapAnalysis, GapAnalysisRequest, GapAnalysisResponse, RadarPoint, RoadmapPhase,
    SalaryPoint,
};

/// Categories plotted on the skills radar
pub const RADAR_CATEGORIES: [&str; 4] = ["Frontend", "Backend", "DevOps", "Database"];

/// Radar category for skills the taxonomy does not know
const RADAR_FALLBACK_CATEGORY: &str = "Backend";

const SALARY_STEPS: [(&str, f64, &str); 4] = [
    ("Current", 1.0, "Junior Dev"),
    ("Year 1", 1.35, "Mid-Level Dev"),
    ("Year 2", 1.6, "Senior Dev"),
    ("Year 3", 2.0, "Tech Lead"),
];

/// Skills-gap analyzer
#[derive(Debug, Clone)]
pub struct GapAnalyzer {
    taxonomy: Arc<SkillTaxonomy>,
    phase_size: usize,
    base_salary: f64,
}

impl GapAnalyzer {
    /// `phase_size` is clamped to at least one skill per phase
    pub fn new(taxonomy: Arc<SkillTaxonomy>, phase_size: usize, base_salary: f64) -> Self {
        Self {
            taxonomy,
            phase_size: phase_size.max(1),
            base_salary,
        }
    }

    pub fn analyze(&self, request: &GapAnalysisRequest) -> GapAnalysisResponse {
        let current: HashSet<String> = request
            .candidate
            .current_skills
            .iter()
            .map(|s| self.taxonomy.normalize(s))
            .collect();

        let required = self.canonical_unique(&request.target_role.required_skills);

        let (matching, missing): (Vec<String>, Vec<String>) =
            required.iter().cloned().partition(|s| current.contains(s));

        let total_required = required.len();
        let (gap_pct, skill_share) = if total_required > 0 {
            (
                missing.len() as f64 / total_required as f64 * 100.0,
                matching.len() as f64 / total_required as f64 * 50.0,
            )
        } else {
            (0.0, 0.0)
        };

        let experience_share = (request.candidate.experience_years as f64 * 10.0).min(30.0);
        let readiness = skill_share + experience_share;

        let mut missing_details: Vec<(String, SkillEntry)> = missing
            .iter()
            .map(|skill| (skill.clone(), self.entry_for(skill)))
            .collect();
        let total_time: f64 = missing_details.iter().map(|(_, e)| e.time_months).sum();

        // stable: equal difficulty keeps required-list order
        missing_details.sort_by_key(|(_, entry)| entry.difficulty);

        let learning_roadmap = self.build_roadmap(&missing_details, &request.target_role.title);

        tracing::debug!(
            "Gap analysis for '{}': {} matching, {} missing, readiness {:.2}",
            request.target_role.title,
            matching.len(),
            missing.len(),
            readiness
        );

        GapAnalysisResponse {
            analysis: GapAnalysis {
                matching_skills: matching,
                missing_skills: missing,
                skill_gap_percentage: round_to(gap_pct, 2),
                readiness_score: round_to(readiness, 2),
                estimated_learning_time_months: round_to(total_time, 1),
            },
            learning_roadmap,
            radar_data: self.radar_data(
                &request.candidate.current_skills,
                &request.target_role.required_skills,
            ),
            salary_growth: self.salary_growth(),
        }
    }

    fn canonical_unique(&self, skills: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(skills.len());
        for skill in skills {
            let canonical = self.taxonomy.normalize(skill);
            if !out.contains(&canonical) {
                out.push(canonical);
            }
        }
        out
    }

    fn entry_for(&self, canonical: &str) -> SkillEntry {
        self.taxonomy
            .get(canonical)
            .cloned()
            .unwrap_or_else(SkillEntry::unknown)
    }

    fn build_roadmap(&self, missing: &[(String, SkillEntry)], target_title: &str) -> Vec<RoadmapPhase> {
        missing
            .chunks(self.phase_size)
            .enumerate()
            .map(|(index, chunk)| {
                let phase = index as u32 + 1;
                let duration: f64 = chunk.iter().map(|(_, e)| e.time_months).sum();
                let category = chunk
                    .first()
                    .map(|(_, e)| e.category.as_str())
                    .unwrap_or(crate::core::taxonomy::UNKNOWN_CATEGORY);

                RoadmapPhase {
                    phase,
                    duration_months: round_to(duration, 1),
                    focus: format!("Mastering {} Concepts", category),
                    skills_to_learn: chunk.iter().map(|(name, _)| name.clone()).collect(),
                    priority: if phase == 1 { "High" } else { "Medium" }.to_string(),
                    reasoning: format!("Foundational skills for {}", target_title),
                }
            })
            .collect()
    }

    fn radar_data(&self, current: &[String], target: &[String]) -> Vec<RadarPoint> {
        let count = |skills: &[String], category: &str| -> u32 {
            skills
                .iter()
                .map(|s| self.taxonomy.normalize(s))
                .filter(|s| {
                    self.taxonomy.category_of(s).unwrap_or(RADAR_FALLBACK_CATEGORY) == category
                })
                .count() as u32
                * 100
        };

        RADAR_CATEGORIES
            .iter()
            .map(|&category| {
                let target_total = count(target, category);
                RadarPoint {
                    subject: category.to_string(),
                    current: count(current, category),
                    target: target_total,
                    full_mark: target_total.max(100) + 50,
                }
            })
            .collect()
    }

    fn salary_growth(&self) -> Vec<SalaryPoint> {
        SALARY_STEPS
            .iter()
            .map(|(year, multiplier, role)| SalaryPoint {
                year: year.to_string(),
                salary: (self.base_salary * multiplier).trunc() as u64,
                role: role.to_string(),
            })
            .collect()
    }
}
