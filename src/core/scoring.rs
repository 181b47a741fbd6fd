use crate::core::experience::parse_experience_range;
use crate::core::taxonomy::SkillTaxonomy;

/// Score used when a preference or requirement is absent
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Fixed score for candidates above the maximum experience
pub const OVERQUALIFIED_SCORE: f64 = 90.0;

/// Score for a title that partially matches a preferred role
pub const PARTIAL_ROLE_SCORE: f64 = 80.0;

const REMOTE: &str = "remote";

/// Outcome of the skill factor
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// 0-100, unrounded
    pub score: f64,
    /// Canonical keys present on both sides, in required-list order
    pub matched: Vec<String>,
    /// Canonical required keys the candidate lacks, in required-list order
    pub missing: Vec<String>,
}

/// Skill factor: share of required skills the candidate covers
///
/// Both sides are canonicalized through the taxonomy and compared as sets.
/// Matching is exact on canonical form; no substring containment.
pub fn score_skills(
    taxonomy: &SkillTaxonomy,
    candidate_skills: &[String],
    required_skills: &[String],
) -> SkillMatch {
    if required_skills.is_empty() {
        return SkillMatch {
            score: 100.0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let candidate: std::collections::HashSet<String> = candidate_skills
        .iter()
        .map(|skill| taxonomy.normalize(skill))
        .collect();

    let mut required: Vec<String> = Vec::with_capacity(required_skills.len());
    for skill in required_skills {
        let canonical = taxonomy.normalize(skill);
        if !required.contains(&canonical) {
            required.push(canonical);
        }
    }

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| candidate.contains(skill));

    let score = matched.len() as f64 / required.len() as f64 * 100.0;

    SkillMatch { score, matched, missing }
}

/// Location factor (0-100)
///
/// Neutral without preferences. Exact case-insensitive match or any remote
/// side scores 100; no geographic proximity is considered.
pub fn score_location(preferred_locations: &[String], job_location: &str) -> f64 {
    if preferred_locations.is_empty() {
        return NEUTRAL_SCORE;
    }

    let job_location = job_location.trim().to_lowercase();
    let preferred: Vec<String> = preferred_locations
        .iter()
        .map(|loc| loc.trim().to_lowercase())
        .collect();

    if preferred.contains(&job_location) {
        return 100.0;
    }

    if job_location == REMOTE || preferred.iter().any(|loc| loc == REMOTE) {
        return 100.0;
    }

    0.0
}

/// Experience factor (0-100)
///
/// Linear partial credit below the minimum, 100 within range, and a flat
/// overqualification score above the maximum.
pub fn score_experience(candidate_years: u32, experience_required: &str) -> f64 {
    let (min_years, max_years) = parse_experience_range(experience_required);

    if candidate_years < min_years {
        // min_years > candidate_years >= 0, so min_years is never zero here
        return candidate_years as f64 / min_years as f64 * 100.0;
    }

    if candidate_years <= max_years {
        100.0
    } else {
        OVERQUALIFIED_SCORE
    }
}

/// Salary factor (0-100)
///
/// Expectations at or under the band maximum score 100; above it the score
/// decays by the percentage overrun, floored at 0.
pub fn score_salary(expected_salary: f64, salary_range: &[f64]) -> f64 {
    let max_salary = match salary_range {
        [_, max, ..] => *max,
        _ => return NEUTRAL_SCORE,
    };

    if max_salary <= 0.0 {
        return NEUTRAL_SCORE;
    }

    if expected_salary <= max_salary {
        return 100.0;
    }

    let excess_pct = (expected_salary - max_salary) / max_salary * 100.0;
    (100.0 - excess_pct).max(0.0)
}

/// Role factor (0-100)
pub fn score_role(preferred_roles: &[String], job_title: &str) -> f64 {
    if preferred_roles.is_empty() {
        return NEUTRAL_SCORE;
    }

    let title = job_title.trim().to_lowercase();
    let roles: Vec<String> = preferred_roles
        .iter()
        .map(|role| role.trim().to_lowercase())
        .collect();

    if roles.iter().any(|role| *role == title) {
        return 100.0;
    }

    if roles
        .iter()
        .any(|role| title.contains(role.as_str()) || role.contains(title.as_str()))
    {
        return PARTIAL_ROLE_SCORE;
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skills_empty_required() {
        let taxonomy = SkillTaxonomy::builtin();
        let result = score_skills(&taxonomy, &strings(&["Python"]), &[]);
        assert_eq!(result.score, 100.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_skills_partial() {
        let taxonomy = SkillTaxonomy::builtin();
        let result = score_skills(
            &taxonomy,
            &strings(&["Python", "FastAPI", "React"]),
            &strings(&["Python", "FastAPI", "PostgreSQL"]),
        );

        assert!((result.score - 66.666).abs() < 0.01);
        assert_eq!(result.matched, strings(&["python", "fastapi"]));
        assert_eq!(result.missing, strings(&["postgresql"]));
    }

    #[test]
    fn test_skills_alias_resolution() {
        let taxonomy = SkillTaxonomy::builtin();
        let result = score_skills(
            &taxonomy,
            &strings(&["py", "postgres", "k8s"]),
            &strings(&["Python", "PostgreSQL", "Kubernetes"]),
        );
        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_skills_duplicate_required_counted_once() {
        let taxonomy = SkillTaxonomy::builtin();
        let result = score_skills(
            &taxonomy,
            &strings(&["Python"]),
            &strings(&["Python", "py", "Docker"]),
        );
        assert_eq!(result.score, 50.0);
        assert_eq!(result.matched, strings(&["python"]));
        assert_eq!(result.missing, strings(&["docker"]));
    }

    #[test]
    fn test_skills_no_substring_containment() {
        let taxonomy = SkillTaxonomy::builtin();
        let result = score_skills(&taxonomy, &strings(&["Java"]), &strings(&["JavaScript"]));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_location_rules() {
        assert_eq!(score_location(&strings(&["Bangalore"]), "Bangalore"), 100.0);
        assert_eq!(score_location(&strings(&["bangalore "]), " BANGALORE"), 100.0);
        assert_eq!(score_location(&[], "Anywhere"), 50.0);
        assert_eq!(score_location(&strings(&["Bangalore"]), "Mumbai"), 0.0);
        assert_eq!(score_location(&strings(&["Bangalore"]), "Remote"), 100.0);
        assert_eq!(score_location(&strings(&["Remote"]), "Mumbai"), 100.0);
        assert_eq!(score_location(&strings(&["Bangalore"]), "Bangalore, India"), 0.0);
    }

    #[test]
    fn test_experience_rules() {
        assert_eq!(score_experience(2, "1-3 years"), 100.0);
        assert_eq!(score_experience(1, "1-3 years"), 100.0);
        assert_eq!(score_experience(3, "1-3 years"), 100.0);
        assert_eq!(score_experience(4, "1-3 years"), 90.0);
        assert_eq!(score_experience(40, "1-3 years"), 90.0);
        assert_eq!(score_experience(1, "2-5 years"), 50.0);
        assert_eq!(score_experience(0, "2-5 years"), 0.0);
        assert_eq!(score_experience(0, "0-2 years"), 100.0);
        assert_eq!(score_experience(7, "not specified"), 100.0);
        assert_eq!(score_experience(50, "5+ years"), 100.0);
    }

    #[test]
    fn test_salary_rules() {
        let range = [600_000.0, 1_000_000.0];
        assert_eq!(score_salary(800_000.0, &range), 100.0);
        assert_eq!(score_salary(400_000.0, &range), 100.0);
        assert_eq!(score_salary(1_000_000.0, &range), 100.0);
        assert!((score_salary(1_200_000.0, &range) - 80.0).abs() < 1e-9);
        assert_eq!(score_salary(3_000_000.0, &range), 0.0);
    }

    #[test]
    fn test_salary_missing_or_invalid_range() {
        assert_eq!(score_salary(800_000.0, &[]), 50.0);
        assert_eq!(score_salary(800_000.0, &[600_000.0]), 50.0);
        assert_eq!(score_salary(800_000.0, &[0.0, 0.0]), 50.0);
        assert_eq!(score_salary(800_000.0, &[100.0, -5.0]), 50.0);
    }

    #[test]
    fn test_role_rules() {
        let backend = strings(&["Backend Developer"]);
        assert_eq!(score_role(&backend, "Backend Developer"), 100.0);
        assert_eq!(score_role(&backend, "backend developer "), 100.0);
        assert_eq!(score_role(&backend, "Senior Backend Developer"), 80.0);
        assert_eq!(score_role(&strings(&["Senior Backend Developer"]), "Backend Developer"), 80.0);
        assert_eq!(score_role(&strings(&["Frontend Developer"]), "Backend Developer"), 0.0);
        assert_eq!(score_role(&[], "Backend Developer"), 50.0);
    }
}
