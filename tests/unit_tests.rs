// Unit tests for Talent Match

use talent_match::core::{
    aggregate::{overall_score, recommendation_reason},
    experience::parse_experience_range,
    scoring::{score_experience, score_location, score_role, score_salary, score_skills},
    ApplicationStatus, MatchError, SkillEntry, SkillTaxonomy,
};
use talent_match::models::{MatchBreakdown, ScoringWeights};

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_experience_range_forms() {
    assert_eq!(parse_experience_range("0-2 years"), (0, 2));
    assert_eq!(parse_experience_range("5+ years"), (5, 99));
    assert_eq!(parse_experience_range("3 years"), (3, 3));
    assert_eq!(parse_experience_range(""), (0, 99));
    assert_eq!(parse_experience_range("senior"), (0, 99));
}

#[test]
fn test_skill_score_partial_overlap() {
    let taxonomy = SkillTaxonomy::builtin();
    let result = score_skills(
        &taxonomy,
        &skills(&["Python", "FastAPI", "React"]),
        &skills(&["Python", "FastAPI", "PostgreSQL"]),
    );

    assert!((result.score - 66.666).abs() < 0.01);
    assert_eq!(result.matched, skills(&["python", "fastapi"]));
    assert_eq!(result.missing, skills(&["postgresql"]));
}

#[test]
fn test_skill_score_aliases_resolve() {
    let taxonomy = SkillTaxonomy::builtin();
    let result = score_skills(&taxonomy, &skills(&["k8s", "Postgres"]), &skills(&["Kubernetes", "PostgreSQL"]));
    assert_eq!(result.score, 100.0);
    assert!(result.missing.is_empty());
}

#[test]
fn test_skill_score_no_substring_credit() {
    let taxonomy = SkillTaxonomy::builtin();
    let result = score_skills(&taxonomy, &skills(&["Java"]), &skills(&["JavaScript"]));
    assert_eq!(result.score, 0.0);
    assert!(result.matched.is_empty());
}

#[test]
fn test_skill_score_empty_requirements() {
    let taxonomy = SkillTaxonomy::builtin();
    let result = score_skills(&taxonomy, &skills(&["Python"]), &[]);
    assert_eq!(result.score, 100.0);
    assert!(result.missing.is_empty());
}

#[test]
fn test_location_scores() {
    assert_eq!(score_location(&skills(&["Bangalore"]), "Bangalore"), 100.0);
    assert_eq!(score_location(&skills(&["bangalore "]), "BANGALORE"), 100.0);
    assert_eq!(score_location(&[], "Bangalore"), 50.0);
    assert_eq!(score_location(&skills(&["Bangalore"]), "Mumbai"), 0.0);
    assert_eq!(score_location(&skills(&["Bangalore"]), "Remote"), 100.0);
}

#[test]
fn test_experience_scores() {
    assert_eq!(score_experience(3, "2-5 years"), 100.0);
    assert_eq!(score_experience(8, "2-5 years"), 90.0);
    assert_eq!(score_experience(1, "2-5 years"), 50.0);
    assert_eq!(score_experience(0, "0-2 years"), 100.0);
}

#[test]
fn test_salary_scores() {
    assert_eq!(score_salary(800_000.0, &[600_000.0, 1_000_000.0]), 100.0);
    assert!((score_salary(1_200_000.0, &[600_000.0, 1_000_000.0]) - 80.0).abs() < 1e-9);
    assert_eq!(score_salary(3_000_000.0, &[600_000.0, 1_000_000.0]), 0.0);
    assert_eq!(score_salary(800_000.0, &[600_000.0]), 50.0);
    assert_eq!(score_salary(800_000.0, &[0.0, 0.0]), 50.0);
}

#[test]
fn test_role_scores() {
    let roles = skills(&["Backend Developer"]);
    assert_eq!(score_role(&roles, "Backend Developer"), 100.0);
    assert_eq!(score_role(&roles, "Senior Backend Developer"), 80.0);
    assert_eq!(score_role(&skills(&["Frontend Developer"]), "Backend Developer"), 0.0);
    assert_eq!(score_role(&[], "Backend Developer"), 50.0);
}

#[test]
fn test_overall_score_weighting() {
    let weights = ScoringWeights::default();
    let only_skill = MatchBreakdown {
        skill_match: 100.0,
        location_match: 0.0,
        salary_match: 0.0,
        experience_match: 0.0,
        role_match: 0.0,
    };
    assert_eq!(overall_score(&only_skill, &weights), 40.0);
}

#[test]
fn test_weights_must_sum_to_one() {
    assert!(ScoringWeights::new(0.40, 0.20, 0.15, 0.15, 0.10).is_ok());
    assert!(matches!(
        ScoringWeights::new(0.50, 0.20, 0.15, 0.15, 0.10),
        Err(MatchError::InvalidWeightSum(_))
    ));
    assert_eq!(
        ScoringWeights::new(1.2, -0.2, 0.0, 0.0, 0.0),
        Err(MatchError::InvalidWeight("location"))
    );
}

#[test]
fn test_recommendation_reason_text() {
    assert_eq!(
        recommendation_reason(2, 0, 2, 100.0),
        "Perfect skill alignment with 2/2 matching skills. Preferred location match."
    );
    assert_eq!(
        recommendation_reason(0, 3, 3, 0.0),
        "No skill matches. Missing 3 required skills."
    );
    assert_eq!(
        recommendation_reason(1, 2, 3, 50.0),
        "Strong skill alignment with 1/3 matching skills."
    );
}

#[test]
fn test_taxonomy_override_merges() {
    let base = SkillTaxonomy::builtin();
    let merged = base.merged_with(vec![(
        "Rust".to_string(),
        SkillEntry::new("Backend", &["rust-lang"], 4.0, 4),
    )]);

    assert_eq!(merged.len(), base.len() + 1);
    assert_eq!(merged.normalize("Rust-Lang"), "rust");
    assert_eq!(merged.normalize("py"), "python");
}

#[test]
fn test_lifecycle_terminal_states() {
    assert!(ApplicationStatus::Offered.is_terminal());
    assert!(ApplicationStatus::Rejected.is_terminal());
    assert!(ApplicationStatus::Applied.can_transition_to(ApplicationStatus::Rejected));
    assert!(!ApplicationStatus::Applied.can_transition_to(ApplicationStatus::Applied));
    assert!(ApplicationStatus::Rejected.transition(ApplicationStatus::Screening).is_err());
}
