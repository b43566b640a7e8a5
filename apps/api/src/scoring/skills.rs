//! Skill Aligner: candidate skills vs skills the job asks for.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::JobPosting;
use crate::scoring::catalog::SkillCatalog;
use crate::scoring::normalize::{normalize, title_case};
use crate::scoring::similarity::is_similar;

/// Score returned when the job names no recognizable skills.
pub const DEFAULT_SKILL_SCORE: u32 = 70;
pub const MAX_MATCHED_SKILLS: usize = 15;
pub const MAX_MISSING_SKILLS: usize = 10;
const SKILL_SIMILARITY: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAlignment {
    pub score: u32,
    /// Title-cased, capped at `MAX_MATCHED_SKILLS`.
    pub matched: Vec<String>,
    /// Title-cased, capped at `MAX_MISSING_SKILLS`.
    pub missing: Vec<String>,
}

/// Catalog skills (lowercase) found anywhere in `text` after normalization.
///
/// Every n-gram of the normalized text is also a substring of it, so a single
/// containment check covers both multi-word and single-word entries.
pub fn extract_skills(catalog: &SkillCatalog, text: &str) -> BTreeSet<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return BTreeSet::new();
    }

    catalog
        .skills()
        .filter(|skill| normalized.contains(skill))
        .map(str::to_string)
        .collect()
}

/// Aligns the candidate's declared and extracted skills against the skills
/// required by `job`.
pub fn align_skills(
    catalog: &SkillCatalog,
    declared_skills: &[String],
    combined_text: &str,
    job: &JobPosting,
) -> SkillAlignment {
    let mut candidate_skills: BTreeSet<String> = declared_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    candidate_skills.extend(extract_skills(catalog, combined_text));

    let required = required_skills(catalog, job);
    if required.is_empty() {
        return SkillAlignment {
            score: DEFAULT_SKILL_SCORE,
            matched: vec![],
            missing: vec![],
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in &required {
        if candidate_skills.iter().any(|have| skill_matches(skill, have)) {
            matched.push(title_case(skill));
        } else {
            missing.push(title_case(skill));
        }
    }

    let score = percentage(matched.len(), required.len());
    matched.truncate(MAX_MATCHED_SKILLS);
    missing.truncate(MAX_MISSING_SKILLS);

    SkillAlignment {
        score,
        matched,
        missing,
    }
}

/// Skills extracted from requirements, description and title, plus any
/// requirement that is itself a catalog entry.
fn required_skills(catalog: &SkillCatalog, job: &JobPosting) -> BTreeSet<String> {
    let job_text = format!(
        "{} {} {}",
        job.requirements.join(" "),
        job.description,
        job.title
    );
    let mut required = extract_skills(catalog, &job_text);

    for requirement in &job.requirements {
        let requirement = requirement.trim().to_lowercase();
        if catalog.is_skill(&requirement) {
            required.insert(requirement);
        }
    }

    required
}

fn skill_matches(required: &str, have: &str) -> bool {
    required == have
        || have.contains(required)
        || required.contains(have)
        || is_similar(required, have, SKILL_SIMILARITY)
}

/// `round(part / whole * 100)`, clamped to 100. `whole` must be non-zero.
pub(crate) fn percentage(part: usize, whole: usize) -> u32 {
    let pct = (part as f64 / whole as f64 * 100.0).round() as u32;
    pct.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> SkillCatalog {
        SkillCatalog::new(
            &["rust", "kubernetes", "machine learning", "postgresql", "node.js"],
            &["leadership"],
            &["built"],
            &[],
        )
        .unwrap()
    }

    fn job(requirements: &[&str], description: &str) -> JobPosting {
        JobPosting {
            title: "Platform Engineer".to_string(),
            description: description.to_string(),
            requirements: requirements.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_skills_finds_multi_word_entries() {
        let catalog = small_catalog();
        let found = extract_skills(&catalog, "Applied Machine Learning on Kubernetes.");
        assert!(found.contains("machine learning"));
        assert!(found.contains("kubernetes"));
        assert!(!found.contains("rust"));
    }

    #[test]
    fn test_extract_skills_keeps_dotted_names() {
        let catalog = small_catalog();
        let found = extract_skills(&catalog, "Backend in Node.js");
        assert!(found.contains("node.js"));
    }

    #[test]
    fn test_extract_skills_empty_text() {
        assert!(extract_skills(&small_catalog(), "").is_empty());
    }

    #[test]
    fn test_no_required_skills_returns_default() {
        let catalog = small_catalog();
        let alignment = align_skills(&catalog, &[], "Rust expert", &JobPosting::default());
        assert_eq!(alignment.score, DEFAULT_SKILL_SCORE);
        assert!(alignment.matched.is_empty());
        assert!(alignment.missing.is_empty());
    }

    #[test]
    fn test_full_alignment_scores_100() {
        let catalog = small_catalog();
        let alignment = align_skills(
            &catalog,
            &["Rust".to_string()],
            "Ran Kubernetes clusters",
            &job(&["Rust", "Kubernetes"], ""),
        );
        assert_eq!(alignment.score, 100);
        assert_eq!(alignment.matched, vec!["Kubernetes", "Rust"]);
        assert!(alignment.missing.is_empty());
    }

    #[test]
    fn test_partial_alignment_rounds() {
        let catalog = small_catalog();
        let alignment = align_skills(
            &catalog,
            &[],
            "Wrote Rust services",
            &job(&["Rust", "Kubernetes", "PostgreSQL"], ""),
        );
        // 1 of 3 → 33.33 → 33
        assert_eq!(alignment.score, 33);
        assert_eq!(alignment.matched, vec!["Rust"]);
        assert_eq!(alignment.missing, vec!["Kubernetes", "Postgresql"]);
    }

    #[test]
    fn test_substring_match_counts() {
        let catalog = small_catalog();
        // Declared "postgresql 15" contains the required "postgresql"
        let alignment = align_skills(
            &catalog,
            &["PostgreSQL 15".to_string()],
            "",
            &job(&["PostgreSQL"], ""),
        );
        assert_eq!(alignment.score, 100);
    }

    #[test]
    fn test_fuzzy_match_counts() {
        let catalog = small_catalog();
        // "kubernetis" vs "kubernetes": 2*9/20 = 0.9 > 0.8
        let alignment = align_skills(
            &catalog,
            &["kubernetis".to_string()],
            "",
            &job(&["Kubernetes"], ""),
        );
        assert_eq!(alignment.score, 100);
    }

    #[test]
    fn test_requirement_literal_in_catalog_is_required() {
        let catalog = small_catalog();
        let alignment = align_skills(&catalog, &[], "", &job(&["  Leadership "], ""));
        assert_eq!(alignment.missing, vec!["Leadership"]);
        assert_eq!(alignment.score, 0);
    }

    #[test]
    fn test_lists_are_capped() {
        let skills: Vec<String> = (0..30).map(|i| format!("skill{i:02}")).collect();
        let catalog = SkillCatalog::new(&skills, &[], &[], &[]).unwrap();
        let job = JobPosting {
            requirements: skills.clone(),
            ..Default::default()
        };
        let alignment = align_skills(&catalog, &[], "", &job);
        assert_eq!(alignment.score, 0);
        assert_eq!(alignment.missing.len(), MAX_MISSING_SKILLS);
        assert!(alignment.matched.is_empty());
    }

    #[test]
    fn test_percentage_rounds_and_clamps() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
    }
}
