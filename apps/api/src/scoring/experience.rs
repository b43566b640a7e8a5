//! Experience Estimator: years of experience claimed vs years required.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::JobPosting;
use crate::scoring::catalog::SkillCatalog;

/// "N years (of) experience" phrasings. Group 1 is always the number.
static YEARS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*(?:of)?\s*(?:experience|exp)",
        r"(?i)(?:experience|exp)\s*(?:of)?\s*(\d+)\+?\s*(?:years?|yrs?)",
        r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*(?:in|of|working)",
        r"(?i)over\s*(\d+)\s*(?:years?|yrs?)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static BARE_NUMBER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\d+").ok());

const MAX_VERB_BONUS: u32 = 5;
const MAX_ACHIEVEMENT_BONUS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub score: u32,
    pub years_found: u32,
    pub years_required: u32,
}

/// Largest year count stated through any "years of experience" phrasing,
/// or `None` when no phrasing matches.
pub fn years_from_phrases(text: &str) -> Option<u32> {
    YEARS_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
}

/// Years the posting asks for: the largest "years" phrasing if any matches,
/// otherwise the first bare integer ("3-5 years" → 3), otherwise 0.
pub fn required_years(job_experience: &str) -> u32 {
    years_from_phrases(job_experience)
        .or_else(|| first_number(job_experience))
        .unwrap_or(0)
}

fn first_number(text: &str) -> Option<u32> {
    BARE_NUMBER
        .as_ref()?
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Scores the candidate's experience against the posting.
///
/// `combined_text` is résumé, stated experience and cover letter;
/// `experience_field` is the stated experience again, as entered on the form.
pub fn match_experience(
    catalog: &SkillCatalog,
    combined_text: &str,
    experience_field: &str,
    job: &JobPosting,
) -> ExperienceMatch {
    let text = format!("{combined_text} {experience_field}").to_lowercase();

    let years_found = years_from_phrases(&text).unwrap_or(0);
    let years_required = required_years(&job.experience);

    let base = base_score(years_found, years_required);

    let verb_hits = catalog
        .action_verbs
        .iter()
        .filter(|verb| text.contains(verb.as_str()))
        .count() as u32;
    let verb_bonus = (verb_hits / 2).min(MAX_VERB_BONUS);
    let achievement_bonus = (catalog.achievement_hits(&text) as u32).min(MAX_ACHIEVEMENT_BONUS);

    ExperienceMatch {
        score: (base + verb_bonus + achievement_bonus).min(100),
        years_found,
        years_required,
    }
}

fn base_score(found: u32, required: u32) -> u32 {
    if required == 0 {
        return if found > 0 { 75 } else { 60 };
    }

    let ratio = found as f64 / required as f64;
    if found >= required {
        90 + (found - required).saturating_mul(2).min(10)
    } else if found as f64 >= 0.7 * required as f64 {
        70 + (ratio * 20.0).floor() as u32
    } else {
        40 + (ratio * 30.0).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_catalog() -> SkillCatalog {
        SkillCatalog::new::<&str>(&[], &[], &[], &[]).unwrap()
    }

    fn job_requiring(experience: &str) -> JobPosting {
        JobPosting {
            experience: experience.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_patterns_compile() {
        assert_eq!(YEARS_PATTERNS.len(), 4);
        assert!(BARE_NUMBER.is_some());
    }

    #[test]
    fn test_years_from_phrases_variants() {
        assert_eq!(years_from_phrases("5 years of experience"), Some(5));
        assert_eq!(years_from_phrases("7+ yrs exp"), Some(7));
        assert_eq!(years_from_phrases("Experience of 4 years"), Some(4));
        assert_eq!(years_from_phrases("3 years working at Acme"), Some(3));
        assert_eq!(years_from_phrases("over 10 years"), Some(10));
        assert_eq!(years_from_phrases("no numbers"), None);
    }

    #[test]
    fn test_years_from_phrases_takes_max() {
        assert_eq!(
            years_from_phrases("2 years in Java, 6 years of experience overall"),
            Some(6)
        );
    }

    #[test]
    fn test_required_years_falls_back_to_first_number() {
        assert_eq!(required_years("3-5 years"), 3);
        assert_eq!(required_years("Minimum 4+ years of experience"), 4);
        assert_eq!(required_years("Entry level"), 0);
        assert_eq!(required_years(""), 0);
    }

    #[test]
    fn test_required_years_prefers_phrases_over_bare_numbers() {
        // the bare "2" comes first but the phrasing wins
        assert_eq!(required_years("Level 2: 6 years of experience"), 6);
    }

    #[test]
    fn test_oversized_number_is_ignored() {
        assert_eq!(years_from_phrases("99999999999 years of experience"), None);
    }

    #[test]
    fn test_huge_claim_saturates_at_full_score() {
        let result = match_experience(
            &bare_catalog(),
            "3000000000 years of experience",
            "",
            &job_requiring("3 years"),
        );
        assert_eq!(result.years_found, 3_000_000_000);
        assert_eq!(result.score, 100);
        assert_eq!(base_score(u32::MAX, 1), 100);
        assert_eq!(base_score(u32::MAX, u32::MAX), 90);
        assert_eq!(base_score(1, u32::MAX), 40);
    }

    #[test]
    fn test_backend_example_meets_requirement() {
        let result = match_experience(
            &SkillCatalog::standard().unwrap(),
            "5 years of experience in backend development",
            "",
            &job_requiring("3-5 years"),
        );
        assert_eq!(result.years_found, 5);
        assert_eq!(result.years_required, 3);
        assert!(result.score >= 90, "score was {}", result.score);
    }

    #[test]
    fn test_base_score_exceeds_requirement() {
        let result = match_experience(
            &bare_catalog(),
            "5 years of experience",
            "",
            &job_requiring("3-5 years"),
        );
        // 90 + min(10, 2*2)
        assert_eq!(result.score, 94);
    }

    #[test]
    fn test_base_score_tiers() {
        assert_eq!(base_score(0, 0), 60);
        assert_eq!(base_score(3, 0), 75);
        assert_eq!(base_score(20, 5), 100);
        // 4/5 = 0.8 ≥ 0.7 → 70 + floor(16)
        assert_eq!(base_score(4, 5), 86);
        // 1/5 → 40 + floor(6)
        assert_eq!(base_score(1, 5), 46);
        assert_eq!(base_score(0, 5), 40);
    }

    #[test]
    fn test_bonuses_are_capped() {
        let catalog = SkillCatalog::new(
            &[],
            &[],
            &["built", "led", "shipped", "designed"],
            &[r"\d+%", r"\$\d+"],
        )
        .unwrap();
        let result = match_experience(
            &catalog,
            "Built and led teams, shipped and designed systems, cut cost 30% saving $500",
            "",
            &job_requiring(""),
        );
        // base 60, verbs 4/2 = 2, achievements 2
        assert_eq!(result.score, 64);
    }

    #[test]
    fn test_experience_field_is_read() {
        let result = match_experience(
            &bare_catalog(),
            "",
            "8 years of experience",
            &job_requiring("5 years"),
        );
        assert_eq!(result.years_found, 8);
        assert_eq!(result.years_required, 5);
        assert_eq!(result.score, 96);
    }
}
