//! Formatting Scorer: structural heuristics over the raw résumé text.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+").ok());
static PHONE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\+?[\d\s\-()]{10,}").ok());
static BULLET: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[•\-*]\s").ok());

const SECTION_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
    "work history",
    "employment",
    "qualifications",
    "achievements",
    "certifications",
    "awards",
    "languages",
];

const BASE_SCORE: i32 = 60;
const POINTS_PER_SECTION: i32 = 3;
const MAX_SECTION_POINTS: i32 = 15;
const CONTACT_POINTS: i32 = 5;
const LENGTH_BONUS: i32 = 10;
const SHORT_PENALTY: i32 = 10;
const BULLET_POINTS: i32 = 5;
const IDEAL_WORDS: std::ops::RangeInclusive<usize> = 200..=1500;
const MIN_WORDS: usize = 100;

/// Scores résumé structure: section headers, contact details, length and
/// bullet points. Empty text lands at 50 (base minus the short-résumé penalty).
pub fn score_formatting(resume_text: &str) -> u32 {
    let lower = resume_text.to_lowercase();
    let mut score = BASE_SCORE;

    let sections = SECTION_HEADERS.iter().filter(|h| lower.contains(*h)).count() as i32;
    score += (sections * POINTS_PER_SECTION).min(MAX_SECTION_POINTS);

    if matches(&EMAIL, resume_text) {
        score += CONTACT_POINTS;
    }
    if matches(&PHONE, resume_text) {
        score += CONTACT_POINTS;
    }

    let words = resume_text.split_whitespace().count();
    if IDEAL_WORDS.contains(&words) {
        score += LENGTH_BONUS;
    } else if words < MIN_WORDS {
        score -= SHORT_PENALTY;
    }

    if matches(&BULLET, resume_text) {
        score += BULLET_POINTS;
    }

    score.clamp(0, 100) as u32
}

fn matches(pattern: &Lazy<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    #[test]
    fn test_patterns_compile() {
        assert!(EMAIL.is_some());
        assert!(PHONE.is_some());
        assert!(BULLET.is_some());
    }

    #[test]
    fn test_empty_resume_scores_50() {
        assert_eq!(score_formatting(""), 50);
    }

    #[test]
    fn test_mid_length_resume_without_structure() {
        // 150 words: neither bonus nor penalty
        assert_eq!(score_formatting(&filler(150)), 60);
    }

    #[test]
    fn test_well_structured_resume() {
        let text = format!(
            "Summary\njane.doe@example.com\n+1 (555) 123-4567\n\
             Experience\n- Built things\nEducation\nSkills\nProjects\nAwards\n{}",
            filler(250)
        );
        // 60 + 15 (5+ headers, capped) + 5 email + 5 phone + 10 length + 5 bullet
        assert_eq!(score_formatting(&text), 100);
    }

    #[test]
    fn test_section_points_are_capped() {
        let text = format!(
            "experience education skills projects summary objective awards languages {}",
            filler(142)
        );
        // 150 words total: 60 + 15
        assert_eq!(score_formatting(&text), 75);
    }

    #[test]
    fn test_short_resume_penalized() {
        // 3 words, one header
        assert_eq!(score_formatting("Skills: Rust, Go"), 53);
    }

    #[test]
    fn test_bullets_detected() {
        let text = format!("• shipped it\n{}", filler(150));
        assert_eq!(score_formatting(&text), 65);
    }
}
