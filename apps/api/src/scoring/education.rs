//! Education Scorer: degree level, institution and domain relevance.

use crate::models::JobPosting;

/// Score when no degree keyword is recognized.
pub const DEFAULT_DEGREE_SCORE: u32 = 70;
const PREMIUM_INSTITUTION_BONUS: u32 = 10;
const RELEVANCE_BONUS: u32 = 5;

/// Degree keywords checked in order; the first hit decides the base score.
/// Highest level first, and within a level the more specific spelling first.
///
/// Matching is by plain substring, so the short abbreviations also hit inside
/// ordinary words ("ms" in "systems", "be" in "member", "ba" in "database").
/// Existing scores depend on this; word-boundary matching would change them.
const DEGREE_LEVELS: &[(&str, u32)] = &[
    ("doctorate", 100),
    ("ph.d", 100),
    ("phd", 100),
    ("m.tech", 90),
    ("master", 90),
    ("mtech", 90),
    ("m.sc", 88),
    ("msc", 88),
    ("mba", 90),
    ("ms", 90),
    ("bachelor", 80),
    ("b.tech", 80),
    ("btech", 80),
    ("b.sc", 78),
    ("bsc", 78),
    ("b.e", 80),
    ("b.a", 75),
    ("be", 80),
    ("ba", 75),
    ("diploma", 60),
    ("associate", 55),
    ("certificate", 50),
];

const PREMIUM_INSTITUTIONS: &[&str] = &[
    "iit", "iisc", "bits", "nit", "iiit", "isb", "iim", "nid", "mit", "stanford", "harvard",
    "berkeley", "cmu", "carnegie mellon", "oxford", "cambridge", "caltech", "eth zurich",
    "georgia tech",
];

/// A role family recognized from the posting's title or department, and the
/// degree keywords that count as relevant to it.
struct DomainRule {
    job_terms: &'static [&'static str],
    degree_terms: &'static [&'static str],
}

/// Checked in order; only the first rule whose job terms match applies.
const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        job_terms: &["software", "developer", "engineer", "tech", "data", "ml", "ai"],
        degree_terms: &[
            "computer",
            "software",
            "engineering",
            "technology",
            "science",
            "data",
            "information",
        ],
    },
    DomainRule {
        job_terms: &["manager", "business", "analyst", "product"],
        degree_terms: &["business", "management", "mba", "commerce", "economics", "finance"],
    },
    DomainRule {
        job_terms: &["design", "ux", "ui", "creative"],
        degree_terms: &["design", "art", "creative", "visual", "ux", "ui", "graphic"],
    },
];

pub fn score_education(college: &str, degree: &str, resume_text: &str, job: &JobPosting) -> u32 {
    let text = format!("{college} {degree} {resume_text}").to_lowercase();

    let base = degree_score(&text);
    let institution = if PREMIUM_INSTITUTIONS.iter().any(|inst| text.contains(inst)) {
        PREMIUM_INSTITUTION_BONUS
    } else {
        0
    };
    let relevance = relevance_bonus(&text, job);

    (base + institution + relevance).min(100)
}

fn degree_score(text: &str) -> u32 {
    DEGREE_LEVELS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|&(_, score)| score)
        .unwrap_or(DEFAULT_DEGREE_SCORE)
}

fn relevance_bonus(text: &str, job: &JobPosting) -> u32 {
    let title = job.title.to_lowercase();
    let department = job.department.to_lowercase();

    let rule = DOMAIN_RULES.iter().find(|rule| {
        rule.job_terms
            .iter()
            .any(|term| title.contains(term) || department.contains(term))
    });

    match rule {
        Some(rule) if rule.degree_terms.iter().any(|term| text.contains(term)) => RELEVANCE_BONUS,
        _ => 0,
    }
}
