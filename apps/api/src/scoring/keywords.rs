//! Keyword Matcher: job-posting keywords found in the résumé.
//!
//! Algorithm:
//! 1. Tokenize requirements, responsibilities, description and title into
//!    unigrams, bigrams and trigrams.
//! 2. Keep the important ones: catalog skills, and tokens longer than three
//!    characters that contain or are contained in a catalog skill. Explicit
//!    requirements are always important.
//! 3. A keyword is matched if it appears verbatim in the normalized résumé,
//!    or if some résumé token is more than 85% similar to it.
//! 4. score = round(matched / important × 100)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::JobPosting;
use crate::scoring::catalog::SkillCatalog;
use crate::scoring::normalize::{normalize, tokenize};
use crate::scoring::similarity::is_similar;
use crate::scoring::skills::percentage;

/// Score returned when the posting yields no keywords at all.
pub const DEFAULT_KEYWORD_SCORE: u32 = 50;
pub const MAX_MATCHED_KEYWORDS: usize = 20;
pub const MAX_MISSING_KEYWORDS: usize = 10;
const KEYWORD_SIMILARITY: f64 = 0.85;
/// Tokens this short only count when they are catalog skills themselves.
const MIN_PARTIAL_KEYWORD_LEN: usize = 3;
/// Requirement strings this short are not taken verbatim as keywords.
const MIN_REQUIREMENT_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub score: u32,
    /// Capped at `MAX_MATCHED_KEYWORDS`.
    pub matched: Vec<String>,
    /// Capped at `MAX_MISSING_KEYWORDS`.
    pub missing: Vec<String>,
}

/// Every unigram, bigram and trigram of the posting's text fields.
pub fn job_keywords(job: &JobPosting) -> BTreeSet<String> {
    job.requirements
        .iter()
        .chain(job.responsibilities.iter())
        .chain(std::iter::once(&job.description))
        .chain(std::iter::once(&job.title))
        .flat_map(|text| tokenize(&normalize(text)))
        .collect()
}

/// The subset of posting keywords worth matching against a résumé.
pub fn important_keywords(catalog: &SkillCatalog, job: &JobPosting) -> BTreeSet<String> {
    let mut important: BTreeSet<String> = job_keywords(job)
        .into_iter()
        .filter(|kw| is_important(catalog, kw))
        .collect();

    for requirement in &job.requirements {
        let requirement = requirement.trim().to_lowercase();
        if requirement.chars().count() > MIN_REQUIREMENT_LEN {
            important.insert(requirement);
        }
    }

    if important.is_empty() {
        important = job
            .requirements
            .iter()
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty())
            .collect();
    }

    important
}

fn is_important(catalog: &SkillCatalog, keyword: &str) -> bool {
    if catalog.is_skill(keyword) {
        return true;
    }
    keyword.chars().count() > MIN_PARTIAL_KEYWORD_LEN
        && catalog
            .skills()
            .any(|skill| keyword.contains(skill) || skill.contains(keyword))
}

/// Matches the posting's important keywords against `resume_text`.
pub fn match_keywords(catalog: &SkillCatalog, resume_text: &str, job: &JobPosting) -> KeywordMatch {
    let important = important_keywords(catalog, job);
    if important.is_empty() {
        return KeywordMatch {
            score: DEFAULT_KEYWORD_SCORE,
            matched: vec![],
            missing: vec![],
        };
    }

    let resume = normalize(resume_text);
    let resume_tokens = tokenize(&resume);

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for keyword in &important {
        let found = resume.contains(keyword.as_str())
            || resume_tokens
                .iter()
                .any(|token| is_similar(keyword, token, KEYWORD_SIMILARITY));

        if found {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    let score = percentage(matched.len(), important.len());
    matched.truncate(MAX_MATCHED_KEYWORDS);
    missing.truncate(MAX_MISSING_KEYWORDS);

    KeywordMatch {
        score,
        matched,
        missing,
    }
}
