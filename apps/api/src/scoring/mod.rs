//! ATS scoring engine.
//!
//! Scores a candidate's application against a job posting with fixed lexical
//! heuristics: keyword overlap, skill alignment, experience, education,
//! formatting and impact language. Every call is pure and deterministic; the
//! only shared data is the immutable [`SkillCatalog`].
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`, built once at startup.

pub mod aggregate;
pub mod analysis;
pub mod batch;
pub mod breakdown;
pub mod catalog;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod handlers;
pub mod impact;
pub mod keywords;
pub mod normalize;
pub mod similarity;
pub mod skills;

use std::sync::Arc;

use tracing::debug;

use crate::models::{Candidate, JobPosting};

pub use aggregate::{ScoreBreakdown, SubScores};
pub use breakdown::BreakdownView;
pub use catalog::SkillCatalog;

/// Matched keywords reported in a breakdown; the matcher itself keeps more.
pub const MAX_REPORTED_KEYWORDS: usize = 15;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The ATS scorer trait. Implement this to swap scoring backends without
/// touching handlers.
///
/// Scoring never fails: missing fields and empty résumé text degrade to
/// default sub-scores.
pub trait AtsScorer: Send + Sync {
    /// Scores `candidate` against `job`. `resume_text` overrides the text
    /// stored on the application, e.g. freshly extracted from an upload.
    fn score(
        &self,
        candidate: &Candidate,
        job: &JobPosting,
        resume_text: Option<&str>,
    ) -> ScoreBreakdown;

    /// Per-category view of [`AtsScorer::score`] for display.
    fn breakdown(
        &self,
        candidate: &Candidate,
        job: &JobPosting,
        resume_text: Option<&str>,
    ) -> BreakdownView {
        BreakdownView::from(self.score(candidate, job, resume_text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAtsScorer
// ────────────────────────────────────────────────────────────────────────────

/// Catalog-driven lexical scorer. Weights:
///
/// | category        | weight |
/// |-----------------|--------|
/// | keywords        | 25%    |
/// | skills          | 25%    |
/// | experience      | 20%    |
/// | education       | 10%    |
/// | formatting      | 10%    |
/// | action verbs    | 5%     |
/// | quantifiable    | 5%     |
#[derive(Debug, Clone)]
pub struct HeuristicAtsScorer {
    catalog: Arc<SkillCatalog>,
}

impl HeuristicAtsScorer {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self { catalog }
    }
}

impl AtsScorer for HeuristicAtsScorer {
    fn score(
        &self,
        candidate: &Candidate,
        job: &JobPosting,
        resume_text: Option<&str>,
    ) -> ScoreBreakdown {
        let catalog = self.catalog.as_ref();
        let resume_text = resume_text.unwrap_or(&candidate.resume_text);
        let combined = candidate.combined_text(resume_text);

        let keywords = keywords::match_keywords(catalog, &combined, job);
        let skills = skills::align_skills(catalog, &candidate.skills, &combined, job);
        let experience =
            experience::match_experience(catalog, &combined, &candidate.experience, job);

        let scores = SubScores {
            keyword_match_score: keywords.score,
            skill_match_score: skills.score,
            experience_score: experience.score,
            education_score: education::score_education(
                &candidate.college,
                &candidate.degree,
                &combined,
                job,
            ),
            formatting_score: formatting::score_formatting(resume_text),
            action_verbs_score: impact::score_action_verbs(catalog, &combined),
            quantifiable_score: impact::score_quantifiable(catalog, &combined),
        };
        let overall_score = scores.overall();

        debug!(
            job = %job.title,
            overall = overall_score,
            keywords = scores.keyword_match_score,
            skills = scores.skill_match_score,
            experience = scores.experience_score,
            education = scores.education_score,
            formatting = scores.formatting_score,
            action_verbs = scores.action_verbs_score,
            quantifiable = scores.quantifiable_score,
            "Scored application"
        );

        let mut matched_keywords = keywords.matched;
        matched_keywords.truncate(MAX_REPORTED_KEYWORDS);

        let mut breakdown = ScoreBreakdown {
            overall_score,
            scores,
            matched_keywords,
            missing_keywords: keywords.missing,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            years_of_experience: experience.years_found,
            years_required: experience.years_required,
            analysis: String::new(),
        };
        breakdown.analysis = analysis::generate_analysis(&breakdown);
        breakdown
    }
}
