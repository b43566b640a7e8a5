//! Batch rescoring: every application of one job, ranked, with summary stats.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Candidate, JobPosting};
use crate::scoring::{AtsScorer, ScoreBreakdown};

/// Applications listed in a summary's `top_candidates`.
pub const TOP_CANDIDATES: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct RescoreItem {
    pub application_id: Uuid,
    #[serde(default)]
    pub application: Candidate,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RescoreResult {
    pub application_id: Uuid,
    #[serde(flatten)]
    pub scores: ScoreBreakdown,
}

/// Application counts per overall-score band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    #[serde(rename = "90-100")]
    pub excellent: usize,
    #[serde(rename = "80-89")]
    pub very_good: usize,
    #[serde(rename = "70-79")]
    pub good: usize,
    #[serde(rename = "60-69")]
    pub fair: usize,
    #[serde(rename = "Below 60")]
    pub below: usize,
}

impl ScoreDistribution {
    fn record(&mut self, overall: u32) {
        match overall {
            90.. => self.excellent += 1,
            80..=89 => self.very_good += 1,
            70..=79 => self.good += 1,
            60..=69 => self.fair += 1,
            _ => self.below += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RescoreSummary {
    /// Mean overall score, one decimal place; 0 when nothing was scored.
    pub average_score: f64,
    pub score_distribution: ScoreDistribution,
    pub top_candidates: Vec<Uuid>,
}

/// Scores every item against `job` and ranks by overall score, highest first.
/// Equal scores keep their input order.
pub fn rescore_all(
    scorer: &dyn AtsScorer,
    job: &JobPosting,
    items: &[RescoreItem],
) -> Vec<RescoreResult> {
    let mut results: Vec<RescoreResult> = items
        .iter()
        .map(|item| RescoreResult {
            application_id: item.application_id,
            scores: scorer.score(&item.application, job, item.resume_text.as_deref()),
        })
        .collect();

    results.sort_by(|a, b| b.scores.overall_score.cmp(&a.scores.overall_score));
    results
}

/// Summary over results already ranked by [`rescore_all`].
pub fn summarize(results: &[RescoreResult]) -> RescoreSummary {
    let mut score_distribution = ScoreDistribution::default();
    for result in results {
        score_distribution.record(result.scores.overall_score);
    }

    let average_score = if results.is_empty() {
        0.0
    } else {
        let total: u32 = results.iter().map(|r| r.scores.overall_score).sum();
        let mean = f64::from(total) / results.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    RescoreSummary {
        average_score,
        score_distribution,
        top_candidates: results
            .iter()
            .take(TOP_CANDIDATES)
            .map(|r| r.application_id)
            .collect(),
    }
}
