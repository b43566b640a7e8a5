//! Impact scorers: action-verb usage and quantifiable achievements.

use crate::scoring::catalog::SkillCatalog;

/// Score when the text shows no signal at all.
pub const BASELINE_IMPACT_SCORE: u32 = 50;

/// (minimum count, score), highest tier first.
const ACTION_VERB_TIERS: &[(usize, u32)] = &[(15, 95), (10, 85), (5, 75), (2, 65)];
const ACHIEVEMENT_TIERS: &[(usize, u32)] = &[(8, 98), (5, 88), (3, 78), (1, 65)];

/// Whitespace-separated words of `text` that are catalog action verbs.
/// Every occurrence counts.
pub fn count_action_verbs(catalog: &SkillCatalog, text: &str) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| catalog.action_verbs.contains(*word))
        .count()
}

pub fn score_action_verbs(catalog: &SkillCatalog, text: &str) -> u32 {
    tier_score(count_action_verbs(catalog, text), ACTION_VERB_TIERS)
}

/// Scores how many distinct achievement patterns (percentages, currency,
/// user counts, "increased by N", rankings...) appear in `text`.
pub fn score_quantifiable(catalog: &SkillCatalog, text: &str) -> u32 {
    tier_score(catalog.achievement_hits(text), ACHIEVEMENT_TIERS)
}

fn tier_score(count: usize, tiers: &[(usize, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(min, _)| count >= *min)
        .map(|&(_, score)| score)
        .unwrap_or(BASELINE_IMPACT_SCORE)
}
