//! Display-oriented view of a [`ScoreBreakdown`]: one row per category.

use serde::{Deserialize, Serialize};

use crate::scoring::aggregate::{Category, ScoreBreakdown};
use crate::scoring::analysis::{extract_recommendations, Recommendation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallRow {
    pub score: u32,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    pub score: u32,
    /// e.g. `"25%"`
    pub weight: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownView {
    pub overall: OverallRow,
    pub breakdown: Vec<CategoryRow>,
    pub analysis: String,
    pub recommendations: Vec<Recommendation>,
}

impl From<ScoreBreakdown> for BreakdownView {
    fn from(scores: ScoreBreakdown) -> Self {
        let breakdown = Category::ALL
            .iter()
            .map(|&category| category_row(category, &scores))
            .collect();
        let recommendations = extract_recommendations(
            &scores.scores,
            &scores.missing_keywords,
            &scores.missing_skills,
        );

        BreakdownView {
            overall: OverallRow {
                score: scores.overall_score,
                label: "ATS Score".to_string(),
                description: "Overall compatibility with job requirements".to_string(),
            },
            breakdown,
            analysis: scores.analysis,
            recommendations,
        }
    }
}

fn category_row(category: Category, scores: &ScoreBreakdown) -> CategoryRow {
    let description = match category {
        Category::Keywords => "How well resume keywords match job description".to_string(),
        Category::Skills => "Technical and soft skills match".to_string(),
        Category::Experience => format!(
            "Experience level ({} years found)",
            scores.years_of_experience
        ),
        Category::Education => "Educational background relevance".to_string(),
        Category::Formatting => "Resume structure and readability".to_string(),
        Category::ActionVerbs => "Use of action verbs".to_string(),
        Category::Quantifiable => "Quantifiable accomplishments".to_string(),
    };

    let (matched, missing) = match category {
        Category::Keywords => (
            Some(scores.matched_keywords.clone()),
            Some(scores.missing_keywords.clone()),
        ),
        Category::Skills => (
            Some(scores.matched_skills.clone()),
            Some(scores.missing_skills.clone()),
        ),
        _ => (None, None),
    };

    CategoryRow {
        category: category.label().to_string(),
        score: scores.scores.get(category),
        weight: format!("{}%", category.weight_percent()),
        description,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::aggregate::SubScores;

    fn sample() -> ScoreBreakdown {
        let scores = SubScores {
            keyword_match_score: 40,
            skill_match_score: 90,
            experience_score: 94,
            education_score: 80,
            formatting_score: 65,
            action_verbs_score: 75,
            quantifiable_score: 78,
        };
        ScoreBreakdown {
            overall_score: scores.overall(),
            scores,
            matched_keywords: vec!["rust".to_string()],
            missing_keywords: vec!["kafka".to_string()],
            matched_skills: vec!["Rust".to_string()],
            missing_skills: vec![],
            years_of_experience: 6,
            years_required: 5,
            analysis: "Good match.".to_string(),
        }
    }

    #[test]
    fn test_view_has_seven_rows_in_order() {
        let view = BreakdownView::from(sample());
        let labels: Vec<&str> = view.breakdown.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Keyword Match",
                "Skills Alignment",
                "Experience",
                "Education",
                "Resume Format",
                "Impact Language",
                "Achievements"
            ]
        );
        let weights: Vec<&str> = view.breakdown.iter().map(|r| r.weight.as_str()).collect();
        assert_eq!(weights, vec!["25%", "25%", "20%", "10%", "10%", "5%", "5%"]);
    }

    #[test]
    fn test_view_carries_scores_and_lists() {
        let view = BreakdownView::from(sample());
        assert_eq!(view.overall.label, "ATS Score");
        assert_eq!(view.breakdown[0].score, 40);
        assert_eq!(view.breakdown[0].missing, Some(vec!["kafka".to_string()]));
        assert_eq!(view.breakdown[2].description, "Experience level (6 years found)");
        assert!(view.breakdown[3].matched.is_none());
        assert_eq!(view.analysis, "Good match.");
    }

    #[test]
    fn test_view_recommendations_follow_thresholds() {
        let view = BreakdownView::from(sample());
        let areas: Vec<&str> = view.recommendations.iter().map(|r| r.area.as_str()).collect();
        assert_eq!(areas, vec!["Keywords", "Format"]);
    }

    #[test]
    fn test_rows_without_lists_omit_them_in_json() {
        let json = serde_json::to_value(BreakdownView::from(sample())).unwrap();
        assert!(json["breakdown"][0].get("matched").is_some());
        assert!(json["breakdown"][4].get("matched").is_none());
        assert_eq!(json["recommendations"][0]["priority"], "high");
    }
}
