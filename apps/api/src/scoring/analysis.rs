//! Analysis text and improvement recommendations.
//!
//! Deterministic templates: one tier sentence for the overall score, one
//! sentence per category, then up to five bulleted recommendations.

use serde::{Deserialize, Serialize};

use crate::scoring::aggregate::{Category, ScoreBreakdown, SubScores};

/// Categories scoring below this get a recommendation.
pub const RECOMMENDATION_THRESHOLD: u32 = 70;
pub const MAX_ANALYSIS_RECOMMENDATIONS: usize = 5;
/// Items named inline in a suggestion or analysis sentence.
const INLINE_ITEMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub area: String,
    pub suggestion: String,
}

/// One recommendation per category scoring below the threshold, in fixed
/// order. Education never produces one.
pub fn extract_recommendations(
    scores: &SubScores,
    missing_keywords: &[String],
    missing_skills: &[String],
) -> Vec<Recommendation> {
    Category::ALL
        .iter()
        .filter(|&&c| scores.get(c) < RECOMMENDATION_THRESHOLD)
        .filter_map(|&c| recommendation_for(c, missing_keywords, missing_skills))
        .collect()
}

fn recommendation_for(
    category: Category,
    missing_keywords: &[String],
    missing_skills: &[String],
) -> Option<Recommendation> {
    let (priority, area, suggestion) = match category {
        Category::Keywords => (
            Priority::High,
            "Keywords",
            if missing_keywords.is_empty() {
                "Add more keywords from the job description".to_string()
            } else {
                format!("Add missing keywords: {}", head(missing_keywords, INLINE_ITEMS))
            },
        ),
        Category::Skills => (
            Priority::High,
            "Skills",
            if missing_skills.is_empty() {
                "Highlight the skills the job description asks for".to_string()
            } else {
                format!("Include these skills: {}", head(missing_skills, INLINE_ITEMS))
            },
        ),
        Category::Experience => (
            Priority::Medium,
            "Experience",
            "Highlight relevant work experience and quantify achievements".to_string(),
        ),
        Category::Formatting => (
            Priority::Medium,
            "Format",
            "Use clear sections: Summary, Experience, Skills, Education".to_string(),
        ),
        Category::ActionVerbs => (
            Priority::Low,
            "Language",
            r#"Start bullet points with action verbs like "developed", "led", "improved""#
                .to_string(),
        ),
        Category::Quantifiable => (
            Priority::Low,
            "Impact",
            "Add metrics: percentages, dollar amounts, team sizes, user counts".to_string(),
        ),
        Category::Education => return None,
    };

    Some(Recommendation {
        priority,
        area: area.to_string(),
        suggestion,
    })
}

/// Builds the analysis paragraph for a finished breakdown.
pub fn generate_analysis(breakdown: &ScoreBreakdown) -> String {
    let scores = &breakdown.scores;
    let mut parts = vec![tier_sentence(breakdown.overall_score).to_string()];

    let keyword = scores.keyword_match_score;
    parts.push(if keyword >= 80 {
        format!(
            "Keywords: Strong alignment with {} key terms from the job description.",
            breakdown.matched_keywords.len()
        )
    } else if keyword >= 60 {
        format!(
            "Keywords: Moderate alignment. Found {} matching keywords.",
            breakdown.matched_keywords.len()
        )
    } else {
        format!(
            "Keywords: Consider adding more relevant keywords. Missing: {}.",
            head_or_none(&breakdown.missing_keywords)
        )
    });

    let skill = scores.skill_match_score;
    parts.push(if skill >= 80 {
        format!(
            "Skills: Excellent skill alignment with {} matching skills.",
            breakdown.matched_skills.len()
        )
    } else if skill >= 60 {
        format!(
            "Skills: Good skill coverage. Consider highlighting: {}.",
            head_or_none(&breakdown.missing_skills)
        )
    } else {
        format!(
            "Skills: Skills gap identified. Missing key skills: {}.",
            head_or_none(&breakdown.missing_skills)
        )
    });

    let (found, required) = (breakdown.years_of_experience, breakdown.years_required);
    parts.push(if required > 0 && found >= required {
        format!("Experience: Meets requirement ({found} years vs {required} required).")
    } else if required > 0 {
        format!("Experience: Below requirement ({found} years vs {required} required).")
    } else if scores.experience_score >= 70 {
        "Experience: Relevant work experience demonstrated.".to_string()
    } else {
        "Experience: Consider adding more details about work experience.".to_string()
    });

    parts.push(
        match scores.education_score {
            s if s >= 85 => "Education: Strong educational background relevant to the role.",
            s if s >= 70 => "Education: Adequate educational qualifications.",
            _ => "Education: Limited evidence of qualifications relevant to the role.",
        }
        .to_string(),
    );

    parts.push(
        if scores.formatting_score >= RECOMMENDATION_THRESHOLD {
            "Format: Clear structure with recognizable sections."
        } else {
            "Format: Structure is hard for an ATS to parse."
        }
        .to_string(),
    );

    parts.push(
        if scores.action_verbs_score >= RECOMMENDATION_THRESHOLD {
            "Language: Strong use of action verbs."
        } else {
            "Language: Few action verbs describe the work."
        }
        .to_string(),
    );

    parts.push(
        if scores.quantifiable_score >= RECOMMENDATION_THRESHOLD {
            "Impact: Achievements are backed by measurable results."
        } else {
            "Impact: Few quantifiable achievements found."
        }
        .to_string(),
    );

    let mut analysis = parts.join(" ");

    let recommendations = extract_recommendations(
        scores,
        &breakdown.missing_keywords,
        &breakdown.missing_skills,
    );
    if !recommendations.is_empty() {
        let bullets: Vec<String> = recommendations
            .iter()
            .take(MAX_ANALYSIS_RECOMMENDATIONS)
            .map(|r| format!("• {}", r.suggestion))
            .collect();
        analysis.push_str("\n\nRecommendations to improve ATS score:\n");
        analysis.push_str(&bullets.join("\n"));
    }

    analysis
}

fn tier_sentence(overall: u32) -> &'static str {
    match overall {
        s if s >= 85 => "Excellent match. This candidate strongly aligns with the job requirements.",
        s if s >= 70 => "Good match. The candidate meets most of the key requirements.",
        s if s >= 55 => {
            "Moderate match. The candidate has some relevant qualifications but gaps exist."
        }
        _ => "Low match. Significant gaps between candidate qualifications and requirements.",
    }
}

fn head(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

fn head_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none identified".to_string()
    } else {
        head(items, INLINE_ITEMS)
    }
}
