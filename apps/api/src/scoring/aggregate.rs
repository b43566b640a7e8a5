//! Aggregator: fixed-weight combination of the seven sub-scores.

use serde::{Deserialize, Serialize};

/// The seven scored categories, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Keywords,
    Skills,
    Experience,
    Education,
    Formatting,
    ActionVerbs,
    Quantifiable,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Keywords,
        Category::Skills,
        Category::Experience,
        Category::Education,
        Category::Formatting,
        Category::ActionVerbs,
        Category::Quantifiable,
    ];

    /// Weight in percent. The seven weights sum to 100.
    pub fn weight_percent(self) -> u32 {
        match self {
            Category::Keywords => 25,
            Category::Skills => 25,
            Category::Experience => 20,
            Category::Education => 10,
            Category::Formatting => 10,
            Category::ActionVerbs => 5,
            Category::Quantifiable => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Keywords => "Keyword Match",
            Category::Skills => "Skills Alignment",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::Formatting => "Resume Format",
            Category::ActionVerbs => "Impact Language",
            Category::Quantifiable => "Achievements",
        }
    }
}

/// The seven sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub keyword_match_score: u32,
    pub skill_match_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    pub formatting_score: u32,
    pub action_verbs_score: u32,
    pub quantifiable_score: u32,
}

impl SubScores {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Keywords => self.keyword_match_score,
            Category::Skills => self.skill_match_score,
            Category::Experience => self.experience_score,
            Category::Education => self.education_score,
            Category::Formatting => self.formatting_score,
            Category::ActionVerbs => self.action_verbs_score,
            Category::Quantifiable => self.quantifiable_score,
        }
    }

    /// `floor(0.25k + 0.25s + 0.20e + 0.10d + 0.10f + 0.05a + 0.05q)`.
    ///
    /// Computed in integer percent so the floor is exact.
    pub fn overall(&self) -> u32 {
        let weighted: u32 = Category::ALL
            .iter()
            .map(|&c| self.get(c).min(100) * c.weight_percent())
            .sum();
        weighted / 100
    }
}

/// Full scoring result for one application against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall_score: u32,
    #[serde(flatten)]
    pub scores: SubScores,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub years_of_experience: u32,
    pub years_required: u32,
    pub analysis: String,
}
