use serde::{Deserialize, Serialize};

/// A candidate's application as submitted through the portal.
///
/// Every field defaults to empty so partially filled applications score
/// instead of failing to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub skills: Vec<String>,
    pub college: String,
    pub degree: String,
    /// Free-text experience summary typed into the application form.
    pub experience: String,
    pub cover_letter: String,
    /// Text previously extracted from the uploaded résumé, if any.
    pub resume_text: String,
}

impl Candidate {
    /// Résumé body, stated experience and cover letter joined with spaces.
    /// This is the text most scorers read.
    pub fn combined_text(&self, resume_text: &str) -> String {
        format!("{} {} {}", resume_text, self.experience, self.cover_letter)
    }
}
