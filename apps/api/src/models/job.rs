use serde::{Deserialize, Serialize};

/// A job posting as read by the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub title: String,
    pub department: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    /// Free-text experience requirement, e.g. "3-5 years".
    pub experience: String,
}
