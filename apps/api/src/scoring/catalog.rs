//! Skill catalog: the static reference data every scorer matches against.
//!
//! Built once at startup (built-in lists or a JSON override file) and shared
//! read-only behind an `Arc`. Nothing mutates a catalog after construction.

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid achievement pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Immutable lexical reference data.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub technical_skills: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub action_verbs: BTreeSet<String>,
    /// Quantifiable-achievement patterns, compiled case-insensitive.
    pub achievement_patterns: Vec<Regex>,
}

/// On-disk catalog override format.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    technical_skills: Vec<String>,
    soft_skills: Vec<String>,
    action_verbs: Vec<String>,
    achievement_patterns: Vec<String>,
}

impl SkillCatalog {
    /// Builds a catalog from raw lists. Entries are lowercased and trimmed;
    /// patterns are compiled case-insensitive.
    pub fn new<S: AsRef<str>>(
        technical_skills: &[S],
        soft_skills: &[S],
        action_verbs: &[S],
        achievement_patterns: &[S],
    ) -> Result<Self, CatalogError> {
        let achievement_patterns = achievement_patterns
            .iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(&format!("(?i){pattern}")).map_err(|source| CatalogError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            technical_skills: to_set(technical_skills),
            soft_skills: to_set(soft_skills),
            action_verbs: to_set(action_verbs),
            achievement_patterns,
        })
    }

    /// The built-in catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(
            TECHNICAL_SKILLS,
            SOFT_SKILLS,
            ACTION_VERBS,
            ACHIEVEMENT_PATTERNS,
        )
    }

    /// Loads a catalog override from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw)?;
        Self::new(
            &file.technical_skills,
            &file.soft_skills,
            &file.action_verbs,
            &file.achievement_patterns,
        )
    }

    /// True if `term` is a technical or soft skill entry.
    pub fn is_skill(&self, term: &str) -> bool {
        self.technical_skills.contains(term) || self.soft_skills.contains(term)
    }

    /// Technical skills followed by soft skills.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.technical_skills
            .iter()
            .chain(self.soft_skills.iter())
            .map(String::as_str)
    }

    /// Number of achievement patterns with at least one hit in `text`.
    pub fn achievement_hits(&self, text: &str) -> usize {
        self.achievement_patterns
            .iter()
            .filter(|re| re.is_match(text))
            .count()
    }
}

fn to_set<S: AsRef<str>>(items: &[S]) -> BTreeSet<String> {
    items
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in lists
// ────────────────────────────────────────────────────────────────────────────

const TECHNICAL_SKILLS: &[&str] = &[
    // Languages
    "python", "javascript", "typescript", "java", "c++", "c#", "go", "golang",
    "rust", "ruby", "php", "swift", "kotlin", "scala", "r", "matlab", "perl",
    "objective-c", "dart", "lua", "haskell", "elixir", "clojure", "groovy",
    // Frontend
    "react", "reactjs", "react.js", "angular", "angularjs", "vue", "vuejs", "vue.js",
    "next.js", "nextjs", "nuxt", "nuxt.js", "svelte", "ember", "backbone",
    "html", "html5", "css", "css3", "sass", "scss", "less", "tailwind", "tailwindcss",
    "bootstrap", "material-ui", "mui", "chakra", "styled-components", "webpack",
    "vite", "parcel", "rollup", "babel", "jquery",
    // Backend
    "node.js", "nodejs", "express", "express.js", "nestjs", "fastify", "koa",
    "django", "flask", "fastapi", "spring", "spring boot", "springboot",
    ".net", "asp.net", "rails", "ruby on rails", "laravel", "symfony",
    "gin", "echo", "fiber", "phoenix", "actix",
    // Databases
    "sql", "mysql", "postgresql", "postgres", "mongodb", "redis", "elasticsearch",
    "cassandra", "dynamodb", "firebase", "firestore", "sqlite", "oracle",
    "mariadb", "couchdb", "neo4j", "graphql", "prisma", "sequelize", "mongoose",
    "typeorm", "sqlalchemy", "hibernate",
    // Cloud & DevOps
    "aws", "amazon web services", "azure", "gcp", "google cloud", "digitalocean",
    "heroku", "vercel", "netlify", "cloudflare", "docker", "kubernetes", "k8s",
    "terraform", "ansible", "puppet", "chef", "jenkins", "gitlab ci", "github actions",
    "circleci", "travis ci", "argo", "helm", "istio", "prometheus", "grafana",
    "datadog", "splunk", "elk", "logstash", "kibana", "nginx", "apache",
    // AI / ML / data
    "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
    "scikit-learn", "sklearn", "pandas", "numpy", "scipy", "matplotlib",
    "seaborn", "plotly", "jupyter", "nlp", "natural language processing",
    "computer vision", "opencv", "neural networks", "cnn", "rnn", "lstm",
    "transformer", "bert", "gpt", "llm", "langchain", "hugging face",
    "data science", "data analysis", "data engineering", "etl", "airflow",
    "spark", "hadoop", "kafka", "flink", "dbt", "snowflake", "databricks",
    "tableau", "power bi", "looker", "metabase",
    // Mobile
    "ios", "android", "react native", "flutter", "xamarin", "ionic",
    "swift ui", "swiftui", "jetpack compose", "kotlin multiplatform",
    // Tools
    "git", "github", "gitlab", "bitbucket", "svn", "mercurial",
    "jira", "confluence", "trello", "asana", "notion", "slack",
    "figma", "sketch", "adobe xd", "invision", "zeplin",
    // Testing
    "jest", "mocha", "chai", "cypress", "selenium", "playwright", "puppeteer",
    "pytest", "unittest", "rspec", "junit", "testng", "postman", "insomnia",
    "tdd", "bdd", "unit testing", "integration testing", "e2e testing",
    // Architecture & practices
    "microservices", "rest", "rest api", "restful", "api",
    "grpc", "websocket", "oauth", "jwt", "saml", "sso", "rbac",
    "ci/cd", "agile", "scrum", "kanban", "devops", "devsecops",
    "solid", "design patterns", "mvc", "mvvm", "clean architecture",
    "domain driven design", "ddd", "event sourcing", "cqrs",
    "serverless", "lambda", "cloud functions", "edge computing",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "problem-solving",
    "critical thinking", "analytical", "creativity", "innovation", "adaptability",
    "time management", "project management", "stakeholder management",
    "presentation", "negotiation", "conflict resolution", "decision making",
    "mentoring", "coaching", "collaboration", "interpersonal", "attention to detail",
    "self-motivated", "proactive", "strategic thinking", "planning", "organization",
];

const ACTION_VERBS: &[&str] = &[
    "achieved", "accomplished", "administered", "analyzed", "architected", "automated",
    "built", "collaborated", "conceptualized", "conducted", "consolidated", "contributed",
    "created", "customized", "debugged", "delivered", "deployed", "designed", "developed",
    "directed", "documented", "drove", "enhanced", "established", "evaluated", "executed",
    "expanded", "facilitated", "founded", "generated", "grew", "headed", "identified",
    "implemented", "improved", "increased", "initiated", "innovated", "integrated",
    "launched", "led", "leveraged", "maintained", "managed", "mentored", "migrated",
    "modernized", "monitored", "negotiated", "optimized", "orchestrated", "organized",
    "oversaw", "partnered", "performed", "pioneered", "planned", "presented", "prioritized",
    "produced", "programmed", "proposed", "provided", "published", "reduced", "refactored",
    "refined", "resolved", "restructured", "reviewed", "revitalized", "scaled", "secured",
    "simplified", "spearheaded", "standardized", "streamlined", "strengthened", "supervised",
    "supported", "surpassed", "tested", "trained", "transformed", "troubleshot", "unified",
    "upgraded", "utilized", "validated", "visualized",
];

const ACHIEVEMENT_PATTERNS: &[&str] = &[
    r"\d+%",
    r"\$[\d,]+[KMB]?",
    r"[\d,]+\s*users?",
    r"[\d,]+\s*customers?",
    r"[\d,]+\s*clients?",
    r"[\d,]+\s*employees?",
    r"[\d,]+\s*team\s*members?",
    r"increased\s*by\s*\d+",
    r"reduced\s*by\s*\d+",
    r"improved\s*by\s*\d+",
    r"saved\s*\$?[\d,]+",
    r"\d+x\s*(?:faster|improvement|growth)",
    r"top\s*\d+%?",
    r"#\d+",
    r"rank(?:ed)?\s*\d+",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_standard_catalog_loads() {
        let catalog = SkillCatalog::standard().unwrap();
        assert!(catalog.technical_skills.contains("machine learning"));
        assert!(catalog.soft_skills.contains("leadership"));
        assert!(catalog.action_verbs.contains("spearheaded"));
        assert_eq!(catalog.achievement_patterns.len(), ACHIEVEMENT_PATTERNS.len());
    }

    #[test]
    fn test_is_skill_checks_both_sets() {
        let catalog = SkillCatalog::standard().unwrap();
        assert!(catalog.is_skill("kubernetes"));
        assert!(catalog.is_skill("teamwork"));
        assert!(!catalog.is_skill("underwater basket weaving"));
    }

    #[test]
    fn test_new_lowercases_and_drops_blanks() {
        let catalog = SkillCatalog::new(&["  Rust ", ""], &["Leadership"], &["Built"], &[]).unwrap();
        assert_eq!(catalog.technical_skills.len(), 1);
        assert!(catalog.technical_skills.contains("rust"));
        assert!(catalog.soft_skills.contains("leadership"));
        assert!(catalog.action_verbs.contains("built"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = SkillCatalog::new(&["rust"], &[], &[], &["(unclosed"]).unwrap_err();
        assert!(matches!(err, CatalogError::Pattern { .. }));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let catalog = SkillCatalog::standard().unwrap();
        assert_eq!(catalog.achievement_hits("INCREASED BY 40 points"), 1);
    }

    #[test]
    fn test_achievement_hits_counts_distinct_patterns() {
        let catalog = SkillCatalog::standard().unwrap();
        // "\d+%", "\$[\d,]+[KMB]?" and "saved\s*\$?[\d,]+"
        let hits = catalog.achievement_hits("increased revenue by 20% and saved $50,000");
        assert_eq!(hits, 3);
        assert_eq!(catalog.achievement_hits("no numbers here"), 0);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "technical_skills": ["Rust", "Tokio"],
                "soft_skills": ["Mentoring"],
                "action_verbs": ["shipped"],
                "achievement_patterns": ["\\d+ ms"]
            }}"#
        )
        .unwrap();

        let catalog = SkillCatalog::from_json_file(file.path()).unwrap();
        assert!(catalog.technical_skills.contains("tokio"));
        assert!(catalog.soft_skills.contains("mentoring"));
        assert_eq!(catalog.achievement_hits("p99 down to 40 MS"), 1);
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let err = SkillCatalog::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_from_json_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = SkillCatalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
